use lazeq::testing::*;
use lazeq::{Sequence, from};

#[test]
fn select_many_flattens_and_skips_empty_inners() -> anyhow::Result<()> {
    let out = from(vec![vec![1, 2], vec![3], vec![], vec![4]])
        .select_many(|v: &Vec<i32>| v.clone())
        .to_vec();
    assert_seq_equal(&out, &[1, 2, 3, 4]);
    Ok(())
}

#[test]
fn select_many_over_all_empty_inners_is_empty() -> anyhow::Result<()> {
    let out = from(vec![Vec::<i32>::new(), vec![], vec![]])
        .select_many(|v: &Vec<i32>| v.clone())
        .to_vec();
    assert!(out.is_empty());
    Ok(())
}

#[test]
fn select_many_preserves_outer_then_inner_order() -> anyhow::Result<()> {
    let out = from(vec![3, 1, 2])
        .select_many(|n: &i64| 0..*n)
        .to_vec();
    assert_seq_equal(&out, &[0, 1, 2, 0, 0, 1]);
    Ok(())
}

#[test]
fn flat_is_identity_select_many() -> anyhow::Result<()> {
    let nested = vec![vec!["a", "b"], vec![], vec!["c"]];
    let flattened = from(nested.clone()).flat().to_vec();
    let expanded = from(nested).select_many(|v: &Vec<&str>| v.clone()).to_vec();
    assert_seq_equal(&flattened, &expanded);
    assert_seq_equal(&flattened, &["a", "b", "c"]);
    Ok(())
}

#[test]
fn select_many_pairs_keeps_outer_attached() -> anyhow::Result<()> {
    let out = from(vec![("x", vec![1, 2]), ("y", vec![]), ("z", vec![3])])
        .select_many_pairs(|pair: &(&str, Vec<i32>)| pair.1.clone())
        .select(|(outer, inner)| (outer.0, *inner))
        .to_vec();
    assert_seq_equal(&out, &[("x", 1), ("x", 2), ("z", 3)]);
    Ok(())
}

#[test]
fn select_many_chains_into_further_operators() -> anyhow::Result<()> {
    let out = from(vec![vec![5, 2], vec![8, 1]])
        .select_many(|v: &Vec<i32>| v.clone())
        .filter(|n: &i32| *n > 1)
        .order_by(|n: &i32| *n)
        .to_vec();
    assert_seq_equal(&out, &[2, 5, 8]);
    Ok(())
}

#[test]
fn select_many_visits_only_what_downstream_pulls() -> anyhow::Result<()> {
    use std::cell::Cell;

    let extractions = Cell::new(0usize);
    let out = from(vec![vec![1, 2, 3], vec![4, 5], vec![6]])
        .select_many(|v: &Vec<i32>| {
            extractions.set(extractions.get() + 1);
            v.clone()
        })
        .take(2)
        .to_vec();
    assert_seq_equal(&out, &[1, 2]);
    assert_eq!(extractions.get(), 1);
    Ok(())
}
