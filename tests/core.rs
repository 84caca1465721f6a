use lazeq::testing::*;
use lazeq::{Sequence, from, from_iter, range};

#[test]
fn filter_select_chain() -> anyhow::Result<()> {
    let out = from(vec![1, 2, 3, 4, 5])
        .filter(|n: &i32| n % 2 == 0)
        .select(|n: &i32| n * 10)
        .to_vec();
    assert_seq_equal(&out, &[20, 40]);
    Ok(())
}

#[test]
fn filter_preserves_original_order() -> anyhow::Result<()> {
    let out = from(vec![9, 2, 7, 4, 5, 6])
        .filter(|n: &i32| n % 2 == 0)
        .to_vec();
    assert_seq_equal(&out, &[2, 4, 6]);
    Ok(())
}

#[test]
fn select_composes_like_function_composition() -> anyhow::Result<()> {
    let composed = from(vec![1, 2, 3])
        .select(|n: &i32| n + 1)
        .select(|n: &i32| n * 3)
        .to_vec();
    let fused = from(vec![1, 2, 3]).select(|n: &i32| (n + 1) * 3).to_vec();
    assert_seq_equal(&composed, &fused);
    Ok(())
}

#[test]
fn chains_are_retraversable() -> anyhow::Result<()> {
    let chain = from(vec![3, 1, 2]).select(|n: &i32| n * 2);
    let first_pass = chain.to_vec();
    let second_pass = chain.to_vec();
    assert_seq_equal(&first_pass, &second_pass);
    assert_seq_equal(&first_pass, &[6, 2, 4]);
    Ok(())
}

#[test]
fn take_caps_at_source_length() -> anyhow::Result<()> {
    let source = vec![1, 2, 3, 4, 5];
    for n in [0usize, 1, 3, 5, 8] {
        let out = from(source.clone()).take(n).to_vec();
        assert_eq!(out.len(), n.min(source.len()));
        assert_seq_equal(&out, &source[..n.min(source.len())]);
    }
    Ok(())
}

#[test]
fn skip_then_take_partitions_without_overlap() -> anyhow::Result<()> {
    let source: Vec<i64> = (0..10).collect();
    for n in [0usize, 1, 4, 10, 15] {
        let prefix = from(source.clone()).take(n).to_vec();
        let rest = from(source.clone()).skip(n).to_vec();
        let mut rejoined = prefix;
        rejoined.extend(rest);
        assert_seq_equal(&rejoined, &source);
    }
    Ok(())
}

#[test]
fn take_and_skip_compose_on_lazy_upstreams() -> anyhow::Result<()> {
    let out = range(0, 100)
        .filter(|n: &i64| n % 3 == 0)
        .skip(2)
        .take(3)
        .to_vec();
    assert_seq_equal(&out, &[6, 9, 12]);
    Ok(())
}

#[test]
fn page_chunks_with_short_final_page() -> anyhow::Result<()> {
    let pages = from(vec![1, 2, 3, 4, 5]).page(2).to_vec();
    assert_eq!(pages, vec![vec![1, 2], vec![3, 4], vec![5]]);

    let exact = from(vec![1, 2, 3, 4]).page(2).to_vec();
    assert_eq!(exact, vec![vec![1, 2], vec![3, 4]]);
    Ok(())
}

#[test]
fn page_of_zero_is_empty() -> anyhow::Result<()> {
    let pages = from(vec![1, 2, 3]).page(0).to_vec();
    assert!(pages.is_empty());
    Ok(())
}

#[test]
fn concat_yields_first_then_second() -> anyhow::Result<()> {
    let out = from(vec![1, 2]).concat(from(vec![3, 4, 5])).to_vec();
    assert_seq_equal(&out, &[1, 2, 3, 4, 5]);
    Ok(())
}

#[test]
fn concat_lazy_and_realized_sides_agree() -> anyhow::Result<()> {
    // Both sides realized takes the bulk path; a filtered side forces the
    // pull path. Outputs must match.
    let bulk = from(vec![1, 2]).concat(from(vec![3, 4])).to_vec();
    let pulled = from(vec![1, 2])
        .filter(|_: &i32| true)
        .concat(from(vec![3, 4]))
        .to_vec();
    assert_seq_equal(&bulk, &pulled);
    Ok(())
}

#[test]
fn fast_path_and_pull_path_outputs_match() -> anyhow::Result<()> {
    let source: Vec<i64> = (0..50).collect();
    let fast = from(source.clone())
        .select(|n: &i64| n * n)
        .to_vec();
    let slow = from_iter(source)
        .filter(|_: &i64| true)
        .select(|n: &i64| n * n)
        .to_vec();
    assert_seq_equal(&fast, &slow);
    Ok(())
}

#[test]
fn deep_chains_stay_lazy_until_finalized() -> anyhow::Result<()> {
    use std::cell::Cell;

    let visits = Cell::new(0usize);
    let chain = range(0, 1000)
        .select(|n: &i64| {
            visits.set(visits.get() + 1);
            n * 2
        })
        .filter(|n: &i64| n % 4 == 0)
        .take(3);
    assert_eq!(visits.get(), 0);

    let out = chain.to_vec();
    assert_seq_equal(&out, &[0, 4, 8]);
    // Three hits required pulling 0..=4 through the projection.
    assert_eq!(visits.get(), 5);
    Ok(())
}

#[test]
fn iter_bridge_supports_for_loops() -> anyhow::Result<()> {
    let seq = from(vec![1, 2, 3]).select(|n: &i32| n * 2);
    let mut collected = Vec::new();
    for value in seq.iter() {
        collected.push(value);
    }
    assert_seq_equal(&collected, &[2, 4, 6]);
    Ok(())
}
