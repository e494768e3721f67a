use koseq::Seq;
use koseq::testing::assert_seq_equal;

#[test]
fn filter_composes_like_a_conjunction() -> anyhow::Result<()> {
    let data: Vec<i32> = (1..=12).collect();
    let chained = Seq::new(data.clone())
        .filter(|&n| n % 2 == 0)
        .filter(|&n| n % 3 == 0)
        .to_list();
    let fused = Seq::new(data).filter(|&n| n % 2 == 0 && n % 3 == 0).to_list();
    assert_seq_equal(&chained, &fused);
    assert_eq!(chained, vec![6, 12]);
    Ok(())
}

#[test]
fn map_composes_like_function_composition() -> anyhow::Result<()> {
    let data: Vec<i32> = (0..8).collect();
    let chained = Seq::new(data.clone()).map(|n| n + 1).map(|n| n * 3).to_list();
    let fused = Seq::new(data).map(|n| (n + 1) * 3).to_list();
    assert_seq_equal(&chained, &fused);
    Ok(())
}

#[test]
fn filter_not_none_then_filter_then_map() -> anyhow::Result<()> {
    let out = Seq::new(vec![Some(0), Some(1), None, Some(2), Some(3), None, Some(4)])
        .filter_not_none()
        .filter(|&n| n % 2 == 0)
        .map(|n| n * 2)
        .to_list();
    assert_eq!(out, vec![0, 4, 8]);
    Ok(())
}

#[test]
fn map_not_none_drops_absent_results() -> anyhow::Result<()> {
    let out = Seq::new(["1", "two", "3", "four"])
        .map_not_none(|s| s.parse::<i32>().ok())
        .to_list();
    assert_eq!(out, vec![1, 3]);
    Ok(())
}

#[test]
fn flat_map_concatenates_in_upstream_order() -> anyhow::Result<()> {
    let out = Seq::new([1, 2, 3]).flat_map(|n| vec![n; n as usize]).to_list();
    assert_eq!(out, vec![1, 2, 2, 3, 3, 3]);
    Ok(())
}

#[test]
fn flat_map_producing_nothing_is_fine() -> anyhow::Result<()> {
    let out = Seq::new([1, 2, 3]).flat_map(|_| Vec::<i32>::new()).to_list();
    assert!(out.is_empty());
    Ok(())
}

#[test]
fn flatten_equals_flat_map_identity() -> anyhow::Result<()> {
    let nested = vec![vec![1, 2], vec![], vec![3], vec![4, 5]];
    let flattened = Seq::new(nested.clone()).flatten().to_list();
    let flat_mapped = Seq::new(nested).flat_map(|inner| inner).to_list();
    assert_seq_equal(&flattened, &flat_mapped);
    assert_eq!(flattened, vec![1, 2, 3, 4, 5]);
    Ok(())
}

#[test]
fn enumerate_pairs_zero_based_indices() -> anyhow::Result<()> {
    let out = Seq::new(["a", "b", "c"]).enumerate().to_list();
    assert_eq!(out, vec![(0, "a"), (1, "b"), (2, "c")]);
    Ok(())
}

#[test]
fn empty_sequence_yields_nothing() -> anyhow::Result<()> {
    assert!(Seq::<i32>::empty().to_list().is_empty());
    assert!(Seq::<i32>::empty().map(|n| n * 2).to_list().is_empty());
    Ok(())
}

#[test]
fn from_vec_and_new_agree() -> anyhow::Result<()> {
    let a = Seq::from(vec![1, 2, 3]).to_list();
    let b = Seq::new(vec![1, 2, 3]).to_list();
    assert_seq_equal(&a, &b);
    Ok(())
}

#[test]
fn seq_is_iterable_directly() -> anyhow::Result<()> {
    let mut collected = Vec::new();
    for n in Seq::new([1, 2, 3]).map(|n| n * 10) {
        collected.push(n);
    }
    assert_eq!(collected, vec![10, 20, 30]);
    Ok(())
}
