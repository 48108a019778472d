use super::*;

fn batcher(size: usize) -> Batcher {
    Batcher::new(NonZeroUsize::new(size).unwrap())
}

fn batches<'a, T>(batcher: &Batcher, items: &'a [T]) -> Vec<&'a [T]> {
    (0..batcher.num_batches(items.len()))
        .map(|n| batcher.slice(items, n))
        .collect()
}

#[test]
fn test_batching_small() {
    let batcher = batcher(3);
    let items = vec![
        "query1".to_string(),
        "query2".to_string(),
        "query3".to_string(),
        "query4".to_string(),
        "query5".to_string(),
    ];

    let batches = batches(&batcher, &items);
    assert_eq!(batches.len(), 2);
    assert_eq!(batches[0].len(), 3);
    assert_eq!(batches[1].len(), 2);
}

#[test]
fn test_batching_exact_size() {
    let batcher = batcher(5);
    let items = vec!["a".to_string(); 10];

    let batches = batches(&batcher, &items);
    assert_eq!(batches.len(), 2);
    assert_eq!(batches[0].len(), 5);
    assert_eq!(batches[1].len(), 5);
}

#[test]
fn test_batching_empty() {
    let batcher = batcher(100);
    let items: Vec<String> = vec![];

    assert_eq!(batcher.num_batches(0), 0);
    assert!(batches(&batcher, &items).is_empty());
    assert!(batcher.slice(&items, 0).is_empty());
}

#[test]
fn test_num_batches_is_ceiling() {
    let batcher = batcher(4);
    assert_eq!(batcher.num_batches(1), 1);
    assert_eq!(batcher.num_batches(4), 1);
    assert_eq!(batcher.num_batches(5), 2);
    assert_eq!(batcher.num_batches(1001), 251);
}

#[test]
fn test_five_queries_batch_size_two() {
    let batcher = batcher(2);
    let items: Vec<usize> = (0..5).collect();

    let sizes: Vec<usize> = batches(&batcher, &items).iter().map(|b| b.len()).collect();
    assert_eq!(sizes, vec![2, 2, 1]);

    assert_eq!(batcher.slice(&items, 0), &[0, 1]);
    assert_eq!(batcher.slice(&items, 1), &[2, 3]);
    assert_eq!(batcher.slice(&items, 2), &[4]);
}

#[test]
fn test_bounds_past_end_are_empty() {
    let batcher = batcher(2);
    assert_eq!(batcher.bounds(3, 5), 5..5);
    assert_eq!(batcher.bounds(usize::MAX, 5), 5..5);
    assert!(batcher.slice(&[1, 2, 3], 10).is_empty());
}

#[test]
fn test_slices_cover_items_in_order() {
    let batcher = batcher(3);
    let items: Vec<u32> = (0..8).collect();

    let rejoined: Vec<u32> = batches(&batcher, &items).concat();
    assert_eq!(rejoined, items);
    assert_eq!(batcher.bounds(2, items.len()), 6..8);
}
