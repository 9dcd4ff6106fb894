use city_router::data_structures::MinHeap;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_pops_in_priority_order() {
    let mut heap = MinHeap::new();
    heap.push("c", 3.0);
    heap.push("a", 1.0);
    heap.push("d", 4.0);
    heap.push("b", 2.0);

    assert_eq!(heap.size(), 4);
    assert_eq!(heap.peek(), Some((&"a", 1.0)));

    let order: Vec<&str> = std::iter::from_fn(|| heap.pop().map(|(item, _)| item)).collect();
    assert_eq!(order, vec!["a", "b", "c", "d"]);
    assert!(heap.is_empty());
    assert_eq!(heap.pop(), None);
}

#[test]
fn test_stale_duplicates_are_kept() {
    // No decrease-key: a second push for the same payload is a separate entry
    let mut heap = MinHeap::new();
    heap.push("x", 10.0);
    heap.push("x", 4.0);

    assert_eq!(heap.pop(), Some(("x", 4.0)));
    assert_eq!(heap.pop(), Some(("x", 10.0)));
}

#[test]
fn test_min_priority_of_empty_heap_is_infinite() {
    let mut heap: MinHeap<usize, f64> = MinHeap::default();
    assert!(heap.min_priority().is_infinite());

    heap.push(1, 2.5);
    assert_eq!(heap.min_priority(), 2.5);

    heap.clear();
    assert!(heap.is_empty());
    assert!(heap.min_priority().is_infinite());
}

#[test]
fn test_random_sequence_is_sorted() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut heap = MinHeap::new();
    let mut expected: Vec<f64> = (0..500).map(|_| rng.gen_range(0.0..1000.0)).collect();
    for (i, &priority) in expected.iter().enumerate() {
        heap.push(i, priority);
    }

    expected.sort_by(|a, b| a.partial_cmp(b).unwrap());
    let popped: Vec<f64> = std::iter::from_fn(|| heap.pop().map(|(_, priority)| priority)).collect();
    assert_eq!(popped, expected);
}
