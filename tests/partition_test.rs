use brick_price_report::orchestrator::{merge_round_robin, split_round_robin};

#[test]
fn assigns_elements_by_index_modulo_worker_count() {
    let items: Vec<usize> = (0..10).collect();
    let partitions = split_round_robin(items, 3);

    assert_eq!(partitions.len(), 3);
    for (original_index, expected) in (0..10).enumerate() {
        let partition = original_index % 3;
        let position = original_index / 3;
        assert_eq!(partitions[partition][position], expected);
    }
}

#[test]
fn partitions_are_disjoint_and_cover_the_input() {
    let items: Vec<u32> = vec![7, 7, 1, 9, 3, 3, 5, 2];
    let partitions = split_round_robin(items.clone(), 3);

    let total: usize = partitions.iter().map(Vec::len).sum();
    assert_eq!(total, items.len());

    // 多重集相等：合并排序后与原始排序一致
    let mut collected: Vec<u32> = partitions.into_iter().flatten().collect();
    let mut expected = items;
    collected.sort_unstable();
    expected.sort_unstable();
    assert_eq!(collected, expected);
}

#[test]
fn merge_restores_the_original_order() {
    let items: Vec<String> = (0..25).map(|i| format!("set-{}", i)).collect();
    for worker_count in 1..=8 {
        let partitions = split_round_robin(items.clone(), worker_count);
        assert_eq!(merge_round_robin(partitions), items);
    }
}

#[test]
fn more_workers_than_items_leaves_excess_partitions_empty() {
    let items = vec!["a", "b"];
    let partitions = split_round_robin(items, 8);

    assert_eq!(partitions.len(), 8);
    assert_eq!(partitions[0], vec!["a"]);
    assert_eq!(partitions[1], vec!["b"]);
    for partition in &partitions[2..] {
        assert!(partition.is_empty());
    }
}

#[test]
fn empty_input_yields_all_empty_partitions() {
    let partitions = split_round_robin(Vec::<i32>::new(), 4);
    assert_eq!(partitions.len(), 4);
    assert!(partitions.iter().all(Vec::is_empty));
    assert!(merge_round_robin(partitions).is_empty());
}

#[test]
fn worker_count_is_clamped_to_at_least_one() {
    let partitions = split_round_robin(vec![1, 2, 3], 0);
    assert_eq!(partitions.len(), 1);
    assert_eq!(partitions[0], vec![1, 2, 3]);
}
