//! 轮询分片
//!
//! 不变量：原始序列中下标为 i 的元素落入分片 i % n，
//! 各分片互不相交且并集等于原始序列；`merge_round_robin`
//! 是 `split_round_robin` 的精确逆操作。

/// 把序列按轮询方式拆成 worker_count 个互不相交的分片
///
/// worker_count 下限为 1；空序列产生 worker_count 个空分片。
pub fn split_round_robin<T>(items: Vec<T>, worker_count: usize) -> Vec<Vec<T>> {
    let worker_count = worker_count.max(1);
    let mut partitions: Vec<Vec<T>> = (0..worker_count).map(|_| Vec::new()).collect();
    for (index, item) in items.into_iter().enumerate() {
        partitions[index % worker_count].push(item);
    }
    partitions
}

/// 按原始顺序合并轮询分片
pub fn merge_round_robin<T>(partitions: Vec<Vec<T>>) -> Vec<T> {
    let worker_count = partitions.len().max(1);
    let total = partitions.iter().map(Vec::len).sum();
    let mut cursors: Vec<_> = partitions.into_iter().map(Vec::into_iter).collect();
    let mut merged = Vec::with_capacity(total);
    for index in 0..total {
        if let Some(item) = cursors[index % worker_count].next() {
            merged.push(item);
        }
    }
    merged
}
