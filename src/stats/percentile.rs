use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

#[derive(Debug, Clone, Copy, PartialEq)]
struct TotalF64(f64);

impl Eq for TotalF64 {}

impl PartialOrd for TotalF64 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TotalF64 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Size of the retained set for `percentile` over `n` items: everything at
/// or above the truncated percentile index.
pub fn retained_len(percentile: f64, n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    let threshold_index = ((percentile * n as f64) as usize).min(n - 1);
    n - threshold_index
}

/// Value at `percentile` in one pass, keeping only the top `retained_len`
/// keys in a min-heap. Matches `sorted[(percentile * n) as usize]`.
pub fn value_at_percentile<T, F>(percentile: f64, data: &[T], key: F) -> Option<f64>
where
    F: Fn(&T) -> f64,
{
    let capacity = retained_len(percentile, data.len());
    if capacity == 0 {
        return None;
    }
    let mut heap: BinaryHeap<Reverse<TotalF64>> = BinaryHeap::with_capacity(capacity);
    for item in data {
        let value = TotalF64(key(item));
        if heap.len() < capacity {
            heap.push(Reverse(value));
            continue;
        }
        if let Some(Reverse(head)) = heap.peek() {
            if *head <= value {
                heap.pop();
                heap.push(Reverse(value));
            }
        }
    }
    heap.peek().map(|Reverse(v)| v.0)
}

#[cfg(test)]
#[path = "../../tests/src_inline/stats/percentile.rs"]
mod tests;
