// File: crates/sortplot/src/algorithms.rs
// Summary: Instrumented sorting algorithms counting comparisons and swaps.

/// Operation counts accumulated by one sort run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counters {
    pub comparisons: u64,
    pub swaps: u64,
}

pub type SortFn = fn(&mut [u64]) -> Counters;

// Every exchange counts, including an element swapped with itself.
fn exchange(v: &mut [u64], i: usize, j: usize, c: &mut Counters) {
    v.swap(i, j);
    c.swaps += 1;
}

/// Lomuto quicksort with the last element as pivot. One comparison per
/// partition scan step; the final pivot placement counts as a swap.
pub fn quick_sort(v: &mut [u64]) -> Counters {
    let mut c = Counters::default();
    quick_rec(v, &mut c);
    c
}

fn quick_rec(v: &mut [u64], c: &mut Counters) {
    if v.len() < 2 {
        return;
    }
    let p = partition(v, c);
    let (lo, hi) = v.split_at_mut(p);
    quick_rec(lo, c);
    quick_rec(&mut hi[1..], c);
}

fn partition(v: &mut [u64], c: &mut Counters) -> usize {
    let high = v.len() - 1;
    let pivot = v[high];
    // i is the size of the <= pivot region at the front
    let mut i = 0;
    for j in 0..high {
        c.comparisons += 1;
        if v[j] <= pivot {
            exchange(v, i, j, c);
            i += 1;
        }
    }
    exchange(v, i, high, c);
    i
}

/// Top-down mergesort. Comparisons count each two-way test; taking an
/// element from the right half counts as a swap, copied tails count nothing.
pub fn merge_sort(v: &mut [u64]) -> Counters {
    let mut c = Counters::default();
    merge_rec(v, &mut c);
    c
}

fn merge_rec(v: &mut [u64], c: &mut Counters) {
    let n = v.len();
    if n < 2 {
        return;
    }
    // Left half takes the extra element when n is odd.
    let mid = (n + 1) / 2;
    {
        let (l, r) = v.split_at_mut(mid);
        merge_rec(l, c);
        merge_rec(r, c);
    }
    merge_halves(v, mid, c);
}

fn merge_halves(v: &mut [u64], mid: usize, c: &mut Counters) {
    let left = v[..mid].to_vec();
    let right = v[mid..].to_vec();
    let (mut i, mut j, mut k) = (0, 0, 0);
    while i < left.len() && j < right.len() {
        c.comparisons += 1;
        if left[i] <= right[j] {
            v[k] = left[i];
            i += 1;
        } else {
            v[k] = right[j];
            j += 1;
            c.swaps += 1;
        }
        k += 1;
    }
    while i < left.len() {
        v[k] = left[i];
        i += 1;
        k += 1;
    }
    while j < right.len() {
        v[k] = right[j];
        j += 1;
        k += 1;
    }
}

/// Bubble sort without early exit: always n*(n-1)/2 comparisons.
pub fn bubble_sort(v: &mut [u64]) -> Counters {
    let mut c = Counters::default();
    let n = v.len();
    for i in 0..n.saturating_sub(1) {
        for j in 0..n - i - 1 {
            c.comparisons += 1;
            if v[j] > v[j + 1] {
                exchange(v, j, j + 1, &mut c);
            }
        }
    }
    c
}

/// Heapsort with recursive sift-down. Each existing child costs one
/// comparison whether or not it wins.
pub fn heap_sort(v: &mut [u64]) -> Counters {
    let mut c = Counters::default();
    let n = v.len();
    for i in (0..n / 2).rev() {
        heapify(v, n, i, &mut c);
    }
    for i in (1..n).rev() {
        exchange(v, 0, i, &mut c);
        heapify(v, i, 0, &mut c);
    }
    c
}

fn heapify(v: &mut [u64], n: usize, i: usize, c: &mut Counters) {
    let mut largest = i;
    let left = 2 * i + 1;
    let right = 2 * i + 2;
    if left < n {
        c.comparisons += 1;
        if v[left] > v[largest] {
            largest = left;
        }
    }
    if right < n {
        c.comparisons += 1;
        if v[right] > v[largest] {
            largest = right;
        }
    }
    if largest != i {
        exchange(v, i, largest, c);
        heapify(v, n, largest, c);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_sorted(v: &[u64]) -> bool {
        v.windows(2).all(|w| w[0] <= w[1])
    }

    #[test]
    fn all_sorts_sort() {
        let input: Vec<u64> = vec![9, 1, 8, 2, 7, 3, 6, 4, 5, 0, 5, 5];
        for sort in [quick_sort, merge_sort, bubble_sort, heap_sort] {
            let mut v = input.clone();
            sort(&mut v);
            assert!(is_sorted(&v), "not sorted: {:?}", v);
        }
    }

    #[test]
    fn empty_and_single_are_free() {
        for sort in [quick_sort, merge_sort, bubble_sort, heap_sort] {
            let mut empty: Vec<u64> = vec![];
            assert_eq!(sort(&mut empty), Counters::default());
            let mut one = vec![42u64];
            assert_eq!(sort(&mut one), Counters::default());
        }
    }

    #[test]
    fn bubble_comparisons_are_exact() {
        // No early exit: a sorted array still costs the full n*(n-1)/2.
        for n in [2usize, 5, 10, 37] {
            let mut v: Vec<u64> = (0..n as u64).collect();
            let c = bubble_sort(&mut v);
            assert_eq!(c.comparisons, (n * (n - 1) / 2) as u64);
            assert_eq!(c.swaps, 0);
        }
        let mut rev: Vec<u64> = (0..10u64).rev().collect();
        let c = bubble_sort(&mut rev);
        assert_eq!(c.comparisons, 45);
        assert_eq!(c.swaps, 45);
    }

    #[test]
    fn quick_sort_counts_self_swaps() {
        // Partitioning [1, 2] compares once, swaps v[0] with itself,
        // then places the pivot: two swaps total.
        let mut v = vec![1u64, 2];
        let c = quick_sort(&mut v);
        assert_eq!(c.comparisons, 1);
        assert_eq!(c.swaps, 2);
    }

    #[test]
    fn merge_sort_swap_counts_right_takes() {
        // Merging [2] and [1]: one comparison, right element taken first.
        let mut v = vec![2u64, 1];
        let c = merge_sort(&mut v);
        assert_eq!(c.comparisons, 1);
        assert_eq!(c.swaps, 1);

        // Already ordered halves never take from the right.
        let mut v = vec![1u64, 2, 3, 4];
        let c = merge_sort(&mut v);
        assert_eq!(c.swaps, 0);
    }

    #[test]
    fn heap_sort_child_comparisons() {
        // Three elements: building the heap costs 2 comparisons at the
        // root, the two extractions cost 1 and 0 on shrinking heaps.
        let mut v = vec![3u64, 1, 2];
        let c = heap_sort(&mut v);
        assert_eq!(c.comparisons, 3);
        assert_eq!(c.swaps, 2);
        assert!(is_sorted(&v));
    }
}
