//! Choose-k-from-n index generators.
//!
//! [`Combinations`] replaces hand-written nested index loops. Indices come
//! out strictly ascending and in lexicographic order; the iterator is lazy,
//! finite and restartable (clone it or call [`Combinations::reset`]).

/// Binomial coefficient `C(n, k)`; zero when `k > n`.
pub const fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = if k > n - k { n - k } else { k };
    let mut acc = 1usize;
    let mut i = 0;
    while i < k {
        // acc * (n - i) is always divisible by (i + 1) here
        acc = acc * (n - i) / (i + 1);
        i += 1;
    }
    acc
}

/// Iterator over all `K`-element index combinations of `0..n`.
///
/// ```
/// use holdem_equity::combinations::Combinations;
///
/// let pairs: Vec<[usize; 2]> = Combinations::<2>::new(4).collect();
/// assert_eq!(pairs, vec![[0, 1], [0, 2], [0, 3], [1, 2], [1, 3], [2, 3]]);
/// ```
#[derive(Debug, Clone)]
pub struct Combinations<const K: usize> {
    n: usize,
    indices: [usize; K],
    remaining: usize,
}

impl<const K: usize> Combinations<K> {
    pub fn new(n: usize) -> Self {
        let mut indices = [0usize; K];
        for (i, slot) in indices.iter_mut().enumerate() {
            *slot = i;
        }
        Self { n, indices, remaining: binomial(n, K) }
    }

    /// Rewind to the first combination.
    pub fn reset(&mut self) {
        *self = Self::new(self.n);
    }
}

impl<const K: usize> Iterator for Combinations<K> {
    type Item = [usize; K];

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let result = self.indices;
        if self.remaining == 0 {
            return Some(result);
        }

        // Find the rightmost index that can still move right
        let mut i = K;
        while i > 0 {
            i -= 1;
            if self.indices[i] < self.n - K + i {
                self.indices[i] += 1;
                for j in (i + 1)..K {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                break;
            }
        }

        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<const K: usize> ExactSizeIterator for Combinations<K> {}

/// Pick the items at `indices` out of `items`.
pub fn pick<T: Copy, const K: usize>(items: &[T], indices: [usize; K]) -> [T; K] {
    indices.map(|i| items[i])
}
