//! Iterative permutation generation (Heap's algorithm).
//!
//! Each step performs a single swap, so walking all `n!` permutations
//! allocates nothing beyond the two `n`-length buffers made up front.

/// Generator over all permutations of `0..n`.
///
/// Yields borrowed slices, so it is driven with
/// [`next_permutation`](HeapPermutations::next_permutation) rather than
/// `Iterator`. Call [`reset`](HeapPermutations::reset) to walk again.
#[derive(Clone, Debug)]
pub struct HeapPermutations {
    perm: Vec<usize>,
    counters: Vec<usize>,
    level: usize,
    started: bool,
}

impl HeapPermutations {
    /// Creates a generator over permutations of `0..n`, starting at the identity.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            perm: (0..n).collect(),
            counters: vec![0; n],
            level: 1,
            started: false,
        }
    }

    /// Number of elements being permuted.
    #[must_use]
    pub fn len(&self) -> usize {
        self.perm.len()
    }

    /// Returns true when permuting zero elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.perm.is_empty()
    }

    /// Rewinds to the identity permutation.
    pub fn reset(&mut self) {
        for (i, p) in self.perm.iter_mut().enumerate() {
            *p = i;
        }
        self.counters.fill(0);
        self.level = 1;
        self.started = false;
    }

    /// Advances to the next permutation.
    ///
    /// Returns `None` once all `n!` permutations have been produced. For
    /// `n = 0` the single empty permutation is produced once.
    pub fn next_permutation(&mut self) -> Option<&[usize]> {
        if !self.started {
            self.started = true;
            return Some(&self.perm);
        }

        let n = self.perm.len();
        while self.level < n {
            let i = self.level;
            if self.counters[i] < i {
                if i % 2 == 0 {
                    self.perm.swap(0, i);
                } else {
                    self.perm.swap(self.counters[i], i);
                }
                self.counters[i] += 1;
                self.level = 1;
                return Some(&self.perm);
            }
            self.counters[i] = 0;
            self.level += 1;
        }
        None
    }
}

/// `n!`, or `None` on overflow.
#[must_use]
pub fn factorial(n: usize) -> Option<usize> {
    (1..=n).try_fold(1usize, usize::checked_mul)
}
