//! Levenshtein edit-distance kernel
//!
//! Generic over the element type: fields are compared token-by-token, but
//! the same kernel works on code points for single-word comparisons.

/// Reusable Levenshtein distance calculator.
///
/// The two DP rows are flat, contiguous buffers owned by the kernel and
/// reused across calls, so a worker that computes millions of distances
/// performs almost no per-call allocation.
#[derive(Debug, Default)]
pub struct EditDistance {
    prev_row: Vec<usize>,
    curr_row: Vec<usize>,
}

impl EditDistance {
    pub fn new() -> Self {
        Self::default()
    }

    /// Minimum number of single-element insertions, deletions, or
    /// substitutions needed to transform `one` into `two`.
    pub fn distance<T: PartialEq>(&mut self, one: &[T], two: &[T]) -> usize {
        let mut one = one;
        let mut two = two;

        // Shared suffix and prefix contribute nothing to the distance.
        let suffix = common_suffix_len(one, two);
        one = &one[..one.len() - suffix];
        two = &two[..two.len() - suffix];
        let prefix = common_prefix_len(one, two);
        one = &one[prefix..];
        two = &two[prefix..];

        if one.is_empty() {
            return two.len();
        }
        if two.is_empty() {
            return one.len();
        }

        // Keep the shorter sequence on the column axis so the rows stay small.
        if two.len() > one.len() {
            std::mem::swap(&mut one, &mut two);
        }

        // Rolling two-row DP: prev_row is row i-1 of the classic table,
        // curr_row is row i. Only the final scalar is needed, so the full
        // (len1+1) x (len2+1) table is never materialized.
        let width = two.len() + 1;
        self.prev_row.clear();
        self.prev_row.extend(0..width);
        self.curr_row.clear();
        self.curr_row.resize(width, 0);

        for (i, elem_one) in one.iter().enumerate() {
            self.curr_row[0] = i + 1;
            for (j, elem_two) in two.iter().enumerate() {
                self.curr_row[j + 1] = if elem_one == elem_two {
                    self.prev_row[j]
                } else {
                    1 + self.prev_row[j]
                        .min(self.prev_row[j + 1])
                        .min(self.curr_row[j])
                };
            }
            std::mem::swap(&mut self.prev_row, &mut self.curr_row);
        }

        self.prev_row[width - 1]
    }
}

fn common_suffix_len<T: PartialEq>(one: &[T], two: &[T]) -> usize {
    one.iter()
        .rev()
        .zip(two.iter().rev())
        .take_while(|(a, b)| a == b)
        .count()
}

fn common_prefix_len<T: PartialEq>(one: &[T], two: &[T]) -> usize {
    one.iter().zip(two.iter()).take_while(|(a, b)| a == b).count()
}
