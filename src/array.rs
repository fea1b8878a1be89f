//! Algorithms over fixed-length integer arrays.
//!
//! Every function borrows its input immutably. Operations that are
//! inherently mutating (sort, reverse, dedup, rotation) work on a private
//! copy and return it, so the caller's slice is never observably changed.
//!
//! The main entry points are [`min_max`], [`sum`], [`average`],
//! [`linear_search`], [`sort`], [`binary_search`], [`reverse`],
//! [`dedup_sorted`] and [`rotate_right`].

use crate::core::{Result, SeqError};

/// Running extremes of a non-empty array.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MinMax {
    pub min: i32,
    pub max: i32,
}

/// The two interchangeable ways to rotate an array to the right.
///
/// Both strategies produce identical output for identical input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RotationStrategy {
    /// Reverse the whole copy, then its first `k` elements, then the rest.
    /// `O(n)` time, no buffer beyond the working copy.
    #[default]
    Reversal,
    /// Copy the last `k` elements to the front of a fresh buffer, followed by
    /// the first `n - k`. `O(n)` time, `O(n)` extra space.
    Buffer,
}

/// Returns `true` if `values` is absent or has no elements.
///
/// ```
/// use seqkit::array::is_empty;
///
/// assert!(is_empty(None));
/// assert!(is_empty(Some(&[][..])));
/// assert!(!is_empty(Some(&[7][..])));
/// ```
pub fn is_empty(values: Option<&[i32]>) -> bool {
    values.is_none_or(|values| values.is_empty())
}

/// Finds the smallest and largest value in a single left-to-right scan.
///
/// # Errors
///
/// Returns [`SeqError::EmptyInput`] if `values` is empty, since there is no
/// element to seed the accumulators with.
///
/// # Examples
///
/// ```
/// use seqkit::array::{min_max, MinMax};
///
/// let extremes = min_max(&[5, 3, 9, 2, 11, 4, 4, 22, 0, 4]).unwrap();
/// assert_eq!(extremes, MinMax { min: 0, max: 22 });
/// ```
pub fn min_max(values: &[i32]) -> Result<MinMax> {
    let (&first, rest) = values
        .split_first()
        .ok_or(SeqError::EmptyInput { operation: "min_max" })?;

    let mut extremes = MinMax {
        min: first,
        max: first,
    };
    for &value in rest {
        if value < extremes.min {
            extremes.min = value;
        }
        if value > extremes.max {
            extremes.max = value;
        }
    }
    Ok(extremes)
}

/// Sums all elements. Accumulates in `i64`, so no `i32` input can overflow.
///
/// The sum of an empty array is `0`.
pub fn sum(values: &[i32]) -> i64 {
    values.iter().map(|&value| i64::from(value)).sum()
}

/// Arithmetic mean, computed as `sum / n` in floating point.
///
/// # Errors
///
/// Returns [`SeqError::EmptyInput`] for an empty array instead of `NaN`.
pub fn average(values: &[i32]) -> Result<f64> {
    if values.is_empty() {
        return Err(SeqError::EmptyInput {
            operation: "average",
        });
    }
    Ok(sum(values) as f64 / values.len() as f64)
}

/// Reports every index whose value equals `target`, in ascending order.
///
/// An empty result means `target` does not occur.
pub fn linear_search(values: &[i32], target: i32) -> Vec<usize> {
    values
        .iter()
        .enumerate()
        .filter(|&(_, &value)| value == target)
        .map(|(index, _)| index)
        .collect()
}

/// Returns a sorted copy of `values` (ascending), leaving the input untouched.
///
/// Adjacent-swap sort: `O(n²)` worst case. A pass that performs no swap ends
/// the sort, so already ordered input costs a single `O(n)` pass. Equal
/// elements are never swapped, so their relative order is kept.
///
/// # Examples
///
/// ```
/// use seqkit::array::sort;
///
/// let input = [5, 3, 9, 2, 11, 4, 4, 22, 0, 4];
/// assert_eq!(sort(&input), vec![0, 2, 3, 4, 4, 4, 5, 9, 11, 22]);
/// assert_eq!(input[0], 5);
/// ```
pub fn sort(values: &[i32]) -> Vec<i32> {
    let mut sorted = values.to_vec();
    bubble_sort(&mut sorted);
    sorted
}

/// Sorts in place and returns the number of passes performed.
fn bubble_sort(values: &mut [i32]) -> usize {
    let len = values.len();
    let mut passes = 0;

    for pass in 0..len.saturating_sub(1) {
        passes += 1;
        let mut swapped = false;
        // The last `pass` elements are already in their final position.
        for j in 0..len - pass - 1 {
            if values[j] > values[j + 1] {
                values.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
    passes
}

/// Searches for `target` in a sorted copy of `values`.
///
/// The returned index refers to the sorted copy (the order produced by
/// [`sort`]), not to the original ordering. When `target` occurs several
/// times the leftmost occurrence is reported.
///
/// # Arguments
///
/// * `values` - The array to search. It is copied and sorted; the input is not modified.
/// * `target` - The value to look for.
///
/// # Returns
///
/// `Some(index)` into the sorted copy of the leftmost `target`, or `None` if
/// `target` does not occur.
///
/// # Examples
///
/// ```
/// use seqkit::array::binary_search;
///
/// // Sorted copy: [0, 2, 3, 4, 4, 4, 5, 9, 11, 22]
/// let values = [5, 3, 9, 2, 11, 4, 4, 22, 0, 4];
/// assert_eq!(binary_search(&values, 4), Some(3));
/// assert_eq!(binary_search(&values, 7), None);
/// ```
pub fn binary_search(values: &[i32], target: i32) -> Option<usize> {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    binary_search_sorted(&sorted, target)
}

/// Iterative binary search over a slice already sorted in ascending order.
///
/// Returns the leftmost index holding `target`, or `None`. Each step halves
/// the half-open window `[left, right)`; the midpoint is taken as
/// `left + (right - left) / 2` so it cannot overflow for any slice length.
/// The result is unspecified if `sorted` is not actually sorted.
pub fn binary_search_sorted(sorted: &[i32], target: i32) -> Option<usize> {
    let mut left = 0;
    let mut right = sorted.len();

    while left < right {
        let mid = left + ((right - left) >> 1);
        if sorted[mid] < target {
            left = mid + 1;
        } else {
            // Keep `mid` in the window: it may be the leftmost match.
            right = mid;
        }
    }

    (sorted.get(left) == Some(&target)).then_some(left)
}

/// Returns a reversed copy of `values`.
pub fn reverse(values: &[i32]) -> Vec<i32> {
    let mut reversed = values.to_vec();
    reverse_in_place(&mut reversed);
    reversed
}

/// Two-pointer swap converging from both ends; the middle element of an
/// odd-length slice is left in place.
fn reverse_in_place(values: &mut [i32]) {
    if values.is_empty() {
        return;
    }
    let mut left = 0;
    let mut right = values.len() - 1;
    while left < right {
        values.swap(left, right);
        left += 1;
        right -= 1;
    }
}

/// Returns the distinct values of `values` in ascending order.
///
/// The input is sorted into a copy first, so any ordering is accepted; the
/// original order is not preserved in the result.
///
/// # Examples
///
/// ```
/// use seqkit::array::dedup_sorted;
///
/// assert_eq!(dedup_sorted(&[5, 3, 9, 2, 11, 4, 4, 22, 0, 4]), vec![0, 2, 3, 4, 5, 9, 11, 22]);
/// assert!(dedup_sorted(&[]).is_empty());
/// ```
pub fn dedup_sorted(values: &[i32]) -> Vec<i32> {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();

    let mut unique = vec![0; sorted.len()];
    let mut written = 0;
    for (index, &value) in sorted.iter().enumerate() {
        // The first element is always unique; later ones only if they differ
        // from their predecessor.
        if index == 0 || value != sorted[index - 1] {
            unique[written] = value;
            written += 1;
        }
    }

    unique.truncate(written);
    unique
}

/// Maps any shift amount onto `[0, len)`.
///
/// Negative shifts become the equivalent right rotation and shifts of `len`
/// or more wrap around. A result of `0` means the rotation is a no-op, which
/// is always the case for `len == 0`.
///
/// ```
/// use seqkit::array::normalize_rotation;
///
/// assert_eq!(normalize_rotation(7, 5), 2);
/// assert_eq!(normalize_rotation(-2, 5), 3);
/// assert_eq!(normalize_rotation(5, 5), 0);
/// assert_eq!(normalize_rotation(3, 0), 0);
/// ```
pub fn normalize_rotation(k: i64, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    // i128 holds every `i64` shift and every `usize` length exactly.
    i128::from(k).rem_euclid(len as i128) as usize
}

/// Returns a copy of `values` rotated `k` positions to the right using the
/// given strategy.
///
/// # Arguments
///
/// * `values` - The array to rotate. It is left untouched.
/// * `k` - The shift. Negative values rotate left and any magnitude wraps;
///   see [`normalize_rotation`].
/// * `strategy` - Which of the two equivalent rotations to run.
///
/// # Returns
///
/// A new vector of the same length where the element at `i` moved to
/// `(i + k) mod n`. A shift that normalizes to `0` returns an unchanged copy.
///
/// # Examples
///
/// ```
/// use seqkit::array::{rotate_right, RotationStrategy};
///
/// let values = [1, 2, 3, 4, 5];
/// assert_eq!(rotate_right(&values, 2, RotationStrategy::Reversal), vec![4, 5, 1, 2, 3]);
/// assert_eq!(rotate_right(&values, -2, RotationStrategy::Buffer), vec![3, 4, 5, 1, 2]);
/// ```
pub fn rotate_right(values: &[i32], k: i64, strategy: RotationStrategy) -> Vec<i32> {
    match strategy {
        RotationStrategy::Reversal => rotate_right_reversal(values, k),
        RotationStrategy::Buffer => rotate_right_buffer(values, k),
    }
}

/// Right rotation by triple reversal of a working copy.
pub fn rotate_right_reversal(values: &[i32], k: i64) -> Vec<i32> {
    let mut rotated = values.to_vec();
    let shift = normalize_rotation(k, rotated.len());
    if shift == 0 {
        return rotated;
    }

    reverse_in_place(&mut rotated);
    let (head, tail) = rotated.split_at_mut(shift);
    reverse_in_place(head);
    reverse_in_place(tail);
    rotated
}

/// Right rotation by copying the tail, then the head, into a new buffer.
pub fn rotate_right_buffer(values: &[i32], k: i64) -> Vec<i32> {
    let len = values.len();
    let shift = normalize_rotation(k, len);
    if shift == 0 {
        return values.to_vec();
    }

    let split = len - shift;
    let mut rotated = Vec::with_capacity(len);
    rotated.extend_from_slice(&values[split..]);
    rotated.extend_from_slice(&values[..split]);
    rotated
}
