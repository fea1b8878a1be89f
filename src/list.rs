//! Algorithms over growable ordered lists.
//!
//! Unlike [`crate::array`], these functions mutate the list they are given.
//! They are generic over [`SequentialList`] and never assume `O(1)` random
//! access: positions are derived by counting during traversal.

use crate::core::SequentialList;
use std::io::{self, Write};
use std::mem;

/// Builds a list holding `0, 1, ..., end - 1` in order.
///
/// A non-positive `end` yields an empty list.
///
/// # Examples
///
/// ```
/// use seqkit::list::fill;
/// use std::collections::LinkedList;
///
/// let list: LinkedList<i32> = fill(4);
/// assert!(list.into_iter().eq([0, 1, 2, 3]));
/// ```
pub fn fill<L: SequentialList + Default>(end: i32) -> L {
    let mut list = L::default();
    for value in 0..end {
        list.push_back(value);
    }
    list
}

/// Writes every element front to back, separated by single spaces and
/// terminated by a newline. The list is not modified.
///
/// # Errors
///
/// Propagates any error returned by `out`.
///
/// ```
/// use seqkit::list::traverse_and_print;
///
/// let mut out = Vec::new();
/// traverse_and_print(&vec![3, 1, 2], &mut out).unwrap();
/// assert_eq!(out, b"3 1 2\n");
/// ```
pub fn traverse_and_print<L, W>(list: &L, out: &mut W) -> io::Result<()>
where
    L: SequentialList,
    W: Write + ?Sized,
{
    for (position, value) in list.iter().enumerate() {
        if position > 0 {
            out.write_all(b" ")?;
        }
        write!(out, "{value}")?;
    }
    writeln!(out)
}

/// Position of the first element equal to `target`, or `None`.
pub fn index_of<L: SequentialList>(list: &L, target: i32) -> Option<usize> {
    list.iter().position(|&value| value == target)
}

/// Removes the first element equal to `target` and returns the position it
/// occupied. The list is left untouched when nothing matches.
///
/// The match is located and removed in one traversal through
/// [`SequentialList::remove_first`]; scanning stops at the first match.
///
/// # Examples
///
/// ```
/// use seqkit::list::remove_first_match;
///
/// let mut list = vec![7, 1, 7];
/// assert_eq!(remove_first_match(&mut list, 7), Some(0));
/// assert_eq!(list, vec![1, 7]);
/// assert_eq!(remove_first_match(&mut list, 9), None);
/// ```
pub fn remove_first_match<L: SequentialList>(list: &mut L, target: i32) -> Option<usize> {
    list.remove_first(target)
}

/// Reverses the list in place with two converging cursors.
///
/// The front cursor and the back cursor each take one element per step and
/// swap the pair; they stop when they meet or cross. With an odd length the
/// middle element is never visited.
///
/// ```
/// use seqkit::list::reverse_in_place;
/// use std::collections::VecDeque;
///
/// let mut list = VecDeque::from([1, 2, 3, 4, 5]);
/// reverse_in_place(&mut list);
/// assert_eq!(list, [5, 4, 3, 2, 1]);
/// ```
pub fn reverse_in_place<L: SequentialList>(list: &mut L) {
    let mut cursors = list.iter_mut();
    while let Some(front) = cursors.next() {
        let Some(back) = cursors.next_back() else {
            break;
        };
        mem::swap(front, back);
    }
}

/// Stable insertion sort using positional get/set.
///
/// For each position `i` the value there is held as the key, every preceding
/// element strictly greater than the key is shifted one position right, and
/// the key is dropped into the gap. Shifting stops at the first element not
/// greater than the key, so equal elements keep their relative order. A key
/// that is already in place is not written back.
///
/// ```
/// use seqkit::list::insertion_sort;
/// use std::collections::LinkedList;
///
/// let mut list = LinkedList::from([1, 9, 3, 15, 2]);
/// insertion_sort(&mut list);
/// assert_eq!(list, LinkedList::from([1, 2, 3, 9, 15]));
/// ```
pub fn insertion_sort<L: SequentialList>(list: &mut L) {
    for i in 1..list.len() {
        let Some(key) = list.get_at(i) else {
            break;
        };

        let mut gap = i;
        while gap > 0 {
            match list.get_at(gap - 1) {
                Some(previous) if previous > key => {
                    list.set_at(gap, previous);
                    gap -= 1;
                }
                _ => break,
            }
        }
        if gap != i {
            list.set_at(gap, key);
        }
    }
}
