//! Core traits and types shared by the algorithm modules.
//!
//! This module defines:
//! - [`SeqError`] and the crate [`Result`] alias.
//! - [`SequentialList`]: the access contract list algorithms are written against.

use std::collections::{LinkedList, VecDeque};
use std::mem;
use thiserror::Error;

/// Errors raised by operations that have no defined result on their input.
///
/// "Not found" and "nothing to do" are never errors; they are carried by
/// `Option` and by the returned values themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SeqError {
    #[error("`{operation}` requires at least one element")]
    EmptyInput { operation: &'static str },
}

pub type Result<T> = std::result::Result<T, SeqError>;

/// A growable ordered sequence of integers with sequential, double-ended
/// traversal and positional access.
///
/// List algorithms only rely on walking the sequence from either end and on
/// positional get/set/remove. Positional access defaults to a walk from the
/// front, so implementors backed by contiguous storage should override
/// [`get_at`](SequentialList::get_at) and [`set_at`](SequentialList::set_at).
///
/// # Examples
///
/// ```
/// use seqkit::core::SequentialList;
/// use std::collections::LinkedList;
///
/// let mut list: LinkedList<i32> = LinkedList::new();
/// SequentialList::push_back(&mut list, 4);
/// SequentialList::push_back(&mut list, 8);
///
/// assert_eq!(list.get_at(1), Some(8));
/// assert_eq!(list.set_at(0, 5), Some(4));
/// assert_eq!(list.remove_at(0), Some(5));
/// assert_eq!(list.get_at(1), None);
/// ```
pub trait SequentialList {
    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the sequence holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Front-to-back traversal that can also be driven from the back.
    fn iter(&self) -> impl DoubleEndedIterator<Item = &i32>;

    /// Mutable traversal. Items yielded from the front and from the back
    /// never alias, so one cursor per end may be held at the same time.
    fn iter_mut(&mut self) -> impl DoubleEndedIterator<Item = &mut i32>;

    /// Appends `value` at the back.
    fn push_back(&mut self, value: i32);

    /// Removes the element at `index`, shifting later elements forward.
    ///
    /// Returns `None` and leaves the sequence untouched if `index` is out of
    /// bounds.
    fn remove_at(&mut self, index: usize) -> Option<i32>;

    /// Removes the first element equal to `target` and returns the position
    /// it occupied, or `None` with the sequence untouched.
    ///
    /// The default scans for the position and then removes it, which is a
    /// single pass over contiguous storage: the scan stops at the match and
    /// the removal only shifts what follows. Node-based implementors should
    /// override it to unlink during the scan.
    fn remove_first(&mut self, target: i32) -> Option<usize> {
        let position = self.iter().position(|&value| value == target)?;
        self.remove_at(position).map(|_| position)
    }

    /// Returns the element at `index`, or `None` if out of bounds.
    #[inline]
    fn get_at(&self, index: usize) -> Option<i32> {
        self.iter().nth(index).copied()
    }

    /// Overwrites the element at `index`, returning the previous value.
    #[inline]
    fn set_at(&mut self, index: usize, value: i32) -> Option<i32> {
        self.iter_mut()
            .nth(index)
            .map(|slot| mem::replace(slot, value))
    }
}

// Doubly linked: positional access walks, so the defaults are kept.
impl SequentialList for LinkedList<i32> {
    fn len(&self) -> usize {
        LinkedList::len(self)
    }

    fn iter(&self) -> impl DoubleEndedIterator<Item = &i32> {
        LinkedList::iter(self)
    }

    fn iter_mut(&mut self) -> impl DoubleEndedIterator<Item = &mut i32> {
        LinkedList::iter_mut(self)
    }

    fn push_back(&mut self, value: i32) {
        LinkedList::push_back(self, value);
    }

    fn remove_at(&mut self, index: usize) -> Option<i32> {
        if index >= LinkedList::len(self) {
            return None;
        }
        // No stable cursor API: detach the tail, drop its head, relink.
        let mut tail = self.split_off(index);
        let removed = tail.pop_front();
        self.append(&mut tail);
        removed
    }

    fn remove_first(&mut self, target: i32) -> Option<usize> {
        // Nodes before the match move to `prefix` as they are visited; the
        // match is dropped and the unvisited rest is relinked behind them.
        let mut prefix = LinkedList::new();
        while let Some(value) = self.pop_front() {
            if value == target {
                let position = prefix.len();
                prefix.append(self);
                *self = prefix;
                return Some(position);
            }
            prefix.push_back(value);
        }
        *self = prefix;
        None
    }
}

impl SequentialList for VecDeque<i32> {
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn iter(&self) -> impl DoubleEndedIterator<Item = &i32> {
        VecDeque::iter(self)
    }

    fn iter_mut(&mut self) -> impl DoubleEndedIterator<Item = &mut i32> {
        VecDeque::iter_mut(self)
    }

    fn push_back(&mut self, value: i32) {
        VecDeque::push_back(self, value);
    }

    fn remove_at(&mut self, index: usize) -> Option<i32> {
        VecDeque::remove(self, index)
    }

    #[inline]
    fn get_at(&self, index: usize) -> Option<i32> {
        self.get(index).copied()
    }

    #[inline]
    fn set_at(&mut self, index: usize, value: i32) -> Option<i32> {
        self.get_mut(index).map(|slot| mem::replace(slot, value))
    }
}

impl SequentialList for Vec<i32> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn iter(&self) -> impl DoubleEndedIterator<Item = &i32> {
        self.as_slice().iter()
    }

    fn iter_mut(&mut self) -> impl DoubleEndedIterator<Item = &mut i32> {
        self.as_mut_slice().iter_mut()
    }

    fn push_back(&mut self, value: i32) {
        self.push(value);
    }

    fn remove_at(&mut self, index: usize) -> Option<i32> {
        (index < Vec::len(self)).then(|| self.remove(index))
    }

    #[inline]
    fn get_at(&self, index: usize) -> Option<i32> {
        self.get(index).copied()
    }

    #[inline]
    fn set_at(&mut self, index: usize, value: i32) -> Option<i32> {
        self.get_mut(index).map(|slot| mem::replace(slot, value))
    }
}
