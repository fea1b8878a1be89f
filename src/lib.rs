//! # Seqkit
//!
//! `seqkit` is a small, synchronous toolkit of classic algorithms over in-memory
//! integer sequences: linear scan statistics, searching, sorting, reversal,
//! duplicate elimination and rotation.
//!
//! It offers two deliberately separate capability sets:
//!
//! - **Array algorithms** ([`array`]): operate on a borrowed, fixed-length `&[i32]`.
//!   They never mutate the caller's data; anything that has to reorder
//!   elements works on a private copy and returns it.
//! - **List algorithms** ([`list`]): operate on a growable ordered list through the
//!   [`SequentialList`] trait and mutate it in place.
//!
//! A handful of string algorithms live in [`strings`]. They are not part of the
//! [`prelude`], since names such as `reverse` overlap with the array functions;
//! reach them through `seqkit::strings`:
//!
//! ```rust
//! use seqkit::strings;
//!
//! assert_eq!(strings::find_all("aaaaa", "aaa"), vec![0, 1, 2]);
//! assert!(strings::is_palindrome("12344321"));
//! ```
//!
//! ## Usage
//!
//! ### Arrays
//!
//! ```rust
//! use seqkit::prelude::*;
//!
//! let values = [5, 3, 9, 2, 11, 4, 4, 22, 0, 4];
//!
//! assert_eq!(min_max(&values)?, MinMax { min: 0, max: 22 });
//! assert_eq!(sum(&values), 64);
//! assert_eq!(average(&values)?, 6.4);
//! assert_eq!(linear_search(&values, 4), vec![5, 6, 9]);
//! assert_eq!(rotate_right(&values, 2, RotationStrategy::Buffer)[..3], [0, 4, 5]);
//!
//! // Mathematically undefined results are errors, not sentinels.
//! assert!(average(&[]).is_err());
//! # Ok::<(), seqkit::SeqError>(())
//! ```
//!
//! ### Lists
//!
//! Any container implementing [`SequentialList`] can be used. Implementations are
//! provided for `LinkedList<i32>`, `VecDeque<i32>` and `Vec<i32>`.
//!
//! ```rust
//! use seqkit::prelude::*;
//! use std::collections::LinkedList;
//!
//! let mut list: LinkedList<i32> = fill(10);
//! assert_eq!(remove_first_match(&mut list, 7), Some(7));
//! reverse_in_place(&mut list);
//! assert_eq!(index_of(&list, 9), Some(0));
//!
//! insertion_sort(&mut list);
//! let mut out = Vec::new();
//! traverse_and_print(&list, &mut out)?;
//! assert_eq!(out, b"0 1 2 3 4 5 6 8 9\n");
//! # Ok::<(), std::io::Error>(())
//! ```
//!
//! ## Error Model
//!
//! - Only [`array::min_max`] and [`array::average`] fail, with
//!   [`SeqError::EmptyInput`], when given no elements.
//! - "Not found" is `None` or an empty `Vec`, never an error and never a reserved index.
//! - Rotations that normalize to zero and reversals or sorts of 0/1-length input are
//!   no-ops that still return a well-defined result.

pub mod array;
pub mod core;
pub mod list;
pub mod strings;
pub use crate::core::{Result, SeqError, SequentialList};

pub mod prelude {
    pub use crate::array::{
        MinMax, RotationStrategy, average, binary_search, binary_search_sorted, dedup_sorted,
        linear_search, min_max, normalize_rotation, reverse, rotate_right, rotate_right_buffer,
        rotate_right_reversal, sort, sum,
    };
    pub use crate::core::{SeqError, SequentialList};
    pub use crate::list::{
        fill, index_of, insertion_sort, remove_first_match, reverse_in_place, traverse_and_print,
    };
}
