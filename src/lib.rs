//! A compressed representation of a sparse set of integers.
//!
//! Instead of storing every present value, [`IntervalSet`] stores a sorted
//! chain of disjoint, non-adjacent closed intervals, each one a maximal run
//! of consecutive present values. Membership, single-value insertion and
//! single-value removal keep the representation minimal: no two stored
//! intervals ever overlap or touch.
//!
//! The crate also ships [`SearchTree`], a plain (unbalanced) binary search
//! tree over the same element type, useful as a reference structure when
//! comparing against the compressed set.
//!
//! # Examples
//!
//! ```rust
//! use runlist::IntervalSet;
//!
//! let mut set = IntervalSet::new();
//!
//! // consecutive values collapse into a single run
//! set.insert(4);
//! set.insert(5);
//! set.insert(6);
//! set.insert(10);
//!
//! assert!(set.contains(5));
//! assert_eq!(set.run_count(), 2);
//! assert_eq!(set.len(), 4);
//! ```

#![warn(missing_docs)]

pub use crate::interval::Interval;
pub use crate::list::{IntervalSet, Intervals, IntoIter, Iter};
pub use crate::tree::{SearchTree, TreeIter};

mod interval;
mod list;
mod tree;
