use crate::interval::Interval;

pub use self::iter::{IntoIter, Intervals, Iter};

mod fmt;
mod inherent;
mod iter;

/// A compressed set of `i64` values.
///
/// The set is stored as an ordered chain of disjoint, non-adjacent closed
/// intervals; each interval is a maximal run of consecutive present values.
/// Insertion merges a value into its neighbouring runs where possible, and
/// removal splits a run when the value lies strictly inside it, so the
/// representation stays minimal after every operation.
///
/// # Examples
///
/// ```rust
/// use runlist::IntervalSet;
///
/// let mut set = IntervalSet::new();
///
/// set.insert(2);
/// set.insert(3);
/// set.insert(5);
/// set.insert(7);
/// println!("total values present: {}", set.len());
/// ```
pub struct IntervalSet {
    head: Option<Box<Node>>,
}

/// One link of the chain. Each node exclusively owns its successor, so the
/// whole chain has a single owner and dropping a node releases everything
/// after it.
pub(crate) struct Node {
    pub(crate) run: Interval,
    pub(crate) next: Option<Box<Node>>,
}

impl Drop for IntervalSet {
    // Derived drop would recurse down the chain; unlink the nodes one at a
    // time instead so arbitrarily long sets cannot blow the stack.
    fn drop(&mut self) {
        let mut next = self.head.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}
