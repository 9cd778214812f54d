use core::iter::FusedIterator;
use core::ops::RangeInclusive;

use crate::interval::Interval;
use crate::list::{IntervalSet, Node};

/// An iterator over the stored intervals of an `IntervalSet`, in ascending
/// order.
#[derive(Clone)]
pub struct Intervals<'a> {
    next: Option<&'a Node>,
}

/// An iterator over every value of an `IntervalSet`, in ascending order.
#[derive(Clone)]
pub struct Iter<'a> {
    front: Option<RangeInclusive<i64>>,
    intervals: Intervals<'a>,
}

/// An owning iterator over every value of an `IntervalSet`, in ascending
/// order.
pub struct IntoIter {
    front: Option<RangeInclusive<i64>>,
    set: IntervalSet,
}

impl IntervalSet {
    /// Iterator over the stored intervals, ordered by their start value.
    ///
    /// Each interval is a maximal run of consecutive present values, so the
    /// sequence is also strictly ordered by end value, and consecutive
    /// intervals are separated by a gap of at least two.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use runlist::{Interval, IntervalSet};
    ///
    /// let set: IntervalSet = [5, 6, 7, 10].iter().copied().collect();
    /// let runs: Vec<Interval> = set.intervals().copied().collect();
    ///
    /// assert_eq!(runs, vec![Interval::new(5, 7), Interval::new(10, 10)]);
    /// ```
    pub fn intervals(&self) -> Intervals<'_> {
        Intervals { next: self.head.as_deref() }
    }

    /// Iterator over each value stored in the `IntervalSet`, guarantees
    /// values are ordered by value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use runlist::IntervalSet;
    ///
    /// let mut set = IntervalSet::new();
    ///
    /// set.insert(1);
    /// set.insert(6);
    /// set.insert(4);
    ///
    /// let mut iter = set.iter();
    ///
    /// assert_eq!(iter.next(), Some(1));
    /// assert_eq!(iter.next(), Some(4));
    /// assert_eq!(iter.next(), Some(6));
    /// assert_eq!(iter.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_> {
        Iter { front: None, intervals: self.intervals() }
    }
}

impl<'a> Iterator for Intervals<'a> {
    type Item = &'a Interval;

    fn next(&mut self) -> Option<&'a Interval> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some(&node.run)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.next {
            Some(_) => (1, None),
            None => (0, Some(0)),
        }
    }
}

impl FusedIterator for Intervals<'_> {}

impl<'a> Iterator for Iter<'a> {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        loop {
            if let Some(value) = self.front.as_mut().and_then(|range| range.next()) {
                return Some(value);
            }
            self.front = Some(self.intervals.next()?.into_iter());
        }
    }
}

impl FusedIterator for Iter<'_> {}

impl Iterator for IntoIter {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        loop {
            if let Some(value) = self.front.as_mut().and_then(|range| range.next()) {
                return Some(value);
            }
            let node = self.set.head.take()?;
            self.set.head = node.next;
            self.front = Some(node.run.into_iter());
        }
    }
}

impl FusedIterator for IntoIter {}

impl<'a> IntoIterator for &'a IntervalSet {
    type Item = i64;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl IntoIterator for IntervalSet {
    type Item = i64;
    type IntoIter = IntoIter;

    fn into_iter(self) -> IntoIter {
        IntoIter { front: None, set: self }
    }
}
