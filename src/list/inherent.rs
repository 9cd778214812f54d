use crate::interval::Interval;
use crate::list::{IntervalSet, Node};

impl IntervalSet {
    /// Creates an empty `IntervalSet`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use runlist::IntervalSet;
    /// let mut set = IntervalSet::new();
    /// ```
    pub fn new() -> IntervalSet {
        IntervalSet { head: None }
    }

    /// Returns `true` if this set contains the specified integer.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use runlist::IntervalSet;
    ///
    /// let mut set = IntervalSet::new();
    /// set.insert(1);
    /// assert_eq!(set.contains(0), false);
    /// assert_eq!(set.contains(1), true);
    /// assert_eq!(set.contains(100), false);
    /// ```
    pub fn contains(&self, value: i64) -> bool {
        let mut next = self.head.as_deref();
        while let Some(node) = next {
            if value < node.run.start {
                // runs are sorted ascending; nothing later can hold `value`
                return false;
            }
            if value <= node.run.end {
                return true;
            }
            next = node.next.as_deref();
        }
        false
    }

    /// Adds a value to the set. Returns `true` if the value was not already
    /// present in the set.
    ///
    /// A value adjacent to one of its neighbouring runs extends that run; a
    /// value closing the single gap between two runs fuses them into one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use runlist::IntervalSet;
    ///
    /// let mut set = IntervalSet::new();
    /// assert_eq!(set.insert(3), true);
    /// assert_eq!(set.insert(3), false);
    /// assert_eq!(set.contains(3), true);
    /// ```
    pub fn insert(&mut self, value: i64) -> bool {
        let mut link = &mut self.head;
        // Walk past every run that ends strictly before `value - 1`; the
        // first run we stop at is the only one `value` can extend upward.
        while link.as_ref().map_or(false, |node| value > node.run.end && value - 1 > node.run.end) {
            link = &mut link.as_mut().expect("checked by the loop condition").next;
        }

        if let Some(node) = link.as_deref_mut() {
            if node.run.contains(value) {
                return false;
            }
            if node.run.end.checked_add(1) == Some(value) {
                // `value` immediately follows this run. If it also
                // immediately precedes the next run, the one-value gap
                // between them closes and the two runs fuse.
                match node.next.take() {
                    Some(next) if value.checked_add(1) == Some(next.run.start) => {
                        node.run.end = next.run.end;
                        node.next = next.next;
                    }
                    next => {
                        node.run.end = value;
                        node.next = next;
                    }
                }
                return true;
            }
            if value.checked_add(1) == Some(node.run.start) {
                // `value` immediately precedes this run. No fuse with the
                // previous run is possible here: the walk would have stopped
                // on it instead.
                node.run.start = value;
                return true;
            }
        }

        // The value stands alone; splice in a fresh singleton run.
        let rest = link.take();
        *link = Some(Box::new(Node { run: Interval::new(value, value), next: rest }));
        true
    }

    /// Removes a value from the set. Returns `true` if the value was present
    /// in the set.
    ///
    /// Removing a value strictly inside a run splits that run in two;
    /// removing an end of a run shrinks it; removing the last value of a run
    /// drops the run entirely.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use runlist::IntervalSet;
    ///
    /// let mut set = IntervalSet::new();
    /// set.insert(3);
    /// assert_eq!(set.remove(3), true);
    /// assert_eq!(set.remove(3), false);
    /// assert_eq!(set.contains(3), false);
    /// ```
    pub fn remove(&mut self, value: i64) -> bool {
        let mut link = &mut self.head;
        while link.as_ref().map_or(false, |node| value > node.run.end) {
            link = &mut link.as_mut().expect("checked by the loop condition").next;
        }

        if let Some(node) = link.as_deref_mut() {
            if value < node.run.start {
                return false;
            }
            if node.run.start < node.run.end {
                if value == node.run.start {
                    // first value of the run
                    node.run.start = value + 1;
                } else if value == node.run.end {
                    // last value of the run
                    node.run.end = value - 1;
                } else {
                    // strictly inside: split, leaving a gap where `value` was
                    let tail =
                        Node { run: Interval::new(value + 1, node.run.end), next: node.next.take() };
                    node.run.end = value - 1;
                    node.next = Some(Box::new(tail));
                }
                return true;
            }
        } else {
            return false;
        }

        // the run held only `value`; unlink and drop it
        if let Some(node) = link.take() {
            *link = node.next;
        }
        true
    }

    /// Clears all integers in this set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use runlist::IntervalSet;
    ///
    /// let mut set = IntervalSet::new();
    /// set.insert(1);
    /// assert_eq!(set.contains(1), true);
    /// set.clear();
    /// assert_eq!(set.contains(1), false);
    /// ```
    pub fn clear(&mut self) {
        let mut next = self.head.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }

    /// Returns `true` if there are no integers in this set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use runlist::IntervalSet;
    ///
    /// let mut set = IntervalSet::new();
    /// assert_eq!(set.is_empty(), true);
    ///
    /// set.insert(3);
    /// assert_eq!(set.is_empty(), false);
    /// ```
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the number of distinct integers in the set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use runlist::IntervalSet;
    ///
    /// let mut set = IntervalSet::new();
    /// assert_eq!(set.len(), 0);
    ///
    /// set.insert(3);
    /// set.insert(4);
    /// set.insert(4);
    /// assert_eq!(set.len(), 2);
    /// ```
    pub fn len(&self) -> u64 {
        self.intervals().map(|run| run.run_len()).sum()
    }

    /// Returns the number of stored intervals. Always at most `len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use runlist::IntervalSet;
    ///
    /// let set: IntervalSet = [1, 2, 3, 9].iter().copied().collect();
    /// assert_eq!(set.run_count(), 2);
    /// ```
    pub fn run_count(&self) -> usize {
        self.intervals().count()
    }

    /// Returns the smallest value in the set, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use runlist::IntervalSet;
    ///
    /// let mut set = IntervalSet::new();
    /// assert_eq!(set.min(), None);
    /// set.insert(7);
    /// set.insert(3);
    /// assert_eq!(set.min(), Some(3));
    /// ```
    pub fn min(&self) -> Option<i64> {
        self.head.as_ref().map(|node| node.run.start)
    }

    /// Returns the largest value in the set, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use runlist::IntervalSet;
    ///
    /// let mut set = IntervalSet::new();
    /// assert_eq!(set.max(), None);
    /// set.insert(7);
    /// set.insert(3);
    /// assert_eq!(set.max(), Some(7));
    /// ```
    pub fn max(&self) -> Option<i64> {
        self.intervals().last().map(|run| run.end)
    }
}

impl Default for IntervalSet {
    fn default() -> IntervalSet {
        IntervalSet::new()
    }
}

impl Clone for IntervalSet {
    // Rebuilt front to back rather than derived, for the same reason drop is
    // iterative.
    fn clone(&self) -> IntervalSet {
        let mut out = IntervalSet::new();
        let mut tail = &mut out.head;
        for &run in self.intervals() {
            let node = tail.insert(Box::new(Node { run, next: None }));
            tail = &mut node.next;
        }
        out
    }
}

impl PartialEq for IntervalSet {
    fn eq(&self, other: &IntervalSet) -> bool {
        // the minimal-representation invariant makes structural equality
        // coincide with set equality
        self.intervals().eq(other.intervals())
    }
}

impl Eq for IntervalSet {}

impl FromIterator<i64> for IntervalSet {
    fn from_iter<I: IntoIterator<Item = i64>>(iterator: I) -> IntervalSet {
        let mut set = IntervalSet::new();
        set.extend(iterator);
        set
    }
}

impl Extend<i64> for IntervalSet {
    fn extend<I: IntoIterator<Item = i64>>(&mut self, iterator: I) {
        for value in iterator {
            self.insert(value);
        }
    }
}

impl<'a> Extend<&'a i64> for IntervalSet {
    fn extend<I: IntoIterator<Item = &'a i64>>(&mut self, iterator: I) {
        for value in iterator {
            self.insert(*value);
        }
    }
}
