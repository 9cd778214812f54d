use core::ops::RangeInclusive;

/// A closed run of consecutive integers, inclusive on both ends.
#[derive(PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Debug)]
pub struct Interval {
    pub(crate) start: i64,
    pub(crate) end: i64,
}

impl Interval {
    /// Creates an interval covering `a..=b`. The bounds may be given in
    /// either order; they are swapped so that `start() <= end()` always
    /// holds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use runlist::Interval;
    ///
    /// assert_eq!(Interval::new(7, 3), Interval::new(3, 7));
    /// ```
    pub fn new(a: i64, b: i64) -> Interval {
        if a <= b {
            Interval { start: a, end: b }
        } else {
            Interval { start: b, end: a }
        }
    }

    /// The smallest value covered by this interval.
    pub fn start(&self) -> i64 {
        self.start
    }

    /// The largest value covered by this interval.
    pub fn end(&self) -> i64 {
        self.end
    }

    /// Returns `true` if `value` lies within this interval.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use runlist::Interval;
    ///
    /// let run = Interval::new(3, 7);
    /// assert!(run.contains(3));
    /// assert!(run.contains(7));
    /// assert!(!run.contains(8));
    /// ```
    pub fn contains(&self, value: i64) -> bool {
        self.start <= value && value <= self.end
    }

    /// The number of values covered by this interval, always at least one.
    ///
    /// The interval spanning the entire `i64` domain covers 2^64 values,
    /// one more than `u64` can hold; that single case saturates to
    /// `u64::MAX`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use runlist::Interval;
    ///
    /// assert_eq!(Interval::new(3, 7).run_len(), 5);
    /// assert_eq!(Interval::new(3, 3).run_len(), 1);
    /// ```
    pub fn run_len(&self) -> u64 {
        (self.end.wrapping_sub(self.start) as u64).saturating_add(1)
    }
}

impl From<RangeInclusive<i64>> for Interval {
    fn from(range: RangeInclusive<i64>) -> Interval {
        Interval::new(*range.start(), *range.end())
    }
}

impl From<i64> for Interval {
    fn from(value: i64) -> Interval {
        Interval::new(value, value)
    }
}

impl IntoIterator for Interval {
    type Item = i64;
    type IntoIter = RangeInclusive<i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.start..=self.end
    }
}

impl IntoIterator for &'_ Interval {
    type Item = i64;
    type IntoIter = RangeInclusive<i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.start..=self.end
    }
}
