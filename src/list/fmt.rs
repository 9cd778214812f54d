use core::fmt;

use crate::IntervalSet;

impl fmt::Debug for IntervalSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.run_count() < 16 {
            write!(
                f,
                "IntervalSet<{:?}>",
                self.intervals().map(|run| run.start()..=run.end()).collect::<Vec<_>>()
            )
        } else {
            write!(
                f,
                "IntervalSet<{:?} values between {:?} and {:?}>",
                self.len(),
                self.min().expect("a non-empty set has a minimum"),
                self.max().expect("a non-empty set has a maximum")
            )
        }
    }
}
