use serde::Serialize;
use std::fmt;

/// Derived counts for a list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Status {
    /// Number of items in the list
    pub total: usize,
    /// Number of items marked done
    pub done: usize,
    /// Completion percentage, 0 for an empty list
    pub percent: u8,
}

impl Status {
    /// Compute the status for `done` finished items out of `total`
    ///
    /// The percentage rounds half to even, so 1 of 8 is 12% and 2 of 3 is 67%.
    pub fn new(total: usize, done: usize) -> Self {
        let percent = if total == 0 {
            0
        } else {
            (done as f64 / total as f64 * 100.0).round_ties_even() as u8
        };
        Self {
            total,
            done,
            percent,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.done == self.total
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} item(s) · {} done · {}% complete",
            self.total, self.done, self.percent
        )
    }
}
