//! Canonical weekdays.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A day of the scheduling week.
///
/// Days are totally ordered `Mon` through `Sun`. This order is the
/// processing order of the allocation engine and the ordering of every
/// report, so it matters for reproducibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Day {
    /// All days in canonical order.
    pub const ALL: [Day; 7] = [
        Day::Mon,
        Day::Tue,
        Day::Wed,
        Day::Thu,
        Day::Fri,
        Day::Sat,
        Day::Sun,
    ];

    /// Number of days in the scheduling week.
    pub const COUNT: usize = 7;

    /// Position in the canonical week (`Mon` = 0).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The following day, or `None` for `Sun`.
    pub fn next(self) -> Option<Day> {
        Day::ALL.get(self.index() + 1).copied()
    }

    /// Short label ("Mon", "Tue", ...).
    pub fn label(self) -> &'static str {
        match self {
            Day::Mon => "Mon",
            Day::Tue => "Tue",
            Day::Wed => "Wed",
            Day::Thu => "Thu",
            Day::Fri => "Fri",
            Day::Sat => "Sat",
            Day::Sun => "Sun",
        }
    }

    /// Parses a short label. Returns `None` for unknown labels.
    pub fn parse(label: &str) -> Option<Day> {
        Day::ALL.iter().copied().find(|d| d.label() == label)
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
