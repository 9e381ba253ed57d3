//! Canonical shifts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three daily shifts.
///
/// Shifts carry no ordering significance beyond iteration order, which is
/// the tie-break order for fallback placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shift {
    Morning,
    Afternoon,
    Evening,
}

impl Shift {
    /// All shifts in canonical order.
    pub const ALL: [Shift; 3] = [Shift::Morning, Shift::Afternoon, Shift::Evening];

    /// Number of shifts per day.
    pub const COUNT: usize = 3;

    /// Position in the canonical shift order (`Morning` = 0).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Lowercase label ("morning", "afternoon", "evening").
    pub fn label(self) -> &'static str {
        match self {
            Shift::Morning => "morning",
            Shift::Afternoon => "afternoon",
            Shift::Evening => "evening",
        }
    }

    /// Parses a lowercase label. Returns `None` for unknown labels.
    pub fn parse(label: &str) -> Option<Shift> {
        Shift::ALL.iter().copied().find(|s| s.label() == label)
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
