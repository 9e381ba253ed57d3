//! Employee model and preference normalization.
//!
//! Raw per-day preferences arrive in one of three shapes: absent, a single
//! shift label, or a ranked list of labels. They are normalized once at
//! construction into a uniform ordered sequence per day. Labels that do not
//! name a known shift are dropped rather than rejected — a malformed
//! preference degrades to "no preference" for that day.

use serde::{Deserialize, Serialize};

use super::{Day, Shift};

/// Raw per-day shift preference, as supplied by the caller.
///
/// Deserializes untagged, so a bare string, a list of strings, or `null`
/// are all accepted — the shapes hand-written rota inputs actually take.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ShiftPreference {
    /// No preference for the day.
    #[default]
    None,
    /// A single preferred shift.
    Single(String),
    /// Shifts in descending order of preference.
    Ranked(Vec<String>),
}

impl ShiftPreference {
    /// A single-shift preference.
    pub fn single(label: impl Into<String>) -> Self {
        ShiftPreference::Single(label.into())
    }

    /// A ranked-list preference, most preferred first.
    pub fn ranked<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ShiftPreference::Ranked(labels.into_iter().map(Into::into).collect())
    }

    /// Normalizes to an ordered list of known shifts.
    ///
    /// Unknown labels are silently dropped.
    pub fn normalized(&self) -> Vec<Shift> {
        match self {
            ShiftPreference::None => Vec::new(),
            ShiftPreference::Single(label) => Shift::parse(label).into_iter().collect(),
            ShiftPreference::Ranked(labels) => {
                labels.iter().filter_map(|l| Shift::parse(l)).collect()
            }
        }
    }
}

/// An employee on the weekly roster.
///
/// Holds the unique name and the normalized ranked preference list for each
/// day. Assignment counters (days worked, days assigned) are tracked by the
/// allocation engine for the duration of a run, not on the employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique employee name.
    pub name: String,
    prefs: [Vec<Shift>; Day::COUNT],
}

impl Employee {
    /// Creates an employee with no preferences.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prefs: Default::default(),
        }
    }

    /// Sets the preference for a single day, normalizing it immediately.
    pub fn with_preference(mut self, day: Day, pref: ShiftPreference) -> Self {
        self.prefs[day.index()] = pref.normalized();
        self
    }

    /// Sets the same preference for every day of the week.
    pub fn with_week_preference(mut self, pref: ShiftPreference) -> Self {
        let normalized = pref.normalized();
        for slot in &mut self.prefs {
            *slot = normalized.clone();
        }
        self
    }

    /// Ranked preferences for a day, most preferred first. Empty when the
    /// employee expressed none.
    pub fn ranked_prefs(&self, day: Day) -> &[Shift] {
        &self.prefs[day.index()]
    }

    /// Whether the employee expressed a preference on any day.
    pub fn has_preferences(&self) -> bool {
        self.prefs.iter().any(|p| !p.is_empty())
    }
}
