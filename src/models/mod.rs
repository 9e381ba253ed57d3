//! Rostering domain models.
//!
//! Core data types for the weekly grid: canonical days and shifts, the
//! employee with normalized preferences, and the schedule grid itself.
//! Assignment state (days worked, days assigned) is owned by the engine,
//! not by the models — see `engine::Allocator`.

mod day;
mod employee;
mod roster;
mod shift;

pub use day::Day;
pub use employee::{Employee, ShiftPreference};
pub use roster::Roster;
pub use shift::Shift;
