//! Weekly shift rostering.
//!
//! Assigns a fixed roster of employees to a weekly grid of day/shift slots
//! (7 days × 3 shifts) under per-employee constraints (weekly day cap, one
//! shift per day) and per-slot minimum coverage, honoring ranked shift
//! preferences where they exist. The allocator is a two-phase greedy
//! heuristic, not an optimal solver.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Day`, `Shift`, `ShiftPreference`,
//!   `Employee`, `Roster`
//! - **`engine`**: Two-phase greedy allocation — preference pass with
//!   deferred retry, then minimum-coverage backfill
//! - **`report`**: Coverage gaps and roster metrics
//! - **`display`**: Plain-text grid rendering
//! - **`validation`**: Input integrity checks
//!
//! # Determinism
//!
//! A run draws every shuffle and tie-break from one generator seeded by the
//! request, so identical inputs reproduce the identical grid and gap report.
//!
//! # References
//!
//! - Ernst et al. (2004), "Staff scheduling and rostering: A review of
//!   applications, methods and models"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod display;
pub mod engine;
pub mod models;
pub mod report;
pub mod validation;
