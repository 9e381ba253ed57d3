//! Coverage reporting and roster metrics.
//!
//! Reads a finished grid; never mutates it. A gap report is informational —
//! understaffing means the inputs were infeasible for the run, not that the
//! run failed.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::engine::MIN_COVERAGE;
use crate::models::{Day, Employee, Roster, Shift};

/// A cell still below the minimum coverage floor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageGap {
    pub day: Day,
    pub shift: Shift,
    /// Headcount actually assigned.
    pub have: usize,
}

impl fmt::Display for CoverageGap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}/{}", self.day, self.shift, self.have, MIN_COVERAGE)
    }
}

/// Lists cells under the coverage floor, in canonical day-then-shift order.
pub fn coverage_gaps(roster: &Roster) -> Vec<CoverageGap> {
    roster
        .iter_cells()
        .filter(|(_, _, names)| names.len() < MIN_COVERAGE)
        .map(|(day, shift, names)| CoverageGap {
            day,
            shift,
            have: names.len(),
        })
        .collect()
}

/// Aggregate measures of a finished roster.
#[derive(Debug, Clone)]
pub struct RosterKpi {
    /// Total assignments across the grid.
    pub total_assignments: usize,
    /// Cells below the coverage floor.
    pub understaffed_cells: usize,
    /// Weekly assignment count per employee.
    pub load_by_employee: HashMap<String, usize>,
    /// Lightest weekly load.
    pub min_load: usize,
    /// Heaviest weekly load.
    pub max_load: usize,
}

impl RosterKpi {
    /// Computes metrics from a grid and the employees it was built for.
    ///
    /// Employees missing from the grid count as load 0.
    pub fn compute(roster: &Roster, employees: &[Employee]) -> Self {
        let mut load_by_employee: HashMap<String, usize> = employees
            .iter()
            .map(|e| (e.name.clone(), 0))
            .collect();
        for (_, _, names) in roster.iter_cells() {
            for name in names {
                *load_by_employee.entry(name.clone()).or_insert(0) += 1;
            }
        }
        let min_load = load_by_employee.values().copied().min().unwrap_or(0);
        let max_load = load_by_employee.values().copied().max().unwrap_or(0);
        Self {
            total_assignments: roster.assignment_count(),
            understaffed_cells: coverage_gaps(roster).len(),
            load_by_employee,
            min_load,
            max_load,
        }
    }

    /// Spread between the heaviest and lightest weekly load.
    pub fn load_spread(&self) -> usize {
        self.max_load - self.min_load
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn partial_roster() -> Roster {
        let mut r = Roster::new();
        r.assign(Day::Mon, Shift::Morning, "Alice");
        r.assign(Day::Mon, Shift::Morning, "Bob");
        r.assign(Day::Mon, Shift::Afternoon, "Alice");
        r
    }

    #[test]
    fn test_empty_grid_reports_all_cells() {
        let gaps = coverage_gaps(&Roster::new());
        assert_eq!(gaps.len(), Day::COUNT * Shift::COUNT);
        assert!(gaps.iter().all(|g| g.have == 0));
        assert_eq!(gaps[0].day, Day::Mon);
        assert_eq!(gaps[0].shift, Shift::Morning);
    }

    #[test]
    fn test_filled_cells_not_reported() {
        let gaps = coverage_gaps(&partial_roster());
        // Mon morning holds 2 and is the only cell at the floor.
        assert_eq!(gaps.len(), Day::COUNT * Shift::COUNT - 1);
        assert_eq!(gaps[0].day, Day::Mon);
        assert_eq!(gaps[0].shift, Shift::Afternoon);
        assert_eq!(gaps[0].have, 1);
    }

    #[test]
    fn test_gap_display() {
        let gap = CoverageGap {
            day: Day::Sat,
            shift: Shift::Evening,
            have: 1,
        };
        assert_eq!(gap.to_string(), "Sat evening: 1/2");
    }

    #[test]
    fn test_kpi_loads() {
        let employees = vec![
            Employee::new("Alice"),
            Employee::new("Bob"),
            Employee::new("Carol"),
        ];
        let kpi = RosterKpi::compute(&partial_roster(), &employees);

        assert_eq!(kpi.total_assignments, 3);
        assert_eq!(kpi.understaffed_cells, Day::COUNT * Shift::COUNT - 1);
        assert_eq!(kpi.load_by_employee["Alice"], 2);
        assert_eq!(kpi.load_by_employee["Bob"], 1);
        assert_eq!(kpi.load_by_employee["Carol"], 0);
        assert_eq!(kpi.min_load, 0);
        assert_eq!(kpi.max_load, 2);
        assert_eq!(kpi.load_spread(), 2);
    }

    #[test]
    fn test_kpi_empty_inputs() {
        let kpi = RosterKpi::compute(&Roster::new(), &[]);
        assert_eq!(kpi.total_assignments, 0);
        assert_eq!(kpi.min_load, 0);
        assert_eq!(kpi.load_spread(), 0);
    }
}
