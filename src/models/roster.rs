//! The weekly schedule grid.

use serde::{Deserialize, Serialize};

use super::{Day, Shift};

/// Weekly assignment grid: day × shift → ordered employee names.
///
/// Each cell keeps names in assignment order, which is not significant for
/// correctness but keeps repeated runs byte-identical. Only the allocation
/// engine mutates the grid; reporting and display read it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    cells: [[Vec<String>; Shift::COUNT]; Day::COUNT],
}

impl Roster {
    /// Creates an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Names assigned to a cell, in assignment order.
    pub fn cell(&self, day: Day, shift: Shift) -> &[String] {
        &self.cells[day.index()][shift.index()]
    }

    /// Headcount currently assigned to a cell.
    #[inline]
    pub fn headcount(&self, day: Day, shift: Shift) -> usize {
        self.cells[day.index()][shift.index()].len()
    }

    /// Appends a name to a cell.
    pub(crate) fn assign(&mut self, day: Day, shift: Shift, name: &str) {
        self.cells[day.index()][shift.index()].push(name.to_string());
    }

    /// Iterates every cell in canonical day-then-shift order.
    pub fn iter_cells(&self) -> impl Iterator<Item = (Day, Shift, &[String])> + '_ {
        Day::ALL.iter().flat_map(move |&day| {
            Shift::ALL
                .iter()
                .map(move |&shift| (day, shift, self.cell(day, shift)))
        })
    }

    /// Total number of assignments across the grid.
    pub fn assignment_count(&self) -> usize {
        self.cells.iter().flatten().map(Vec::len).sum()
    }

    /// Days on which the given employee appears, in canonical order.
    pub fn days_for(&self, name: &str) -> Vec<Day> {
        Day::ALL
            .iter()
            .copied()
            .filter(|&day| {
                Shift::ALL
                    .iter()
                    .any(|&shift| self.cell(day, shift).iter().any(|n| n == name))
            })
            .collect()
    }

    /// Number of shifts assigned to the employee across the week.
    pub fn shift_count_for(&self, name: &str) -> usize {
        self.iter_cells()
            .map(|(_, _, names)| names.iter().filter(|n| n.as_str() == name).count())
            .sum()
    }
}
