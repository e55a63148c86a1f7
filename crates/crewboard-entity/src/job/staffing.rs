//! Shift membership of a single job.
//!
//! [`ShiftPartition`] is the only writer of a job's `assigned_employees`,
//! `day_shift` and `night_shift` lists. Every operation keeps
//! `assigned == day ∪ night` and `day ∩ night == ∅`, so the employee
//! universe always splits into exactly one of pool, day or night.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crewboard_core::types::id::EmployeeId;

use super::shift::{Shift, Zone};
use crate::employee::Employee;

/// Raw shift lists as stored in a job document.
///
/// Older records may omit any of the lists, or carry lists that violate
/// the partition invariant; converting into [`ShiftPartition`] repairs them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffingLists {
    /// Every employee on the job.
    #[serde(default)]
    pub assigned_employees: Vec<EmployeeId>,
    /// Employees on the day shift.
    #[serde(default)]
    pub day_shift: Vec<EmployeeId>,
    /// Employees on the night shift.
    #[serde(default)]
    pub night_shift: Vec<EmployeeId>,
}

impl StaffingLists {
    /// Check whether the lists already form a valid partition.
    pub fn is_consistent(&self) -> bool {
        let day: HashSet<EmployeeId> = self.day_shift.iter().copied().collect();
        let night: HashSet<EmployeeId> = self.night_shift.iter().copied().collect();
        let assigned: HashSet<EmployeeId> = self.assigned_employees.iter().copied().collect();

        day.is_disjoint(&night) && assigned == day.union(&night).copied().collect()
    }
}

/// Pool/day/night membership of one job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StaffingLists", into = "StaffingLists")]
pub struct ShiftPartition {
    assigned: Vec<EmployeeId>,
    day: Vec<EmployeeId>,
    night: Vec<EmployeeId>,
}

impl ShiftPartition {
    /// An empty partition: every employee is in the pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Put `employee` on `shift`, taking it off the other shift if needed.
    ///
    /// Calling this twice with the same arguments leaves the same state as
    /// calling it once.
    pub fn assign(&mut self, employee: EmployeeId, shift: Shift) {
        if !self.assigned.contains(&employee) {
            self.assigned.push(employee);
        }
        self.list_mut(shift.other()).retain(|id| *id != employee);
        let target = self.list_mut(shift);
        if !target.contains(&employee) {
            target.push(employee);
        }
    }

    /// Return `employee` to the pool. No-op when it is not assigned.
    pub fn unassign(&mut self, employee: EmployeeId) {
        self.assigned.retain(|id| *id != employee);
        self.day.retain(|id| *id != employee);
        self.night.retain(|id| *id != employee);
    }

    /// Apply a drag-and-drop gesture from `source` to `target`.
    ///
    /// Shift-to-shift moves unassign first so the employee is never on
    /// both shifts.
    pub fn move_between_zones(&mut self, employee: EmployeeId, source: Zone, target: Zone) {
        if source == target {
            return;
        }
        match (source.shift(), target.shift()) {
            (_, None) => self.unassign(employee),
            (None, Some(shift)) => self.assign(employee, shift),
            (Some(_), Some(shift)) => {
                self.unassign(employee);
                self.assign(employee, shift);
            }
        }
    }

    /// The zone `employee` currently sits in.
    pub fn zone_of(&self, employee: EmployeeId) -> Zone {
        if self.day.contains(&employee) {
            Zone::Day
        } else if self.night.contains(&employee) {
            Zone::Night
        } else {
            Zone::Pool
        }
    }

    /// Check whether `employee` is on either shift.
    pub fn is_assigned(&self, employee: EmployeeId) -> bool {
        self.assigned.contains(&employee)
    }

    /// Every assigned employee, in assignment order.
    pub fn assigned_employees(&self) -> &[EmployeeId] {
        &self.assigned
    }

    /// Employees on the day shift.
    pub fn day_shift(&self) -> &[EmployeeId] {
        &self.day
    }

    /// Employees on the night shift.
    pub fn night_shift(&self) -> &[EmployeeId] {
        &self.night
    }

    /// Employees of `universe` not assigned to this job.
    pub fn pool_employees<'a>(&self, universe: &'a [Employee]) -> Vec<&'a Employee> {
        universe
            .iter()
            .filter(|e| !self.assigned.contains(&e.id))
            .collect()
    }

    /// Employees of `universe` on the day shift.
    pub fn day_shift_employees<'a>(&self, universe: &'a [Employee]) -> Vec<&'a Employee> {
        universe.iter().filter(|e| self.day.contains(&e.id)).collect()
    }

    /// Employees of `universe` on the night shift.
    pub fn night_shift_employees<'a>(&self, universe: &'a [Employee]) -> Vec<&'a Employee> {
        universe
            .iter()
            .filter(|e| self.night.contains(&e.id))
            .collect()
    }

    /// Snapshot the partition as storable lists.
    pub fn to_lists(&self) -> StaffingLists {
        StaffingLists {
            assigned_employees: self.assigned.clone(),
            day_shift: self.day.clone(),
            night_shift: self.night.clone(),
        }
    }

    fn list_mut(&mut self, shift: Shift) -> &mut Vec<EmployeeId> {
        match shift {
            Shift::Day => &mut self.day,
            Shift::Night => &mut self.night,
        }
    }
}

impl From<StaffingLists> for ShiftPartition {
    /// Rebuild a partition from stored lists.
    ///
    /// Day entries win over night entries for the same employee, and
    /// employees listed only in `assigned_employees` land on the day shift.
    fn from(lists: StaffingLists) -> Self {
        let mut partition = Self::new();
        for id in &lists.assigned_employees {
            if lists.night_shift.contains(id) && !lists.day_shift.contains(id) {
                partition.assign(*id, Shift::Night);
            } else {
                partition.assign(*id, Shift::Day);
            }
        }
        for id in &lists.day_shift {
            if !partition.is_assigned(*id) {
                partition.assign(*id, Shift::Day);
            }
        }
        for id in &lists.night_shift {
            if !partition.is_assigned(*id) {
                partition.assign(*id, Shift::Night);
            }
        }
        partition
    }
}

impl From<ShiftPartition> for StaffingLists {
    fn from(partition: ShiftPartition) -> Self {
        StaffingLists {
            assigned_employees: partition.assigned,
            day_shift: partition.day,
            night_shift: partition.night,
        }
    }
}
