use std::collections::HashSet;
use std::fmt;

use crate::api::OngoingTripResponse;

/// Outcome of checking a proposed assignment against the ongoing-trip
/// snapshot. Driver conflicts are reported before helper conflicts,
/// helper conflicts before vehicle conflicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictCheck {
    Clear,
    Driver,
    Helper,
    Vehicle,
}

impl ConflictCheck {
    pub fn is_clear(&self) -> bool {
        matches!(self, ConflictCheck::Clear)
    }
}

impl fmt::Display for ConflictCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            ConflictCheck::Clear => "No conflicting assignments.",
            ConflictCheck::Driver => "Selected driver is already part of an ongoing trip.",
            ConflictCheck::Helper => {
                "One or both of the selected helpers are already part of an ongoing trip."
            }
            ConflictCheck::Vehicle => "Selected vehicle is already assigned to an ongoing trip.",
        };
        write!(f, "{}", message)
    }
}

/// The assignment an operator wants to commit: one driver, up to two
/// helpers, one vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProposedAssignment {
    pub vehicle_id: i64,
    pub driver_id: i64,
    pub helper_id: Option<i64>,
    pub helper2_id: Option<i64>,
}

/// Point-in-time index of every person and vehicle committed to a trip
/// that has not yet completed. Built from a fresh snapshot fetch and
/// discarded after the check; never mutated, never cached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BusyAssignments {
    employees: HashSet<i64>,
    vehicles: HashSet<i64>,
}

impl BusyAssignments {
    pub fn from_snapshots(trips: &[OngoingTripResponse]) -> Self {
        let mut employees = HashSet::new();
        let mut vehicles = HashSet::new();
        for trip in trips {
            vehicles.insert(trip.vehicle_id);
            employees.insert(trip.employee_id);
            if let Some(helper_id) = trip.helper_id {
                employees.insert(helper_id);
            }
            if let Some(helper2_id) = trip.helper2_id {
                employees.insert(helper2_id);
            }
        }
        Self { employees, vehicles }
    }

    /// An employee is busy no matter which slot (driver or either
    /// helper) they occupy on the ongoing trip.
    pub fn is_employee_busy(&self, employee_id: i64) -> bool {
        self.employees.contains(&employee_id)
    }

    pub fn is_vehicle_busy(&self, vehicle_id: i64) -> bool {
        self.vehicles.contains(&vehicle_id)
    }
}

/// Pure predicate over the provided snapshot; the caller fetches the
/// snapshot immediately beforehand and aborts the creation on anything
/// but `Clear`. Another client can still commit a conflicting assignment
/// between the read and the write, so the backend stays the final
/// arbiter.
pub fn check_assignment(proposed: &ProposedAssignment, busy: &BusyAssignments) -> ConflictCheck {
    if busy.is_employee_busy(proposed.driver_id) {
        return ConflictCheck::Driver;
    }
    let helper_busy = proposed
        .helper_id
        .is_some_and(|id| busy.is_employee_busy(id))
        || proposed
            .helper2_id
            .is_some_and(|id| busy.is_employee_busy(id));
    if helper_busy {
        return ConflictCheck::Helper;
    }
    if busy.is_vehicle_busy(proposed.vehicle_id) {
        return ConflictCheck::Vehicle;
    }
    ConflictCheck::Clear
}
