use chrono::NaiveDate;
use thiserror::Error;

use crate::api::{EmployeeResponse, RegisterTripRequest, TripStop, VehicleResponse};

// Depot coordinates reported until a geocoded origin replaces them.
const DEFAULT_USER_LAT: &str = "14.65889";
const DEFAULT_USER_LNG: &str = "121.10419";

/// Rejections raised before any network activity. Messages are the
/// operator-facing texts the form surfaces verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please select a vehicle for the trip.")]
    MissingVehicle,
    #[error("Please select a driver for the trip.")]
    MissingDriver,
    #[error("Please provide the trip origin.")]
    MissingOrigin,
    #[error("Please provide a trip description.")]
    MissingDescription,
    #[error("Please provide a multiplier greater than zero.")]
    InvalidMultiplier,
    #[error("Please provide the driver base salary.")]
    InvalidDriverBaseSalary,
    #[error("Please provide an end date for the trip.")]
    MissingEndDate,
    #[error("The end date cannot fall before the start date.")]
    EndBeforeStart,
    #[error("Please provide a base salary for the helper(s).")]
    MissingHelperSalary,
    #[error("Please select helpers if you have provided a base salary for them.")]
    HelperSalaryWithoutHelper,
    #[error("Helper 1 and Helper 2 cannot be the same person.")]
    DuplicateHelpers,
}

/// One delivery drop. Destination, client and distance always travel
/// together so the per-drop arrays in the payload stay in lockstep.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DropEntry {
    pub destination: Option<TripStop>,
    pub client: String,
    pub distance: String,
}

/// Immutable draft of the new-trip form. Edits return a new draft;
/// validation is a pure function of the value, so every state the UI can
/// hold is directly testable.
#[derive(Debug, Clone, PartialEq)]
pub struct TripFormState {
    pub vehicle: Option<VehicleResponse>,
    pub driver: Option<EmployeeResponse>,
    pub helper: Option<EmployeeResponse>,
    pub helper2: Option<EmployeeResponse>,
    pub origin: Option<TripStop>,
    pub drops: Vec<DropEntry>,
    pub description: Vec<String>,
    pub multiplier: String,
    pub driver_base_salary: String,
    pub helper_base_salary: String,
    pub additionals: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

impl TripFormState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            vehicle: None,
            driver: None,
            helper: None,
            helper2: None,
            origin: None,
            drops: vec![DropEntry::default()],
            description: Vec::new(),
            multiplier: String::new(),
            driver_base_salary: String::new(),
            helper_base_salary: String::new(),
            additionals: String::new(),
            start_date: today,
            end_date: None,
        }
    }

    pub fn num_of_drops(&self) -> usize {
        self.drops.len()
    }

    pub fn with_vehicle(mut self, vehicle: Option<VehicleResponse>) -> Self {
        self.vehicle = vehicle;
        self
    }

    pub fn with_driver(mut self, driver: Option<EmployeeResponse>) -> Self {
        self.driver = driver;
        self
    }

    pub fn with_helper(mut self, helper: Option<EmployeeResponse>) -> Self {
        self.helper = helper;
        self
    }

    pub fn with_helper2(mut self, helper2: Option<EmployeeResponse>) -> Self {
        self.helper2 = helper2;
        self
    }

    pub fn with_origin(mut self, origin: Option<TripStop>) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self
    }

    pub fn with_end_date(mut self, end_date: Option<NaiveDate>) -> Self {
        self.end_date = end_date;
        self
    }

    /// Comma-separated tags ("Frozen, Chilled, Dry") become the
    /// description list.
    pub fn with_description_input(mut self, raw: &str) -> Self {
        self.description = raw
            .split(',')
            .map(|tag| tag.trim().to_string())
            .filter(|tag| !tag.is_empty())
            .collect();
        self
    }

    /// Mirrors the form's input guard: anything that does not parse to a
    /// positive number leaves the previous value in place. Clearing the
    /// field is always allowed.
    pub fn with_multiplier_input(mut self, raw: &str) -> Self {
        if raw.is_empty() {
            self.multiplier.clear();
            return self;
        }
        if parse_positive(raw).is_some() {
            self.multiplier = raw.to_string();
        }
        self
    }

    /// Same guard as the multiplier, except zero is acceptable.
    pub fn with_additionals_input(mut self, raw: &str) -> Self {
        if raw.is_empty() {
            self.additionals.clear();
            return self;
        }
        if parse_non_negative(raw).is_some() {
            self.additionals = raw.to_string();
        }
        self
    }

    pub fn with_driver_base_salary_input(mut self, raw: &str) -> Self {
        self.driver_base_salary = raw.to_string();
        self
    }

    pub fn with_helper_base_salary_input(mut self, raw: &str) -> Self {
        self.helper_base_salary = raw.to_string();
        self
    }

    pub fn add_drop(mut self) -> Self {
        self.drops.push(DropEntry::default());
        self
    }

    /// Removing the last remaining drop is a no-op; a trip always has at
    /// least one.
    pub fn remove_drop(mut self, index: usize) -> Self {
        if self.drops.len() > 1 && index < self.drops.len() {
            self.drops.remove(index);
        }
        self
    }

    pub fn with_drop_destination(mut self, index: usize, destination: TripStop) -> Self {
        if let Some(drop) = self.drops.get_mut(index) {
            drop.destination = Some(destination);
        }
        self
    }

    pub fn with_drop_client(mut self, index: usize, client: &str) -> Self {
        if let Some(drop) = self.drops.get_mut(index) {
            drop.client = client.to_string();
        }
        self
    }

    pub fn with_drop_distance(mut self, index: usize, distance: &str) -> Self {
        if let Some(drop) = self.drops.get_mut(index) {
            drop.distance = distance.to_string();
        }
        self
    }

    /// Validates the draft and produces the create-trip payload. Checks
    /// run in the order the form reports them; the first failure wins
    /// and nothing touches the network.
    pub fn to_payload(&self) -> Result<RegisterTripRequest, ValidationError> {
        let vehicle = self.vehicle.as_ref().ok_or(ValidationError::MissingVehicle)?;
        let driver = self.driver.as_ref().ok_or(ValidationError::MissingDriver)?;
        let origin = self.origin.clone().ok_or(ValidationError::MissingOrigin)?;
        if self.description.is_empty() {
            return Err(ValidationError::MissingDescription);
        }
        let multiplier =
            parse_positive(&self.multiplier).ok_or(ValidationError::InvalidMultiplier)?;
        let driver_base_salary = parse_positive(&self.driver_base_salary)
            .ok_or(ValidationError::InvalidDriverBaseSalary)?;
        let end_date = self.end_date.ok_or(ValidationError::MissingEndDate)?;
        if end_date < self.start_date {
            return Err(ValidationError::EndBeforeStart);
        }

        let has_helpers = self.helper.is_some() || self.helper2.is_some();
        let helper_base_salary = if has_helpers {
            Some(parse_positive(&self.helper_base_salary).ok_or(ValidationError::MissingHelperSalary)?)
        } else {
            if !self.helper_base_salary.trim().is_empty() {
                return Err(ValidationError::HelperSalaryWithoutHelper);
            }
            None
        };
        if let (Some(helper), Some(helper2)) = (&self.helper, &self.helper2) {
            if helper.employee_id == helper2.employee_id {
                return Err(ValidationError::DuplicateHelpers);
            }
        }

        let addresses = self
            .drops
            .iter()
            .map(|drop| {
                drop.destination
                    .as_ref()
                    .map(|stop| stop.address.clone())
                    .unwrap_or_default()
            })
            .collect();
        let dest_lat = self
            .drops
            .iter()
            .map(|drop| {
                drop.destination
                    .as_ref()
                    .map(|stop| stop.lat.to_string())
                    .unwrap_or_default()
            })
            .collect();
        let dest_lng = self
            .drops
            .iter()
            .map(|drop| {
                drop.destination
                    .as_ref()
                    .map(|stop| stop.lng.to_string())
                    .unwrap_or_default()
            })
            .collect();

        Ok(RegisterTripRequest {
            vehicle_id: vehicle.vehicle_id,
            employee_id: driver.employee_id,
            helper_id: self.helper.as_ref().map(|h| h.employee_id),
            helper2_id: self.helper2.as_ref().map(|h| h.employee_id),
            num_of_drops: self.drops.len(),
            addresses,
            clients: self.drops.iter().map(|drop| drop.client.clone()).collect(),
            distances: self.drops.iter().map(|drop| drop.distance.clone()).collect(),
            user_lat: DEFAULT_USER_LAT.to_string(),
            user_lng: DEFAULT_USER_LNG.to_string(),
            dest_lat,
            dest_lng,
            completed: vec![false; self.drops.len()],
            origin,
            trip_description: self.description.clone(),
            multiplier,
            driver_base_salary,
            helper_base_salary,
            additionals: parse_non_negative(&self.additionals),
            start_date: self.start_date,
            end_date,
        })
    }
}

fn parse_positive(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|value| *value > 0.0)
}

fn parse_non_negative(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|value| *value >= 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vehicle(vehicle_id: i64) -> VehicleResponse {
        VehicleResponse {
            vehicle_id,
            plate_number: "NDX-4821".into(),
            vehicle_type: "6-wheeler".into(),
            is_company_owned: true,
            subcon_name: None,
        }
    }

    fn employee(employee_id: i64) -> EmployeeResponse {
        EmployeeResponse {
            employee_id,
            user: crate::api::UserSummary {
                username: format!("emp{}", employee_id),
                employee_type: "Driver".into(),
            },
        }
    }

    fn stop(address: &str) -> TripStop {
        TripStop {
            address: address.into(),
            lat: 14.5995,
            lng: 120.9842,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 16).unwrap()
    }

    fn valid_draft() -> TripFormState {
        TripFormState::new(today())
            .with_vehicle(Some(vehicle(2)))
            .with_driver(Some(employee(11)))
            .with_origin(Some(stop("Depot")))
            .with_description_input("Frozen, Chilled")
            .with_multiplier_input("1.25")
            .with_driver_base_salary_input("900")
            .with_end_date(NaiveDate::from_ymd_opt(2025, 3, 18))
            .with_drop_destination(0, stop("Warehouse B"))
            .with_drop_client(0, "Acme")
            .with_drop_distance(0, "12.5")
    }

    #[test]
    fn valid_draft_produces_payload() {
        let payload = valid_draft().to_payload().unwrap();
        assert_eq!(payload.vehicle_id, 2);
        assert_eq!(payload.employee_id, 11);
        assert_eq!(payload.num_of_drops, 1);
        assert_eq!(payload.addresses, vec!["Warehouse B".to_string()]);
        assert_eq!(payload.completed, vec![false]);
        assert_eq!(payload.trip_description, vec!["Frozen", "Chilled"]);
        assert!(payload.helper_id.is_none());
        assert!(payload.helper_base_salary.is_none());
    }

    #[test]
    fn missing_selections_fail_in_reported_order() {
        let draft = TripFormState::new(today());
        assert_eq!(draft.clone().to_payload(), Err(ValidationError::MissingVehicle));
        let draft = draft.with_vehicle(Some(vehicle(2)));
        assert_eq!(draft.clone().to_payload(), Err(ValidationError::MissingDriver));
        let draft = draft.with_driver(Some(employee(11)));
        assert_eq!(draft.clone().to_payload(), Err(ValidationError::MissingOrigin));
        let draft = draft.with_origin(Some(stop("Depot")));
        assert_eq!(draft.to_payload(), Err(ValidationError::MissingDescription));
    }

    #[test]
    fn multiplier_input_guard_keeps_previous_value() {
        let draft = TripFormState::new(today()).with_multiplier_input("1.5");
        assert_eq!(draft.multiplier, "1.5");

        let draft = draft.with_multiplier_input("-2");
        assert_eq!(draft.multiplier, "1.5");
        let draft = draft.with_multiplier_input("abc");
        assert_eq!(draft.multiplier, "1.5");
        let draft = draft.with_multiplier_input("0");
        assert_eq!(draft.multiplier, "1.5");

        let draft = draft.with_multiplier_input("");
        assert_eq!(draft.multiplier, "");
    }

    #[test]
    fn additionals_guard_allows_zero_but_not_negatives() {
        let draft = TripFormState::new(today()).with_additionals_input("0");
        assert_eq!(draft.additionals, "0");
        let draft = draft.with_additionals_input("-5");
        assert_eq!(draft.additionals, "0");
    }

    #[test]
    fn zero_or_malformed_multiplier_is_rejected_at_validation() {
        let mut draft = valid_draft();
        draft.multiplier = "0".into();
        assert_eq!(draft.clone().to_payload(), Err(ValidationError::InvalidMultiplier));
        draft.multiplier = String::new();
        assert_eq!(draft.to_payload(), Err(ValidationError::InvalidMultiplier));
    }

    #[test]
    fn end_date_is_required_and_ordered() {
        let draft = valid_draft().with_end_date(None);
        assert_eq!(draft.to_payload(), Err(ValidationError::MissingEndDate));

        let draft = valid_draft().with_end_date(NaiveDate::from_ymd_opt(2025, 3, 10));
        assert_eq!(draft.to_payload(), Err(ValidationError::EndBeforeStart));
    }

    #[test]
    fn helper_selection_requires_compensation_and_vice_versa() {
        let draft = valid_draft().with_helper(Some(employee(20)));
        assert_eq!(draft.to_payload(), Err(ValidationError::MissingHelperSalary));

        let draft = valid_draft().with_helper_base_salary_input("600");
        assert_eq!(draft.to_payload(), Err(ValidationError::HelperSalaryWithoutHelper));

        let draft = valid_draft()
            .with_helper(Some(employee(20)))
            .with_helper_base_salary_input("600");
        let payload = draft.to_payload().unwrap();
        assert_eq!(payload.helper_id, Some(20));
        assert_eq!(payload.helper_base_salary, Some(600.0));
    }

    #[test]
    fn identical_helpers_are_rejected() {
        let draft = valid_draft()
            .with_helper(Some(employee(20)))
            .with_helper2(Some(employee(20)))
            .with_helper_base_salary_input("600");
        assert_eq!(draft.to_payload(), Err(ValidationError::DuplicateHelpers));
    }

    #[test]
    fn drop_lists_stay_in_lockstep() {
        let draft = valid_draft()
            .add_drop()
            .with_drop_destination(1, stop("Warehouse C"))
            .with_drop_client(1, "Globex")
            .with_drop_distance(1, "3.1");
        assert_eq!(draft.num_of_drops(), 2);

        let payload = draft.clone().to_payload().unwrap();
        assert_eq!(payload.addresses.len(), 2);
        assert_eq!(payload.clients, vec!["Acme".to_string(), "Globex".to_string()]);
        assert_eq!(payload.distances.len(), 2);
        assert_eq!(payload.dest_lat.len(), 2);
        assert_eq!(payload.completed.len(), 2);

        let trimmed = draft.remove_drop(0);
        assert_eq!(trimmed.num_of_drops(), 1);
        assert_eq!(trimmed.drops[0].client, "Globex");
    }

    #[test]
    fn last_drop_cannot_be_removed() {
        let draft = valid_draft().remove_drop(0);
        assert_eq!(draft.num_of_drops(), 1);
    }
}
