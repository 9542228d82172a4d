use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One currently ongoing trip, as reported by `GET /ongoing-trips/`.
/// Read-only point-in-time snapshot; fetched fresh for every conflict
/// check, never cached.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OngoingTripResponse {
    pub vehicle_id: i64,
    pub employee_id: i64,
    pub helper_id: Option<i64>,
    pub helper2_id: Option<i64>,
}

/// A geocoded address as produced by the autocomplete layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TripStop {
    pub address: String,
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegisterTripRequest {
    pub vehicle_id: i64,
    pub employee_id: i64,
    pub helper_id: Option<i64>,
    pub helper2_id: Option<i64>,
    pub num_of_drops: usize,
    pub addresses: Vec<String>,
    pub clients: Vec<String>,
    pub distances: Vec<String>,
    pub user_lat: String,
    pub user_lng: String,
    pub dest_lat: Vec<String>,
    pub dest_lng: Vec<String>,
    pub completed: Vec<bool>,
    pub origin: TripStop,
    pub trip_description: Vec<String>,
    pub multiplier: f64,
    pub driver_base_salary: f64,
    pub helper_base_salary: Option<f64>,
    pub additionals: Option<f64>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripCreatedResponse {
    pub trip_id: i64,
}

/// One row of `GET /trips-by-date-range/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TripSummaryResponse {
    pub trip_id: i64,
    pub employee_id: i64,
    pub driver_base_salary: f64,
    pub helper_base_salary: Option<f64>,
    pub multiplier: f64,
    pub additionals: Option<f64>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub completed: bool,
}

/// Stored gross totals for one payroll window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TotalsResponse {
    pub id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_driver_salary: f64,
    pub total_helper_salary: f64,
    pub total_gross: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserSummary {
    pub username: String,
    pub employee_type: String,
}

/// One row of the salary priority queue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriorityQueueEntry {
    pub id: i64,
    pub base_salary: f64,
    pub salary_field: String,
    pub user: UserSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmployeeResponse {
    pub employee_id: i64,
    pub user: UserSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VehicleResponse {
    pub vehicle_id: i64,
    pub plate_number: String,
    pub vehicle_type: String,
    pub is_company_owned: bool,
    pub subcon_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterVehicleRequest {
    pub plate_number: String,
    pub vehicle_type: String,
    pub is_company_owned: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcon_name: Option<String>,
}

/// Account listing row. The government-id fields are blank until HR
/// backfills them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: String,
    pub employee_type: String,
    pub cellphone_no: String,
    pub philhealth_no: Option<String>,
    pub pag_ibig_no: Option<String>,
    pub sss_no: Option<String>,
    pub license_no: Option<String>,
}

/// Only email and cellphone number are editable from the accounts page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateUserRequest {
    pub email: String,
    pub cellphone_no: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: String,
    pub employee_type: String,
    pub cellphone_no: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for ApiError {}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "VALIDATION_ERROR".to_string(),
            details: None,
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }

    /// True when the failure happened on this side of the wire (the
    /// request never completed, or the body was unreadable) rather than
    /// as a verdict from the backend.
    pub fn is_transport(&self) -> bool {
        matches!(self.code.as_str(), "REQUEST_FAILED" | "UNKNOWN")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserialize_ongoing_trip_with_absent_helpers() {
        let raw = r#"{"vehicle_id":1,"employee_id":10}"#;
        let trip: OngoingTripResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(trip.vehicle_id, 1);
        assert_eq!(trip.employee_id, 10);
        assert!(trip.helper_id.is_none());
        assert!(trip.helper2_id.is_none());

        let raw = r#"{"vehicle_id":1,"employee_id":10,"helper_id":20,"helper2_id":null}"#;
        let trip: OngoingTripResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(trip.helper_id, Some(20));
        assert!(trip.helper2_id.is_none());
    }

    #[test]
    fn serialize_register_trip_request_dates_as_plain_days() {
        let request = RegisterTripRequest {
            vehicle_id: 3,
            employee_id: 11,
            helper_id: Some(21),
            helper2_id: None,
            num_of_drops: 1,
            addresses: vec!["Warehouse B".into()],
            clients: vec!["Acme".into()],
            distances: vec!["12.5".into()],
            user_lat: "14.65889".into(),
            user_lng: "121.10419".into(),
            dest_lat: vec!["14.5995".into()],
            dest_lng: vec!["120.9842".into()],
            completed: vec![false],
            origin: TripStop {
                address: "Depot".into(),
                lat: 14.65889,
                lng: 121.10419,
            },
            trip_description: vec!["Frozen".into(), "Chilled".into()],
            multiplier: 1.25,
            driver_base_salary: 900.0,
            helper_base_salary: Some(600.0),
            additionals: None,
            start_date: NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 3, 5).unwrap(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["start_date"], json!("2025-03-03"));
        assert_eq!(value["end_date"], json!("2025-03-05"));
        assert_eq!(value["num_of_drops"], json!(1));
        assert_eq!(value["helper2_id"], json!(null));
        assert_eq!(value["dest_lat"], json!(["14.5995"]));
    }

    #[test]
    fn deserialize_priority_queue_entry() {
        let raw = json!({
            "id": 4,
            "base_salary": 820.50,
            "salary_field": "driver_base_salary",
            "user": { "username": "rcruz", "employee_type": "Driver" }
        });
        let entry: PriorityQueueEntry = serde_json::from_value(raw).unwrap();
        assert_eq!(entry.user.username, "rcruz");
        assert_eq!(entry.base_salary, 820.50);
    }

    #[test]
    fn deserialize_user_response_with_blank_government_ids() {
        let raw = json!({
            "id": 9,
            "username": "mreyes",
            "first_name": "Mina",
            "last_name": "Reyes",
            "email": "mreyes@example.com",
            "role": "employee",
            "employee_type": "Helper",
            "cellphone_no": "09171234567",
            "philhealth_no": null,
            "pag_ibig_no": null,
            "sss_no": null,
            "license_no": null
        });
        let user: UserResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(user.id, 9);
        assert!(user.philhealth_no.is_none());
    }

    #[test]
    fn api_error_helpers_set_expected_codes() {
        let validation = ApiError::validation("invalid payload");
        assert_eq!(validation.code, "VALIDATION_ERROR");
        assert!(!validation.is_transport());

        let request_failed = ApiError::request_failed("network error");
        assert_eq!(request_failed.code, "REQUEST_FAILED");
        assert!(request_failed.is_transport());
        assert!(ApiError::unknown("bad body").is_transport());
    }

    #[test]
    fn api_error_display_and_string_conversion_match_error_text() {
        let error = ApiError::unknown("boom");
        assert_eq!(format!("{}", error), "boom");

        let raw: String = ApiError::validation("bad input").into();
        assert_eq!(raw, "bad input");
    }
}
