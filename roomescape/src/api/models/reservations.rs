//! API request/response models for reservations.

use crate::db::models::reservations::ReservationDBResponse;
use crate::types::{ReservationId, ReservationTimeId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::reservation_times::format_start_at;

// Reservation request models
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReservationCreate {
    pub name: String,
    /// Calendar date, `YYYY-MM-DD`
    #[schema(value_type = String, example = "2024-05-01")]
    pub date: NaiveDate,
    pub time_id: ReservationTimeId,
}

// Reservation response models
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ReservationResponse {
    pub id: ReservationId,
    pub name: String,
    /// ISO calendar date, `YYYY-MM-DD`
    #[schema(example = "2024-05-01")]
    pub date: String,
    /// Start of the booked slot, 24-hour `HH:mm`
    #[schema(example = "10:00")]
    pub time: String,
}

impl From<ReservationDBResponse> for ReservationResponse {
    fn from(db: ReservationDBResponse) -> Self {
        Self {
            id: db.id,
            name: db.name,
            date: db.date.format("%Y-%m-%d").to_string(),
            time: format_start_at(db.time.start_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::reservation_times::ReservationTimeDBResponse;
    use crate::db::models::reservations::ReservationCreateDBRequest;
    use chrono::NaiveTime;

    fn reservation(start_at: NaiveTime) -> ReservationDBResponse {
        ReservationDBResponse {
            id: 3,
            name: "Alice".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            time: ReservationTimeDBResponse { id: 1, start_at },
        }
    }

    #[test]
    fn test_projection_formats_date_and_time() {
        let response = ReservationResponse::from(reservation(NaiveTime::from_hms_opt(10, 0, 0).unwrap()));

        assert_eq!(
            response,
            ReservationResponse {
                id: 3,
                name: "Alice".to_string(),
                date: "2024-05-01".to_string(),
                time: "10:00".to_string(),
            }
        );
    }

    #[test]
    fn test_projection_drops_seconds_and_pads() {
        let response = ReservationResponse::from(reservation(NaiveTime::from_hms_opt(7, 5, 59).unwrap()));
        assert_eq!(response.time, "07:05");
    }

    #[test]
    fn test_projection_json_shape() {
        let response = ReservationResponse::from(reservation(NaiveTime::from_hms_opt(18, 30, 0).unwrap()));

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            serde_json::json!({"id": 3, "name": "Alice", "date": "2024-05-01", "time": "18:30"})
        );
    }

    #[test]
    fn test_create_request_uses_camel_case() {
        let request: ReservationCreate =
            serde_json::from_str(r#"{"name": "Alice", "date": "2024-05-01", "timeId": 1}"#).unwrap();
        let db_request = ReservationCreateDBRequest::from(request);

        assert_eq!(db_request.name, "Alice");
        assert_eq!(db_request.date, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        assert_eq!(db_request.time_id, 1);
    }

    #[test]
    fn test_create_request_rejects_non_iso_date() {
        let result = serde_json::from_str::<ReservationCreate>(r#"{"name": "Alice", "date": "05/01/2024", "timeId": 1}"#);
        assert!(result.is_err());
    }
}
