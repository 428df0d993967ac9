//! API response models for reservation time slots.

use crate::db::models::reservation_times::ReservationTimeDBResponse;
use crate::types::ReservationTimeId;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 24-hour `HH:mm`, seconds dropped
pub(crate) fn format_start_at(start_at: NaiveTime) -> String {
    start_at.format("%H:%M").to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReservationTimeResponse {
    pub id: ReservationTimeId,
    #[schema(example = "10:00")]
    pub start_at: String,
}

impl From<ReservationTimeDBResponse> for ReservationTimeResponse {
    fn from(db: ReservationTimeDBResponse) -> Self {
        Self {
            id: db.id,
            start_at: format_start_at(db.start_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_projection() {
        let response = ReservationTimeResponse::from(ReservationTimeDBResponse {
            id: 4,
            start_at: NaiveTime::from_hms_opt(9, 30, 15).unwrap(),
        });

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            serde_json::json!({"id": 4, "startAt": "09:30"})
        );
    }
}
