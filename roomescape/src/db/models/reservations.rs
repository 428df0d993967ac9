//! Database models for reservations.

use crate::api::models::reservations::ReservationCreate;
use crate::db::models::reservation_times::ReservationTimeDBResponse;
use crate::types::{ReservationId, ReservationTimeId};
use chrono::NaiveDate;

/// Database request for creating a new reservation
#[derive(Debug, Clone)]
pub struct ReservationCreateDBRequest {
    pub name: String,
    pub date: NaiveDate,
    pub time_id: ReservationTimeId,
}

impl From<ReservationCreate> for ReservationCreateDBRequest {
    fn from(api: ReservationCreate) -> Self {
        Self {
            name: api.name,
            date: api.date,
            time_id: api.time_id,
        }
    }
}

/// Database response for a reservation.
///
/// `time` is a snapshot of the slot taken when the row was read or created; it does not
/// follow later changes to `reservation_time`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationDBResponse {
    pub id: ReservationId,
    pub name: String,
    pub date: NaiveDate,
    pub time: ReservationTimeDBResponse,
}
