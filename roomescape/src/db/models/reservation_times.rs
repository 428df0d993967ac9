//! Database models for reservation time slots.

use crate::types::ReservationTimeId;
use chrono::NaiveTime;

/// Database request for creating a new time slot
#[derive(Debug, Clone)]
pub struct ReservationTimeCreateDBRequest {
    pub start_at: NaiveTime,
}

/// Database response for a time slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationTimeDBResponse {
    pub id: ReservationTimeId,
    pub start_at: NaiveTime,
}
