//! Database record models matching table schemas.
//!
//! These structs carry rows between the repositories in [`crate::db::handlers`] and their
//! callers. They hold typed `chrono` values; the repositories own the conversion to and from
//! the ISO text the tables store.
//!
//! Database models are distinct from the API models in [`crate::api::models`], which convert
//! from them:
//!
//! ```ignore
//! use roomescape::api::models::reservations::ReservationResponse;
//!
//! let response: ReservationResponse = db_reservation.into();
//! ```

pub mod reservation_times;
pub mod reservations;
