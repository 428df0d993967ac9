//! # roomescape: reservation persistence for a room escape booking backend
//!
//! `roomescape` stores reservations and the bookable time slots they point at in SQLite, and
//! maps rows into typed records that an outer layer (HTTP controllers, the bundled CLI) turns
//! into wire responses.
//!
//! ## Overview
//!
//! A reservation is a name, a calendar date and a time slot. Time slots live in their own
//! table and are shared by reservations; each reservation read from the database carries a
//! snapshot of its slot. Listing reservations is an inner join, so a reservation whose slot
//! has been deleted is still stored but no longer listed.
//!
//! ## Architecture
//!
//! The **database layer** ([`db`]) uses the repository pattern. [`db::handlers::Reservations`]
//! lists, creates and deletes reservations; [`db::handlers::ReservationTimes`] does the same for
//! time slots. Both borrow a single connection (or transaction) from a pool built by
//! [`db::pool::connect`], and return [`db::models`] records or a [`db::errors::DbError`].
//!
//! The **API models** ([`api::models`]) are the wire shapes: a reservation is projected to
//! `{ "id", "name", "date": "YYYY-MM-DD", "time": "HH:mm" }`.
//!
//! **Configuration** ([`config`]) comes from a YAML file plus `ROOMESCAPE_` environment
//! overrides, and [`telemetry`] sets up `tracing`.
//!
//! ## Quick Start
//!
//! ```no_run
//! use roomescape::db::handlers::{Repository, Reservations};
//! use roomescape::db::models::reservations::ReservationCreateDBRequest;
//! use roomescape::api::models::reservations::ReservationResponse;
//!
//! # async fn example(pool: sqlx::SqlitePool) -> anyhow::Result<()> {
//! let mut conn = pool.acquire().await?;
//! let mut reservations = Reservations::new(&mut conn);
//!
//! let created = reservations
//!     .create(&ReservationCreateDBRequest {
//!         name: "Alice".to_string(),
//!         date: chrono::NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
//!         time_id: 1,
//!     })
//!     .await?;
//!
//! let response = ReservationResponse::from(created);
//! println!("{}", serde_json::to_string(&response)?);
//! # Ok(())
//! # }
//! ```
pub mod api;
pub mod cli;
pub mod config;
pub mod db;
pub mod telemetry;
mod types;

#[cfg(test)]
mod test;

pub use config::Config;
pub use types::{ReservationId, ReservationTimeId};
