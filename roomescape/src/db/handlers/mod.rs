//! Repository implementations for database access.
//!
//! Each repository wraps a `&mut SqliteConnection` (a pooled connection or a transaction),
//! binds parameters, decodes rows into [`crate::db::models`] and implements the
//! [`Repository`] trait.
//!
//! # Available Repositories
//!
//! - [`Reservations`]: reservations joined with their time slot
//! - [`ReservationTimes`]: bookable time slots
//!
//! # Common Pattern
//!
//! ```ignore
//! use roomescape::db::handlers::{Repository, Reservations};
//!
//! async fn example(pool: &sqlx::SqlitePool) -> Result<(), Box<dyn std::error::Error>> {
//!     let mut conn = pool.acquire().await?;
//!     let reservations = Reservations::new(&mut conn).list().await?;
//!     println!("{} reservations", reservations.len());
//!     Ok(())
//! }
//! ```
//!
//! Repositories can also be built over a caller's transaction (`Reservations::new(&mut tx)`);
//! `Reservations::create` then runs inside it as a savepoint.

pub(crate) mod columns;
pub mod repository;
pub mod reservation_times;
pub mod reservations;

pub use repository::Repository;
pub use reservation_times::ReservationTimes;
pub use reservations::Reservations;
