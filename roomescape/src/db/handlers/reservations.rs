//! Database repository for reservations.

use crate::{
    db::{
        errors::{Result, exactly_one},
        handlers::{
            columns::{date_column, encode_date, time_column},
            repository::Repository,
        },
        models::{
            reservation_times::ReservationTimeDBResponse,
            reservations::{ReservationCreateDBRequest, ReservationDBResponse},
        },
    },
    types::{ReservationId, ReservationTimeId},
};
use sqlx::sqlite::SqliteRow;
use sqlx::{Connection, FromRow, Row, SqliteConnection};
use tracing::{debug, instrument};

/// Decodes one row of the reservation/time-slot join.
///
/// The join must alias the slot columns as `time_id` and `start_at`.
impl<'r> FromRow<'r, SqliteRow> for ReservationDBResponse {
    fn from_row(row: &'r SqliteRow) -> std::result::Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            date: date_column(row, "date")?,
            time: ReservationTimeDBResponse {
                id: row.try_get("time_id")?,
                start_at: time_column(row, "start_at")?,
            },
        })
    }
}

pub struct Reservations<'c> {
    db: &'c mut SqliteConnection,
}

impl<'c> Reservations<'c> {
    pub fn new(db: &'c mut SqliteConnection) -> Self {
        Self { db }
    }
}

/// Resolve the time slot a reservation points at.
async fn find_time_by_id(conn: &mut SqliteConnection, id: ReservationTimeId) -> Result<ReservationTimeDBResponse> {
    let rows = sqlx::query_as::<_, ReservationTimeDBResponse>("SELECT id, start_at FROM reservation_time WHERE id = ? LIMIT 2")
        .bind(id)
        .fetch_all(conn)
        .await?;

    exactly_one(rows, "reservation_time")
}

#[async_trait::async_trait]
impl<'c> Repository for Reservations<'c> {
    type CreateRequest = ReservationCreateDBRequest;
    type Response = ReservationDBResponse;
    type Id = ReservationId;

    /// Insert the reservation and resolve its time slot in one transaction.
    ///
    /// If `time_id` names no slot the lookup fails with [`crate::db::errors::DbError::NotFound`]
    /// and the insert is rolled back with it.
    #[instrument(skip(self, request), fields(name = %request.name, date = %request.date, time_id = request.time_id), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response> {
        let mut tx = self.db.begin().await?;

        let id: ReservationId = sqlx::query_scalar(
            r#"
            INSERT INTO reservation (name, date, time_id)
            VALUES (?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(&request.name)
        .bind(encode_date(request.date))
        .bind(request.time_id)
        .fetch_one(&mut *tx)
        .await?;

        // Dropping tx on error rolls back the insert above
        let time = find_time_by_id(&mut *tx, request.time_id).await?;

        tx.commit().await?;
        debug!(reservation_id = id, "reservation created");

        Ok(ReservationDBResponse {
            id,
            name: request.name.clone(),
            date: request.date,
            time,
        })
    }

    /// Reservations whose time slot no longer exists are left out.
    #[instrument(skip(self), err)]
    async fn list(&mut self) -> Result<Vec<Self::Response>> {
        let reservations = sqlx::query_as::<_, ReservationDBResponse>(
            r#"
            SELECT r.id,
                   r.name,
                   r.date,
                   t.id AS time_id,
                   t.start_at
            FROM reservation AS r
            INNER JOIN reservation_time AS t
                ON r.time_id = t.id
            ORDER BY r.id ASC
            "#,
        )
        .fetch_all(&mut *self.db)
        .await?;

        Ok(reservations)
    }

    #[instrument(skip(self), err)]
    async fn delete(&mut self, id: Self::Id) -> Result<u64> {
        let result = sqlx::query("DELETE FROM reservation WHERE id = ?")
            .bind(id)
            .execute(&mut *self.db)
            .await?;

        Ok(result.rows_affected())
    }
}
