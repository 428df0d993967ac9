//! Database repository for reservation time slots.

use crate::{
    db::{
        errors::Result,
        handlers::{
            columns::{encode_time, time_column},
            repository::Repository,
        },
        models::reservation_times::{ReservationTimeCreateDBRequest, ReservationTimeDBResponse},
    },
    types::ReservationTimeId,
};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqliteConnection};
use tracing::instrument;

impl<'r> FromRow<'r, SqliteRow> for ReservationTimeDBResponse {
    fn from_row(row: &'r SqliteRow) -> std::result::Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            start_at: time_column(row, "start_at")?,
        })
    }
}

pub struct ReservationTimes<'c> {
    db: &'c mut SqliteConnection,
}

impl<'c> ReservationTimes<'c> {
    pub fn new(db: &'c mut SqliteConnection) -> Self {
        Self { db }
    }

    /// Get a time slot by ID
    #[instrument(skip(self), err)]
    pub async fn get_by_id(&mut self, id: ReservationTimeId) -> Result<Option<ReservationTimeDBResponse>> {
        let time = sqlx::query_as::<_, ReservationTimeDBResponse>("SELECT id, start_at FROM reservation_time WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *self.db)
            .await?;

        Ok(time)
    }
}

#[async_trait::async_trait]
impl<'c> Repository for ReservationTimes<'c> {
    type CreateRequest = ReservationTimeCreateDBRequest;
    type Response = ReservationTimeDBResponse;
    type Id = ReservationTimeId;

    #[instrument(skip(self, request), fields(start_at = %request.start_at), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response> {
        let time = sqlx::query_as::<_, ReservationTimeDBResponse>(
            r#"
            INSERT INTO reservation_time (start_at)
            VALUES (?)
            RETURNING id, start_at
            "#,
        )
        .bind(encode_time(request.start_at))
        .fetch_one(&mut *self.db)
        .await?;

        Ok(time)
    }

    #[instrument(skip(self), err)]
    async fn list(&mut self) -> Result<Vec<Self::Response>> {
        let times = sqlx::query_as::<_, ReservationTimeDBResponse>("SELECT id, start_at FROM reservation_time ORDER BY id ASC")
            .fetch_all(&mut *self.db)
            .await?;

        Ok(times)
    }

    /// Reservations that still point at a deleted slot are left in place; they stop showing up
    /// in [`super::Reservations`] listings.
    #[instrument(skip(self), err)]
    async fn delete(&mut self, id: Self::Id) -> Result<u64> {
        let result = sqlx::query("DELETE FROM reservation_time WHERE id = ?")
            .bind(id)
            .execute(&mut *self.db)
            .await?;

        Ok(result.rows_affected())
    }
}
