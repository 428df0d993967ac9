use crate::db::handlers::columns::parse_time;
use crate::db::handlers::{Repository, ReservationTimes, Reservations};
use crate::db::models::reservation_times::{ReservationTimeCreateDBRequest, ReservationTimeDBResponse};
use crate::db::models::reservations::{ReservationCreateDBRequest, ReservationDBResponse};
use crate::types::{ReservationId, ReservationTimeId};
use chrono::NaiveDate;
use sqlx::SqlitePool;

pub async fn create_test_time(pool: &SqlitePool, start_at: &str) -> ReservationTimeDBResponse {
    let mut conn = pool.acquire().await.expect("Failed to acquire connection");
    let request = ReservationTimeCreateDBRequest {
        start_at: parse_time(start_at).expect("Invalid test time"),
    };
    ReservationTimes::new(&mut conn)
        .create(&request)
        .await
        .expect("Failed to create test time slot")
}

pub async fn create_test_reservation(pool: &SqlitePool, name: &str, date: &str, time_id: ReservationTimeId) -> ReservationDBResponse {
    let mut conn = pool.acquire().await.expect("Failed to acquire connection");
    let request = ReservationCreateDBRequest {
        name: name.to_string(),
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("Invalid test date"),
        time_id,
    };
    Reservations::new(&mut conn)
        .create(&request)
        .await
        .expect("Failed to create test reservation")
}

/// Insert a time slot bypassing the repository, so tests can plant values it would never write.
pub async fn insert_raw_time(pool: &SqlitePool, start_at: &str) -> ReservationTimeId {
    sqlx::query_scalar("INSERT INTO reservation_time (start_at) VALUES (?) RETURNING id")
        .bind(start_at)
        .fetch_one(pool)
        .await
        .expect("Failed to insert raw time slot")
}

/// Insert a reservation bypassing the repository (no slot lookup, no date encoding).
pub async fn insert_raw_reservation(pool: &SqlitePool, name: &str, date: &str, time_id: ReservationTimeId) -> ReservationId {
    sqlx::query_scalar("INSERT INTO reservation (name, date, time_id) VALUES (?, ?, ?) RETURNING id")
        .bind(name)
        .bind(date)
        .bind(time_id)
        .fetch_one(pool)
        .await
        .expect("Failed to insert raw reservation")
}

/// Count stored reservation rows, including ones the joined listing hides.
pub async fn count_reservation_rows(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM reservation")
        .fetch_one(pool)
        .await
        .expect("Failed to count reservations")
}
