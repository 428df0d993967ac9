//! Operator commands run by the `roomescape` binary.
//!
//! Each command borrows one pooled connection, calls a repository, and returns the projected
//! result as JSON for the binary to print.

use chrono::{NaiveDate, NaiveTime};
use clap::Subcommand;
use serde_json::{Value, json};
use sqlx::SqlitePool;
use tracing::{instrument, warn};

use crate::api::models::reservation_times::ReservationTimeResponse;
use crate::api::models::reservations::{ReservationCreate, ReservationResponse};
use crate::db::handlers::columns::parse_time;
use crate::db::handlers::{Repository, ReservationTimes, Reservations};
use crate::db::models::reservation_times::ReservationTimeCreateDBRequest;
use crate::db::models::reservations::ReservationCreateDBRequest;
use crate::types::{ReservationId, ReservationTimeId};

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List reservations whose time slot still exists, ordered by id
    List,
    /// Create a reservation for an existing time slot
    Create {
        #[arg(long)]
        name: String,
        /// Calendar date, YYYY-MM-DD
        #[arg(long)]
        date: NaiveDate,
        #[arg(long)]
        time_id: ReservationTimeId,
    },
    /// Delete a reservation by id
    Delete { id: ReservationId },
    /// Manage reservation time slots
    Times {
        #[command(subcommand)]
        command: TimeCommand,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum TimeCommand {
    /// List time slots, ordered by id
    List,
    /// Create a time slot
    Create {
        /// Start time, HH:MM or HH:MM:SS
        #[arg(long, value_parser = parse_start_at)]
        start_at: NaiveTime,
    },
    /// Delete a time slot by id
    Delete { id: ReservationTimeId },
}

fn parse_start_at(raw: &str) -> Result<NaiveTime, String> {
    parse_time(raw).ok_or_else(|| format!("{raw:?} is not an HH:MM[:SS] time"))
}

#[instrument(skip(pool), err)]
pub async fn run(command: &Command, pool: &SqlitePool) -> anyhow::Result<Value> {
    let mut conn = pool.acquire().await?;

    let output = match command {
        Command::List => {
            let reservations = Reservations::new(&mut conn).list().await?;
            let responses: Vec<ReservationResponse> = reservations.into_iter().map(Into::into).collect();
            serde_json::to_value(responses)?
        }
        Command::Create { name, date, time_id } => {
            let request = ReservationCreateDBRequest::from(ReservationCreate {
                name: name.clone(),
                date: *date,
                time_id: *time_id,
            });
            let reservation = Reservations::new(&mut conn).create(&request).await?;
            serde_json::to_value(ReservationResponse::from(reservation))?
        }
        Command::Delete { id } => {
            let deleted = Reservations::new(&mut conn).delete(*id).await?;
            if deleted == 0 {
                warn!(reservation_id = id, "No reservation with this id");
            }
            json!({ "deleted": deleted })
        }
        Command::Times { command } => run_times(command, &mut ReservationTimes::new(&mut conn)).await?,
    };

    Ok(output)
}

async fn run_times(command: &TimeCommand, repo: &mut ReservationTimes<'_>) -> anyhow::Result<Value> {
    let output = match command {
        TimeCommand::List => {
            let times: Vec<ReservationTimeResponse> = repo.list().await?.into_iter().map(Into::into).collect();
            serde_json::to_value(times)?
        }
        TimeCommand::Create { start_at } => {
            let time = repo.create(&ReservationTimeCreateDBRequest { start_at: *start_at }).await?;
            serde_json::to_value(ReservationTimeResponse::from(time))?
        }
        TimeCommand::Delete { id } => {
            let deleted = repo.delete(*id).await?;
            if deleted == 0 {
                warn!(reservation_time_id = id, "No time slot with this id");
            }
            json!({ "deleted": deleted })
        }
    };

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Args;
    use crate::db::errors::DbError;
    use crate::test::utils::create_test_time;
    use clap::Parser;

    fn parse(argv: &[&str]) -> Command {
        let mut full = vec!["roomescape"];
        full.extend_from_slice(argv);
        Args::try_parse_from(full).unwrap().command.unwrap()
    }

    #[test]
    fn test_parse_create() {
        match parse(&["create", "--name", "Alice", "--date", "2024-05-01", "--time-id", "1"]) {
            Command::Create { name, date, time_id } => {
                assert_eq!(name, "Alice");
                assert_eq!(date, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
                assert_eq!(time_id, 1);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_time_create_short_form() {
        match parse(&["times", "create", "--start-at", "10:00"]) {
            Command::Times {
                command: TimeCommand::Create { start_at },
            } => assert_eq!(start_at, NaiveTime::from_hms_opt(10, 0, 0).unwrap()),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_bad_date() {
        let result = Args::try_parse_from(["roomescape", "create", "--name", "A", "--date", "tomorrow", "--time-id", "1"]);
        assert!(result.is_err());
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_create_list_delete_flow(pool: SqlitePool) {
        let slot = create_test_time(&pool, "10:00").await;

        let created = run(
            &Command::Create {
                name: "Alice".to_string(),
                date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
                time_id: slot.id,
            },
            &pool,
        )
        .await
        .unwrap();
        let id = created["id"].as_i64().unwrap();
        assert_eq!(
            created,
            json!({"id": id, "name": "Alice", "date": "2024-05-01", "time": "10:00"})
        );

        let listed = run(&Command::List, &pool).await.unwrap();
        assert_eq!(listed, json!([created]));

        assert_eq!(run(&Command::Delete { id }, &pool).await.unwrap(), json!({"deleted": 1}));
        assert_eq!(run(&Command::Delete { id }, &pool).await.unwrap(), json!({"deleted": 0}));
        assert_eq!(run(&Command::List, &pool).await.unwrap(), json!([]));
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_times_flow(pool: SqlitePool) {
        let start_at = NaiveTime::from_hms_opt(13, 45, 0).unwrap();
        let created = run(
            &Command::Times {
                command: TimeCommand::Create { start_at },
            },
            &pool,
        )
        .await
        .unwrap();
        assert_eq!(created["startAt"], "13:45");
        let id = created["id"].as_i64().unwrap();

        let listed = run(&Command::Times { command: TimeCommand::List }, &pool).await.unwrap();
        assert_eq!(listed, json!([created]));

        let deleted = run(
            &Command::Times {
                command: TimeCommand::Delete { id },
            },
            &pool,
        )
        .await
        .unwrap();
        assert_eq!(deleted, json!({"deleted": 1}));
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_create_with_unknown_time_surfaces_not_found(pool: SqlitePool) {
        let err = run(
            &Command::Create {
                name: "Alice".to_string(),
                date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
                time_id: 999,
            },
            &pool,
        )
        .await
        .unwrap_err();

        assert!(matches!(err.downcast_ref::<DbError>(), Some(DbError::NotFound)));
    }
}
