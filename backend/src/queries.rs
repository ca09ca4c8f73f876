use sqlx::{PgPool, Postgres, Transaction};
use time::OffsetDateTime;

use shared::cooldown::eligible_cutoff;
use shared::models::{SubmissionRecord, VoteTally};
use shared::validation::option_numbers;

use crate::error::ApiError;

pub struct Queries;

impl Queries {
    // Idempotent seed of the five tally rows, run once at startup.
    pub async fn init_tallies(pool: &PgPool) -> Result<(), ApiError> {
        for option in option_numbers() {
            sqlx::query(
                "INSERT INTO vote_tallies (option_number, count) VALUES ($1, 0)
                 ON CONFLICT (option_number) DO NOTHING",
            )
            .bind(option)
            .execute(pool)
            .await?;
        }
        Ok(())
    }

    pub async fn fetch_tallies(pool: &PgPool) -> Result<Vec<VoteTally>, ApiError> {
        sqlx::query_as::<_, VoteTally>(
            "SELECT option_number AS \"option\", count FROM vote_tallies ORDER BY option_number",
        )
        .fetch_all(pool)
        .await
        .map_err(ApiError::from)
    }

    pub async fn get_submission(
        pool: &PgPool,
        address: &str,
    ) -> Result<Option<SubmissionRecord>, ApiError> {
        sqlx::query_as::<_, SubmissionRecord>(
            "SELECT address, last_submitted_at FROM submission_records WHERE address = $1",
        )
        .bind(address)
        .fetch_optional(pool)
        .await
        .map_err(ApiError::from)
    }

    // Conditional upsert: writes a row only when the address has no record
    // or its cooldown has elapsed. Of two concurrent claims for one
    // address, exactly one succeeds.
    pub async fn claim_submission(
        tx: &mut Transaction<'_, Postgres>,
        address: &str,
        now: OffsetDateTime,
    ) -> Result<bool, ApiError> {
        let result = sqlx::query(
            "INSERT INTO submission_records (address, last_submitted_at)
             VALUES ($1, $2)
             ON CONFLICT (address) DO UPDATE SET last_submitted_at = EXCLUDED.last_submitted_at
             WHERE submission_records.last_submitted_at <= $3",
        )
        .bind(address)
        .bind(now)
        .bind(eligible_cutoff(now))
        .execute(&mut **tx)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    // Atomic increment, creating the row if the startup seed was skipped.
    pub async fn increment_tally(
        tx: &mut Transaction<'_, Postgres>,
        option: i16,
    ) -> Result<VoteTally, ApiError> {
        sqlx::query_as::<_, VoteTally>(
            "INSERT INTO vote_tallies (option_number, count) VALUES ($1, 1)
             ON CONFLICT (option_number) DO UPDATE SET count = vote_tallies.count + 1
             RETURNING option_number AS \"option\", count",
        )
        .bind(option)
        .fetch_one(&mut **tx)
        .await
        .map_err(ApiError::from)
    }

    pub async fn reset_tallies(tx: &mut Transaction<'_, Postgres>) -> Result<(), ApiError> {
        sqlx::query("UPDATE vote_tallies SET count = 0")
            .execute(&mut **tx)
            .await?;
        Ok(())
    }

    pub async fn clear_submissions(tx: &mut Transaction<'_, Postgres>) -> Result<u64, ApiError> {
        let result = sqlx::query("DELETE FROM submission_records")
            .execute(&mut **tx)
            .await?;
        Ok(result.rows_affected())
    }
}
