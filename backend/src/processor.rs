use sqlx::PgPool;
use time::OffsetDateTime;
use tracing::warn;

use shared::cooldown::{self, GateDecision, COOLDOWN};
use shared::models::VoteTally;
use shared::validation::validate_option;

use crate::error::ApiError;
use crate::queries::Queries;

pub struct VoteProcessor;

impl VoteProcessor {
    pub async fn submit_vote(
        pool: &PgPool,
        address: &str,
        number: i32,
    ) -> Result<VoteTally, ApiError> {
        let option = validate_option(number).map_err(|_| ApiError::InvalidOption(number))?;
        let now = OffsetDateTime::now_utc();

        // Advisory read for the user-facing wait; the claim below is the
        // authoritative check.
        let previous = Queries::get_submission(pool, address).await?;
        if let GateDecision::Cooling { wait_hours } =
            cooldown::evaluate(previous.map(|r| r.last_submitted_at), now)
        {
            warn!("Cooldown active for {}: {} hour(s) remaining", address, wait_hours);
            return Err(ApiError::CooldownActive(wait_hours));
        }

        let mut tx = pool.begin().await?;

        if !Queries::claim_submission(&mut tx, address, now).await? {
            // A concurrent submission from this address won the window
            // just now, so the remaining wait is the full cooldown.
            warn!("Lost the submission claim for {}", address);
            return Err(ApiError::CooldownActive(COOLDOWN.whole_hours()));
        }

        let tally = Queries::increment_tally(&mut tx, option).await?;
        tx.commit().await?;

        Ok(tally)
    }

    pub async fn reset_all(pool: &PgPool) -> Result<u64, ApiError> {
        let mut tx = pool.begin().await?;
        Queries::reset_tallies(&mut tx).await?;
        let removed = Queries::clear_submissions(&mut tx).await?;
        tx.commit().await?;
        Ok(removed)
    }
}
