use rocket::{State, get, post, http::Status, serde::json::Json};
use sqlx::PgPool;
use std::collections::BTreeMap;
use tracing::{error, info, instrument};

use shared::models::{ResetResponse, VoteRequest, VoteResponse, VoteTally};
use shared::submitter::Submitter;

use crate::error::ApiError;
use crate::processor::VoteProcessor;
use crate::queries::Queries;

pub struct AppState {
    pub db: PgPool,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        Self { db: pool }
    }
}

#[instrument(skip(state, request), fields(address = %submitter.address))]
#[post("/vote", format = "json", data = "<request>")]
pub async fn submit_vote(
    state: &State<AppState>,
    request: Json<VoteRequest>,
    submitter: Submitter,
) -> Result<Json<VoteResponse>, ApiError> {
    let tally = VoteProcessor::submit_vote(&state.db, &submitter.address, request.number).await?;

    info!("✓ Vote recorded for option {} (count {})", tally.option, tally.count);
    Ok(Json(VoteResponse {
        message: "Vote recorded!".into(),
        updated_vote: tally,
    }))
}

#[get("/results")]
pub async fn get_results(
    state: &State<AppState>,
) -> Result<Json<BTreeMap<i16, i64>>, ApiError> {
    let tallies = Queries::fetch_tallies(&state.db).await?;
    Ok(Json(VoteTally::board(&tallies)))
}

#[post("/reset")]
pub async fn reset_votes(
    state: &State<AppState>,
) -> Result<Json<ResetResponse>, (Status, Json<ResetResponse>)> {
    match VoteProcessor::reset_all(&state.db).await {
        Ok(removed) => {
            info!("🗑️ Reset complete, {} submission record(s) removed", removed);
            Ok(Json(ResetResponse::ok("All votes and IP records have been reset!")))
        }
        Err(e) => {
            error!("Reset failed: {}", e);
            Err((
                Status::InternalServerError,
                Json(ResetResponse::failed("Failed to reset votes")),
            ))
        }
    }
}

#[rocket::options("/<_..>")]
pub async fn all_options() -> Status {
    Status::Ok
}
