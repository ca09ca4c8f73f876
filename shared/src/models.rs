use serde::{Serialize, Deserialize};
use std::collections::BTreeMap;
use time::OffsetDateTime;

use crate::validation::option_numbers;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "backend", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct VoteTally {
    pub option: i16,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "backend", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    pub address: String,
    pub last_submitted_at: OffsetDateTime,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteRequest {
    pub number: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteResponse {
    pub message: String,
    pub updated_vote: VoteTally,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ResetResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: None,
            error: Some(error.into()),
        }
    }
}

impl VoteTally {
    // Every option is present in the board; options with no stored row
    // default to 0.
    pub fn board(tallies: &[VoteTally]) -> BTreeMap<i16, i64> {
        let mut board: BTreeMap<i16, i64> = option_numbers().map(|n| (n, 0)).collect();
        for tally in tallies {
            if let Some(count) = board.get_mut(&tally.option) {
                *count = tally.count;
            }
        }
        board
    }
}
