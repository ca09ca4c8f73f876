use time::{Duration, OffsetDateTime};

use crate::cooldown::{evaluate, eligible_cutoff, GateDecision, COOLDOWN};
use crate::models::{ResetResponse, SubmissionRecord, VoteResponse, VoteTally};
use crate::validation::{validate_option, ValidationError};

fn now() -> OffsetDateTime {
    OffsetDateTime::UNIX_EPOCH + Duration::days(20_000)
}

fn decide_after(elapsed: Duration) -> GateDecision {
    evaluate(Some(now() - elapsed), now())
}

fn tally(option: i16, count: i64) -> VoteTally {
    VoteTally { option, count }
}

#[test]
fn fresh_address_is_admitted() {
    assert_eq!(evaluate(None, now()), GateDecision::Admitted);
}

#[test]
fn admitted_once_cooldown_elapses() {
    assert_eq!(decide_after(COOLDOWN), GateDecision::Admitted);
    assert_eq!(decide_after(COOLDOWN + Duration::seconds(1)), GateDecision::Admitted);
    assert_eq!(decide_after(Duration::hours(25)), GateDecision::Admitted);
    assert_eq!(decide_after(Duration::days(30)), GateDecision::Admitted);
}

#[test]
fn immediate_resubmission_waits_the_full_day() {
    assert_eq!(decide_after(Duration::ZERO), GateDecision::Cooling { wait_hours: 24 });
    assert_eq!(decide_after(Duration::seconds(1)), GateDecision::Cooling { wait_hours: 24 });
}

#[test]
fn wait_is_rounded_up_to_whole_hours() {
    assert_eq!(decide_after(Duration::minutes(30)), GateDecision::Cooling { wait_hours: 24 });
    assert_eq!(decide_after(Duration::hours(1)), GateDecision::Cooling { wait_hours: 23 });
    assert_eq!(
        decide_after(Duration::hours(12) + Duration::minutes(30)),
        GateDecision::Cooling { wait_hours: 12 }
    );
    assert_eq!(
        decide_after(Duration::hours(23) + Duration::seconds(1)),
        GateDecision::Cooling { wait_hours: 1 }
    );
    assert_eq!(
        decide_after(COOLDOWN - Duration::seconds(1)),
        GateDecision::Cooling { wait_hours: 1 }
    );
}

#[test]
fn wait_stays_within_a_day() {
    for minutes in (0..24 * 60).step_by(7) {
        match decide_after(Duration::minutes(minutes)) {
            GateDecision::Cooling { wait_hours } => {
                assert!(
                    (1..=24).contains(&wait_hours),
                    "elapsed {minutes}m reported wait {wait_hours}h"
                );
            }
            GateDecision::Admitted => panic!("elapsed {minutes}m admitted inside the window"),
        }
    }
}

#[test]
fn future_timestamp_reports_the_maximum_wait() {
    assert_eq!(decide_after(Duration::hours(-3)), GateDecision::Cooling { wait_hours: 24 });
}

#[test]
fn cutoff_agrees_with_the_gate() {
    let cutoff = eligible_cutoff(now());
    assert_eq!(now() - cutoff, COOLDOWN);
    assert_eq!(evaluate(Some(cutoff), now()), GateDecision::Admitted);
    assert!(matches!(
        evaluate(Some(cutoff + Duration::seconds(1)), now()),
        GateDecision::Cooling { .. }
    ));
}

#[test]
fn option_range_is_enforced() {
    for number in 1..=5 {
        assert_eq!(validate_option(number), Ok(number as i16));
    }
    for number in [0, 6, -1, 42, i32::MIN, i32::MAX] {
        assert_eq!(validate_option(number), Err(ValidationError::InvalidOption(number)));
    }
}

#[test]
fn board_always_carries_all_five_options() {
    let board = VoteTally::board(&[]);
    assert_eq!(board.len(), 5);
    assert!(board.values().all(|&count| count == 0));

    let board = VoteTally::board(&[tally(3, 7), tally(5, 2)]);
    assert_eq!(board[&1], 0);
    assert_eq!(board[&2], 0);
    assert_eq!(board[&3], 7);
    assert_eq!(board[&4], 0);
    assert_eq!(board[&5], 2);
}

#[test]
fn board_ignores_rows_outside_the_option_range() {
    let board = VoteTally::board(&[tally(9, 99)]);
    assert_eq!(board.len(), 5);
    assert!(board.values().all(|&count| count == 0));
}

#[test]
fn vote_response_serializes_with_camel_case_keys() {
    let response = VoteResponse {
        message: "Vote recorded!".into(),
        updated_vote: tally(3, 1),
    };
    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["message"], "Vote recorded!");
    assert_eq!(json["updatedVote"]["option"], 3);
    assert_eq!(json["updatedVote"]["count"], 1);
}

#[test]
fn board_serializes_with_string_option_keys() {
    let json = serde_json::to_value(VoteTally::board(&[tally(2, 4)])).unwrap();
    let object = json.as_object().unwrap();
    assert_eq!(
        object.keys().collect::<Vec<_>>(),
        ["1", "2", "3", "4", "5"]
    );
    assert_eq!(json["2"], 4);
}

#[test]
fn reset_response_omits_absent_fields() {
    let json = serde_json::to_value(ResetResponse::ok("done")).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "done");
    assert!(json.get("error").is_none());

    let json = serde_json::to_value(ResetResponse::failed("broken")).unwrap();
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "broken");
    assert!(json.get("message").is_none());
}

#[test]
fn submission_record_uses_camel_case_timestamp_key() {
    let record = SubmissionRecord {
        address: "203.0.113.9".into(),
        last_submitted_at: now(),
    };
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["address"], "203.0.113.9");
    assert!(json.get("lastSubmittedAt").is_some());
}
