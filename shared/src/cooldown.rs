use time::{Duration, OffsetDateTime};

pub const COOLDOWN: Duration = Duration::hours(24);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Admitted,
    Cooling { wait_hours: i64 },
}

pub fn evaluate(previous: Option<OffsetDateTime>, now: OffsetDateTime) -> GateDecision {
    let Some(last) = previous else {
        return GateDecision::Admitted;
    };

    let elapsed = now - last;
    if elapsed >= COOLDOWN {
        GateDecision::Admitted
    } else {
        GateDecision::Cooling { wait_hours: wait_hours(elapsed) }
    }
}

// Timestamps at or before the cutoff are eligible to vote again.
pub fn eligible_cutoff(now: OffsetDateTime) -> OffsetDateTime {
    now - COOLDOWN
}

// Remaining wait rounded up to whole hours, clamped so a reported wait
// always lands in 1..=24 even if the stored timestamp sits in the future.
fn wait_hours(elapsed: Duration) -> i64 {
    let remaining = COOLDOWN - elapsed;
    let hours = (remaining.whole_seconds() + 3599).div_euclid(3600);
    hours.clamp(1, COOLDOWN.whole_hours())
}
