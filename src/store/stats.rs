//! Pure aggregation over fetched rows; no SQL here so the daily grouping
//! rules stay unit-testable.

use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::habit::PendingHabit;

/// Active habits minus those already answered today, preserving input order.
pub(crate) fn exclude_logged(
    active: Vec<PendingHabit>,
    logged_today: &[Uuid],
) -> Vec<PendingHabit> {
    let logged: HashSet<Uuid> = logged_today.iter().copied().collect();
    active
        .into_iter()
        .filter(|h| !logged.contains(&h.id))
        .collect()
}

/// Count of consecutive most-recent logged dates on which every entry was a
/// success. A date participates only if it has at least one entry, so a
/// calendar gap with no logs at all neither breaks nor extends the count.
pub(crate) fn streak(entries: &[(NaiveDate, bool)]) -> u32 {
    let mut per_day: BTreeMap<NaiveDate, (u32, u32)> = BTreeMap::new();
    for (date, status) in entries {
        let day = per_day.entry(*date).or_insert((0, 0));
        day.0 += 1;
        if *status {
            day.1 += 1;
        }
    }

    let mut streak = 0;
    for (total, successes) in per_day.values().rev() {
        if *total > 0 && total == successes {
            streak += 1;
        } else {
            break;
        }
    }

    streak
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn habit(id: Uuid, question: &str) -> PendingHabit {
        PendingHabit {
            id,
            question_text: question.into(),
        }
    }

    #[test]
    fn streak_counts_consecutive_all_success_days() {
        let entries = vec![
            (d("2026-08-04"), true),
            (d("2026-08-04"), true),
            (d("2026-08-05"), true),
            (d("2026-08-06"), true),
        ];
        assert_eq!(streak(&entries), 3);
    }

    #[test]
    fn streak_zero_when_most_recent_day_has_a_failure() {
        let entries = vec![
            (d("2026-08-04"), true),
            (d("2026-08-05"), true),
            (d("2026-08-06"), true),
            (d("2026-08-06"), false),
        ];
        assert_eq!(streak(&entries), 0);
    }

    #[test]
    fn streak_stops_at_first_non_full_success_day() {
        let entries = vec![
            (d("2026-08-02"), true),
            (d("2026-08-03"), false),
            (d("2026-08-04"), true),
            (d("2026-08-05"), true),
        ];
        assert_eq!(streak(&entries), 2);
    }

    #[test]
    fn streak_ignores_calendar_gaps_between_logged_dates() {
        // Nothing logged on 08-03 at all; the gap does not break the run.
        let entries = vec![
            (d("2026-08-01"), true),
            (d("2026-08-02"), true),
            (d("2026-08-04"), true),
        ];
        assert_eq!(streak(&entries), 3);
    }

    #[test]
    fn streak_is_zero_for_empty_log() {
        assert_eq!(streak(&[]), 0);
    }

    #[test]
    fn streak_handles_unordered_input() {
        let entries = vec![
            (d("2026-08-06"), true),
            (d("2026-08-04"), true),
            (d("2026-08-05"), false),
        ];
        assert_eq!(streak(&entries), 1);
    }

    #[test]
    fn exclude_logged_filters_answered_habits_and_preserves_order() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let c = Uuid::new_v4();
        let active = vec![
            habit(a, "Did you exercise?"),
            habit(b, "Did you read?"),
            habit(c, "Did you sleep by 11?"),
        ];

        let pending = exclude_logged(active, &[b]);
        assert_eq!(pending.len(), 2);
        assert_eq!(pending[0].id, a);
        assert_eq!(pending[1].id, c);
    }

    #[test]
    fn exclude_logged_keeps_everything_when_nothing_answered() {
        let active = vec![habit(Uuid::new_v4(), "Did you write?")];
        let pending = exclude_logged(active.clone(), &[]);
        assert_eq!(pending, active);
    }
}
