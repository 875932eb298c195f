//! Property tests for labeling and ordering of the upcoming-events digest.

use chrono::{DateTime, Utc};
use proptest::prelude::*;
use upcoming_events::{find_upcoming_events, RawEvent, UpcomingEvent};

const MINUTE_MS: i64 = 60_000;

/// Label expected for an event, computed directly from calendar-day distance.
fn expected_when(start: DateTime<Utc>, now: DateTime<Utc>, future_days: i64) -> Option<String> {
    let days_ahead = (start.date_naive() - now.date_naive()).num_days();
    match days_ahead {
        0 if start >= now => Some("today".to_string()),
        1 => Some("tomorrow".to_string()),
        d if d >= 2 && d <= future_days => Some(start.format("%d.%m.%Y").to_string()),
        _ => None,
    }
}

fn arb_case() -> impl Strategy<Value = (i64, i64, Vec<(i64, String)>)> {
    (
        1_500_000_000_000i64..1_700_000_000_000i64,
        0i64..60,
        prop::collection::vec((-3 * 1440i64..70 * 1440i64, "[a-zA-Z ]{1,12}"), 0..25),
    )
}

fn build(now_millis: i64, offsets: &[(i64, String)]) -> Vec<(RawEvent, DateTime<Utc>)> {
    let now_minute = now_millis.div_euclid(MINUTE_MS);
    offsets
        .iter()
        .map(|(offset, label)| {
            let start = DateTime::<Utc>::from_timestamp_millis((now_minute + offset) * MINUTE_MS)
                .unwrap();
            let raw = RawEvent::new(label.clone(), start.format("%Y-%m-%dT%H:%MZ").to_string());
            (raw, start)
        })
        .collect()
}

fn pairs(digest: &[UpcomingEvent]) -> Vec<(String, String)> {
    let mut pairs: Vec<_> = digest
        .iter()
        .map(|e| (e.what.clone(), e.when.to_string()))
        .collect();
    pairs.sort();
    pairs
}

proptest! {
    #[test]
    fn digest_contains_exactly_the_events_in_window((now_millis, future_days, offsets) in arb_case()) {
        let now = DateTime::<Utc>::from_timestamp_millis(now_millis).unwrap();
        let built = build(now_millis, &offsets);
        let events: Vec<RawEvent> = built.iter().map(|(raw, _)| raw.clone()).collect();

        let digest = find_upcoming_events(&events, now_millis, future_days).unwrap();

        let mut expected: Vec<(String, String)> = built
            .iter()
            .filter_map(|(raw, start)| {
                expected_when(*start, now, future_days).map(|when| (raw.label.clone(), when))
            })
            .collect();
        expected.sort();

        prop_assert_eq!(pairs(&digest), expected);
    }

    #[test]
    fn digest_is_ordered_by_day_then_label((now_millis, future_days, offsets) in arb_case()) {
        let built = build(now_millis, &offsets);
        let events: Vec<RawEvent> = built.iter().map(|(raw, _)| raw.clone()).collect();

        let digest = find_upcoming_events(&events, now_millis, future_days).unwrap();

        // Day rank recovered from the label: today < tomorrow < explicit dates.
        let rank = |e: &UpcomingEvent| -> (u8, String) {
            match e.when.to_string().as_str() {
                "today" => (0, String::new()),
                "tomorrow" => (1, String::new()),
                other => {
                    let date = chrono::NaiveDate::parse_from_str(other, "%d.%m.%Y").unwrap();
                    (2, date.format("%Y%m%d").to_string())
                }
            }
        };

        for pair in digest.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(rank(a) <= rank(b), "day order broken: {:?} before {:?}", a, b);
            if a.when == b.when {
                prop_assert!(
                    a.what.to_lowercase() <= b.what.to_lowercase(),
                    "label order broken: {:?} before {:?}", a, b
                );
            }
        }
    }

    #[test]
    fn longer_window_never_drops_events((now_millis, future_days, offsets) in arb_case()) {
        let built = build(now_millis, &offsets);
        let events: Vec<RawEvent> = built.iter().map(|(raw, _)| raw.clone()).collect();

        let shorter = find_upcoming_events(&events, now_millis, future_days).unwrap();
        let longer = find_upcoming_events(&events, now_millis, future_days + 1).unwrap();

        prop_assert!(longer.len() >= shorter.len());
        for entry in pairs(&shorter) {
            prop_assert!(pairs(&longer).contains(&entry));
        }
    }
}
