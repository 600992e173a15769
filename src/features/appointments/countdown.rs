//! Countdown to the stored appointment
//!
//! "Now" is a naive local clock shifted by a fixed offset before it is
//! compared with the appointment, which is written in the users' timezone.

use chrono::{Duration, NaiveDateTime};

pub const DEFAULT_CLOCK_OFFSET_HOURS: i64 = 2;

const SECONDS_PER_DAY: i64 = 86_400;
const SECONDS_PER_HOUR: i64 = 3_600;
const SECONDS_PER_MINUTE: i64 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownResult {
    NoAppointment,
    /// The appointment is at or before the adjusted current time
    Elapsed,
    Remaining {
        days: i64,
        hours: i64,
        minutes: i64,
        seconds: i64,
    },
}

impl CountdownResult {
    /// Split a positive number of seconds into days/hours/minutes/seconds
    fn from_total_seconds(total: i64) -> Self {
        CountdownResult::Remaining {
            days: total / SECONDS_PER_DAY,
            hours: (total % SECONDS_PER_DAY) / SECONDS_PER_HOUR,
            minutes: (total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
            seconds: total % SECONDS_PER_MINUTE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownCalculator {
    offset: Duration,
}

impl Default for CountdownCalculator {
    fn default() -> Self {
        Self::with_offset_hours(DEFAULT_CLOCK_OFFSET_HOURS)
    }
}

impl CountdownCalculator {
    pub fn new(offset: Duration) -> Self {
        Self { offset }
    }

    pub fn with_offset_hours(hours: i64) -> Self {
        Self::new(Duration::hours(hours))
    }

    pub fn offset(&self) -> Duration {
        self.offset
    }

    pub fn remaining(&self, now: NaiveDateTime, appointment: Option<NaiveDateTime>) -> CountdownResult {
        let Some(appointment) = appointment else {
            return CountdownResult::NoAppointment;
        };

        let total = (appointment - (now + self.offset)).num_seconds();
        if total <= 0 {
            CountdownResult::Elapsed
        } else {
            CountdownResult::from_total_seconds(total)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 10)
            .unwrap()
            .and_hms_opt(12, 30, 15)
            .unwrap()
    }

    #[test]
    fn test_no_appointment() {
        let calc = CountdownCalculator::default();
        assert_eq!(calc.remaining(now(), None), CountdownResult::NoAppointment);
    }

    #[test]
    fn test_appointment_at_adjusted_now_is_elapsed() {
        let calc = CountdownCalculator::default();
        let appointment = now() + Duration::hours(2);
        assert_eq!(calc.remaining(now(), Some(appointment)), CountdownResult::Elapsed);
    }

    #[test]
    fn test_one_second_after_adjusted_now_is_remaining() {
        let calc = CountdownCalculator::default();
        let appointment = now() + Duration::hours(2) + Duration::seconds(1);
        assert_eq!(
            calc.remaining(now(), Some(appointment)),
            CountdownResult::Remaining {
                days: 0,
                hours: 0,
                minutes: 0,
                seconds: 1
            }
        );
    }

    #[test]
    fn test_offset_window_counts_as_elapsed() {
        // One hour ahead of the raw clock is still behind the adjusted clock
        let calc = CountdownCalculator::default();
        let appointment = now() + Duration::hours(1);
        assert_eq!(calc.remaining(now(), Some(appointment)), CountdownResult::Elapsed);

        let past = now() - Duration::days(3);
        assert_eq!(calc.remaining(now(), Some(past)), CountdownResult::Elapsed);
    }

    #[test]
    fn test_breakdown() {
        let calc = CountdownCalculator::default();
        let appointment = now()
            + Duration::hours(2)
            + Duration::days(2)
            + Duration::hours(3)
            + Duration::minutes(4)
            + Duration::seconds(5);

        assert_eq!(
            calc.remaining(now(), Some(appointment)),
            CountdownResult::Remaining {
                days: 2,
                hours: 3,
                minutes: 4,
                seconds: 5
            }
        );
    }

    #[test]
    fn test_custom_offset() {
        let calc = CountdownCalculator::with_offset_hours(0);
        assert_eq!(calc.offset(), Duration::zero());

        let appointment = now() + Duration::minutes(90);
        assert_eq!(
            calc.remaining(now(), Some(appointment)),
            CountdownResult::Remaining {
                days: 0,
                hours: 1,
                minutes: 30,
                seconds: 0
            }
        );
    }

    #[test]
    fn test_classification_around_boundary() {
        let calc = CountdownCalculator::default();
        let adjusted = now() + calc.offset();

        for delta in -600i64..=600 {
            let appointment = adjusted + Duration::seconds(delta);
            let result = calc.remaining(now(), Some(appointment));
            if delta <= 0 {
                assert_eq!(result, CountdownResult::Elapsed, "delta {delta}");
            } else {
                assert!(
                    matches!(result, CountdownResult::Remaining { .. }),
                    "delta {delta}"
                );
            }
        }
    }

    #[test]
    fn test_decomposition_identity_and_ranges() {
        let samples = (1..=200_000i64)
            .step_by(7)
            .chain([59, 60, 61, 3_599, 3_600, 86_399, 86_400, 86_401, 31_536_000 + 12_345]);

        for total in samples {
            match CountdownResult::from_total_seconds(total) {
                CountdownResult::Remaining {
                    days,
                    hours,
                    minutes,
                    seconds,
                } => {
                    assert_eq!(days * 86_400 + hours * 3_600 + minutes * 60 + seconds, total);
                    assert!(days >= 0);
                    assert!((0..24).contains(&hours));
                    assert!((0..60).contains(&minutes));
                    assert!((0..60).contains(&seconds));
                }
                other => panic!("unexpected {other:?} for {total}"),
            }
        }
    }
}
