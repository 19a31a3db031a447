//! Remaining-time calculation towards the yearly celebration date.

use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone};

use crate::clock::{Clock, Scheduler};

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CountdownBreakdown {
    pub days: u64,
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

impl CountdownBreakdown {
    pub const ZERO: Self = Self { days: 0, hours: 0, minutes: 0, seconds: 0 };

    /// Splits a millisecond difference into its parts, rounding down.
    /// Differences of zero or less collapse to `ZERO`.
    pub fn from_millis(diff_ms: i64) -> Self {
        if diff_ms <= 0 {
            return Self::ZERO;
        }
        Self {
            days: (diff_ms / MS_PER_DAY) as u64,
            hours: ((diff_ms / MS_PER_HOUR) % 24) as u8,
            minutes: ((diff_ms / MS_PER_MINUTE) % 60) as u8,
            seconds: ((diff_ms / MS_PER_SECOND) % 60) as u8,
        }
    }

    pub fn total_millis(&self) -> i64 {
        self.days as i64 * MS_PER_DAY
            + i64::from(self.hours) * MS_PER_HOUR
            + i64::from(self.minutes) * MS_PER_MINUTE
            + i64::from(self.seconds) * MS_PER_SECOND
    }

    /// Display cells in page order, each value padded to two digits.
    pub fn cells(&self) -> [(&'static str, String); 4] {
        [
            ("Days", format!("{:02}", self.days)),
            ("Hours", format!("{:02}", self.hours)),
            ("Min", format!("{:02}", self.minutes)),
            ("Sec", format!("{:02}", self.seconds)),
        ]
    }
}

/// A month/day pair that recurs every year at local midnight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnnualTarget {
    month: u32,
    day: u32,
}

impl AnnualTarget {
    pub fn new(month: u32, day: u32) -> Self {
        Self { month, day }
    }

    /// The target instant counted towards from `now`, as midnight in the
    /// zone `now` is expressed in.
    ///
    /// Moves to next year only while still inside the target month past the
    /// target day. Once the day itself has passed the countdown stays at zero
    /// until the calendar year turns.
    pub fn target_for<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Option<DateTime<Tz>> {
        let year = if now.month() == self.month && now.day() > self.day {
            now.year() + 1
        } else {
            now.year()
        };
        // Feb 29 only exists in leap years.
        let midnight = (year..=year + 8)
            .find_map(|y| NaiveDate::from_ymd_opt(y, self.month, self.day))
            .and_then(|date| date.and_hms_opt(0, 0, 0))?;

        let zone = now.timezone();
        // Midnight can be skipped by a DST jump.
        zone.from_local_datetime(&midnight)
            .earliest()
            .or_else(|| zone.from_local_datetime(&(midnight + Duration::hours(1))).earliest())
    }

    /// Time left until the target. Both ends are real instants, so an offset
    /// change in between is accounted for.
    pub fn remaining<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> CountdownBreakdown {
        match self.target_for(now) {
            Some(target) => CountdownBreakdown::from_millis((target - now.clone()).num_milliseconds()),
            None => CountdownBreakdown::ZERO,
        }
    }
}

pub struct CountdownTicker<C> {
    clock: C,
    target: AnnualTarget,
}

impl<C: Clock + 'static> CountdownTicker<C> {
    pub fn new(clock: C, target: AnnualTarget) -> Self {
        Self { clock, target }
    }

    pub fn current(&self) -> CountdownBreakdown {
        self.target.remaining(&self.clock.now())
    }

    /// Recomputes the breakdown every `period_ms` and hands it to `on_tick`.
    /// Ticking stops when the returned handle is dropped.
    pub fn start<S: Scheduler>(
        self,
        scheduler: &S,
        period_ms: u32,
        mut on_tick: impl FnMut(CountdownBreakdown) + 'static,
    ) -> S::Handle {
        scheduler.every(period_ms, Box::new(move || on_tick(self.current())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::testing::{ManualClock, ManualScheduler};
    use chrono::Utc;
    use chrono_tz::America::{New_York, Santiago};
    use proptest::prelude::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    fn birthday() -> AnnualTarget {
        AnnualTarget::new(1, 31)
    }

    #[test]
    fn one_of_each_unit_rounds_down() {
        let breakdown = CountdownBreakdown::from_millis(90_061_001);
        assert_eq!(
            breakdown,
            CountdownBreakdown { days: 1, hours: 1, minutes: 1, seconds: 1 }
        );
    }

    #[test]
    fn just_under_a_second_is_zero_seconds() {
        assert_eq!(CountdownBreakdown::from_millis(999), CountdownBreakdown::ZERO);
    }

    #[test]
    fn negative_difference_is_zero() {
        assert_eq!(CountdownBreakdown::from_millis(-5_000), CountdownBreakdown::ZERO);
    }

    #[test]
    fn exact_target_instant_is_zero() {
        assert_eq!(birthday().remaining(&at(2027, 1, 31, 0, 0, 0)), CountdownBreakdown::ZERO);
    }

    #[test]
    fn counts_towards_this_years_date() {
        let remaining = birthday().remaining(&at(2027, 1, 30, 22, 30, 15));
        assert_eq!(
            remaining,
            CountdownBreakdown { days: 0, hours: 1, minutes: 29, seconds: 45 }
        );
    }

    #[test]
    fn stays_at_zero_after_the_date_has_passed() {
        // No rollover to next year once January 31 is behind us.
        assert_eq!(birthday().remaining(&at(2026, 10, 19, 12, 0, 0)), CountdownBreakdown::ZERO);
        assert_eq!(birthday().remaining(&at(2027, 1, 31, 9, 0, 0)), CountdownBreakdown::ZERO);
    }

    #[test]
    fn rolls_over_when_past_the_day_inside_the_target_month() {
        let mid_june = AnnualTarget::new(6, 15);
        assert_eq!(mid_june.target_for(&at(2026, 6, 20, 0, 0, 0)), Some(at(2027, 6, 15, 0, 0, 0)));
        assert_eq!(mid_june.target_for(&at(2026, 6, 10, 0, 0, 0)), Some(at(2026, 6, 15, 0, 0, 0)));
    }

    #[test]
    fn leap_day_target_skips_to_a_leap_year() {
        let leap = AnnualTarget::new(2, 29);
        assert_eq!(leap.target_for(&at(2026, 1, 1, 0, 0, 0)), Some(at(2028, 2, 29, 0, 0, 0)));
    }

    #[test]
    fn cells_are_zero_padded() {
        let cells = CountdownBreakdown { days: 104, hours: 3, minutes: 0, seconds: 9 }.cells();
        assert_eq!(cells[0], ("Days", "104".to_string()));
        assert_eq!(cells[1], ("Hours", "03".to_string()));
        assert_eq!(cells[2], ("Min", "00".to_string()));
        assert_eq!(cells[3], ("Sec", "09".to_string()));
    }

    #[test]
    fn ticker_fires_once_per_period() {
        let clock = ManualClock::at(at(2027, 1, 30, 23, 59, 50));
        let scheduler = ManualScheduler::with_clock(clock.clone());
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = seen.clone();
        let _handle = CountdownTicker::new(clock, birthday())
            .start(&scheduler, 1000, move |b| sink.borrow_mut().push(b.seconds));

        scheduler.advance(3_500);
        assert_eq!(*seen.borrow(), vec![9, 8, 7]);
    }

    #[test]
    fn dropping_the_handle_stops_ticking() {
        let clock = ManualClock::at(at(2027, 1, 1, 0, 0, 0));
        let scheduler = ManualScheduler::with_clock(clock.clone());
        let ticks = Rc::new(RefCell::new(0));

        let counter = ticks.clone();
        let handle = CountdownTicker::new(clock, birthday())
            .start(&scheduler, 1000, move |_| *counter.borrow_mut() += 1);

        scheduler.advance(2_000);
        drop(handle);
        scheduler.advance(5_000);
        assert_eq!(*ticks.borrow(), 2);
    }

    #[test]
    fn ticker_reaches_zero_at_the_target() {
        let clock = ManualClock::at(at(2027, 1, 30, 23, 59, 58));
        let scheduler = ManualScheduler::with_clock(clock.clone());
        let last = Rc::new(RefCell::new(None));

        let sink = last.clone();
        let _handle = CountdownTicker::new(clock, birthday())
            .start(&scheduler, 1000, move |b| *sink.borrow_mut() = Some(b));

        scheduler.advance(2_000);
        assert_eq!(*last.borrow(), Some(CountdownBreakdown::ZERO));
    }

    #[test]
    fn spring_forward_shortens_the_countdown_by_an_hour() {
        // New York moves to daylight time on 2027-03-14.
        let now = New_York.with_ymd_and_hms(2027, 3, 1, 0, 0, 0).unwrap();
        let ides = AnnualTarget::new(3, 15);

        let target = ides.target_for(&now).unwrap();
        assert_eq!((target - now).num_milliseconds(), 1_206_000_000);
        assert_eq!(
            ides.remaining(&now),
            CountdownBreakdown { days: 13, hours: 23, minutes: 0, seconds: 0 }
        );
    }

    #[test]
    fn fall_back_lengthens_the_countdown_by_an_hour() {
        // New York returns to standard time on 2027-11-07.
        let now = New_York.with_ymd_and_hms(2027, 11, 1, 0, 0, 0).unwrap();
        assert_eq!(
            AnnualTarget::new(11, 15).remaining(&now),
            CountdownBreakdown { days: 14, hours: 1, minutes: 0, seconds: 0 }
        );
    }

    #[test]
    fn skipped_midnight_resolves_to_the_first_valid_hour() {
        // Santiago jumps from 00:00 straight to 01:00 on 2026-09-06.
        let now = Santiago.with_ymd_and_hms(2026, 9, 1, 12, 0, 0).unwrap();
        let target = AnnualTarget::new(9, 6).target_for(&now).unwrap();
        assert_eq!(target.naive_local(), at(2026, 9, 6, 1, 0, 0).naive_utc());
    }

    #[test]
    fn ticker_follows_real_time_across_a_dst_change() {
        let clock = ManualClock::at(New_York.with_ymd_and_hms(2027, 3, 14, 1, 59, 58).unwrap());
        let scheduler = ManualScheduler::with_clock(clock.clone());
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = seen.clone();
        let _handle = CountdownTicker::new(clock, AnnualTarget::new(3, 15))
            .start(&scheduler, 1000, move |b| sink.borrow_mut().push(b));

        // 01:59:59 EST is followed by 03:00:00 EDT; 21h remain either way.
        scheduler.advance(2_000);
        assert_eq!(
            *seen.borrow(),
            vec![
                CountdownBreakdown { days: 0, hours: 21, minutes: 0, seconds: 1 },
                CountdownBreakdown { days: 0, hours: 21, minutes: 0, seconds: 0 },
            ]
        );
    }

    proptest! {
        #[test]
        fn breakdown_tracks_the_true_difference(ms_before in 1i64..=(30 * MS_PER_DAY)) {
            let target = at(2027, 1, 31, 0, 0, 0);
            let now = target - Duration::milliseconds(ms_before);

            let breakdown = birthday().remaining(&now);
            let expected = (target - now).num_milliseconds();
            let rebuilt = breakdown.total_millis();

            prop_assert!(breakdown.hours < 24);
            prop_assert!(breakdown.minutes < 60);
            prop_assert!(breakdown.seconds < 60);
            prop_assert!(rebuilt <= expected);
            prop_assert!(expected - rebuilt < 1_000);
        }
    }
}
