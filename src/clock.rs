use chrono::{DateTime, Local, TimeZone};
use gloo_timers::callback::Interval;

/// Source of the current time, carried in the zone the countdown is read in.
pub trait Clock {
    type Zone: TimeZone;

    fn now(&self) -> DateTime<Self::Zone>;
}

#[derive(Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    type Zone = Local;

    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Runs a callback on a fixed period until the returned handle is dropped.
pub trait Scheduler {
    type Handle;

    fn every(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> Self::Handle;
}

#[derive(Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = Interval;

    fn every(&self, period_ms: u32, mut callback: Box<dyn FnMut()>) -> Interval {
        Interval::new(period_ms, move || callback())
    }
}
