use chrono::{DateTime, Local, TimeZone};
use gloo_timers::callback::Interval;
use yew::prelude::*;

pub const TICK_MILLIS: u32 = 1000;

const MILLIS_PER_MINUTE: i64 = 60_000;
const MILLIS_PER_HOUR: i64 = 3_600_000;
const MILLIS_PER_DAY: i64 = 86_400_000;

/// Whole days, hours and minutes left until launch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
}

impl Countdown {
    /// Splits a remaining duration. Returns `None` once nothing is left.
    pub fn from_millis(remaining: i64) -> Option<Self> {
        if remaining <= 0 {
            return None;
        }
        Some(Self {
            days: remaining / MILLIS_PER_DAY,
            hours: (remaining / MILLIS_PER_HOUR) % 24,
            minutes: (remaining / MILLIS_PER_MINUTE) % 60,
        })
    }

    pub fn until<Tz: TimeZone>(target: &DateTime<Tz>, now: &DateTime<Tz>) -> Option<Self> {
        Self::from_millis(target.clone().signed_duration_since(now.clone()).num_milliseconds())
    }
}

/// Zero-pads a countdown field to two digits. Wider values are left intact.
pub fn pad(value: i64) -> String {
    format!("{:02}", value)
}

/// Source of wall-clock time and repeating timers.
pub trait Clock: Clone + 'static {
    /// Cancels its timer when dropped.
    type Interval;

    fn now(&self) -> DateTime<Local>;
    fn every(&self, millis: u32, tick: Box<dyn FnMut()>) -> Self::Interval;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    type Interval = Interval;

    fn now(&self) -> DateTime<Local> {
        Local::now()
    }

    fn every(&self, millis: u32, tick: Box<dyn FnMut()>) -> Interval {
        Interval::new(millis, tick)
    }
}

/// Feeds fresh readings to `on_tick` once a second for as long as it is alive.
///
/// Ticks at or past the target produce nothing, so the last reading stays on
/// screen.
pub struct CountdownTicker<C: Clock> {
    _interval: C::Interval,
}

impl<C: Clock> CountdownTicker<C> {
    pub fn start(clock: C, target: DateTime<Local>, mut on_tick: impl FnMut(Countdown) + 'static) -> Self {
        let reader = clock.clone();
        let interval = clock.every(
            TICK_MILLIS,
            Box::new(move || {
                if let Some(next) = Countdown::until(&target, &reader.now()) {
                    on_tick(next);
                }
            }),
        );
        Self { _interval: interval }
    }
}

/// Remaining time until `target`, recomputed every second.
///
/// The ticker is owned by the effect and dropped when the caller unmounts.
#[hook]
pub fn use_countdown(target: DateTime<Local>) -> Countdown {
    let countdown = use_state(|| Countdown::until(&target, &BrowserClock.now()).unwrap_or_default());

    {
        let countdown = countdown.clone();
        use_effect_with_deps(
            move |target: &DateTime<Local>| {
                let ticker = CountdownTicker::start(BrowserClock, *target, move |next| countdown.set(next));

                move || drop(ticker)
            },
            target,
        );
    }

    *countdown
}
