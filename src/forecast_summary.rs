use std::collections::HashMap;
use std::fmt;
use std::fmt::Formatter;
use std::ops::RangeInclusive;
use chrono::{DateTime, Datelike, TimeZone, Timelike};
use log::debug;
use crate::models::forecast::{DailyAggregate, ForecastSample, HourlyEntry};
use crate::models::weather_condition::WeatherCondition;

/// Number of forecast slots shown in the hourly strip (8 x 3h = 24h)
pub const HOURLY_LEN: usize = 8;

/// Max number of days in the daily summary
pub const DAILY_LEN: usize = 5;

/// Local hours whose sample is preferred as the icon for the whole day
const MIDDAY_HOURS: RangeInclusive<u32> = 12..=15;

/// Result of summarizing a forecast
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ForecastSummary {
    pub hourly: Vec<HourlyEntry>,
    pub daily: Vec<DailyAggregate>,
}

/// Calendar key for grouping samples into days.
/// Only month and day are used, so samples a year apart share a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DateKey {
    pub month: u32,
    pub day: u32,
}

impl DateKey {
    pub fn from_date_time<Tz: TimeZone>(date_time: &DateTime<Tz>) -> DateKey {
        DateKey { month: date_time.month(), day: date_time.day() }
    }
}

/// Implementation of the Display Trait for pretty print
impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.month, self.day)
    }
}

/// Running values for one day, all un-rounded
#[derive(Clone, Debug)]
struct DayAccumulator {
    min: f64,
    max: f64,
    condition: WeatherCondition,
    max_pop: f64,
}

/// Ordered mapping from date key to day accumulator, keeping first-insertion order
#[derive(Default)]
pub struct DailyBuckets {
    days: Vec<(DateKey, DayAccumulator)>,
    index: HashMap<DateKey, usize>,
}

impl DailyBuckets {
    pub fn new() -> DailyBuckets {
        DailyBuckets::default()
    }

    /// Adds a sample to the bucket of the given key, creating the bucket if this is
    /// the first sample seen for that day.
    ///
    /// For an existing bucket the condition is only replaced when the sample falls in the
    /// midday hours, so the last midday sample wins.
    ///
    /// # Arguments
    ///
    /// * 'key' - the local calendar key of the sample
    /// * 'local_hour' - the local hour of the sample
    /// * 'sample' - the forecast sample
    pub fn add(&mut self, key: DateKey, local_hour: u32, sample: &ForecastSample) {
        let condition = WeatherCondition::from_code(&sample.condition_code);
        let pop = sample.pop * 100.0;

        match self.index.get(&key) {
            None => {
                self.index.insert(key, self.days.len());
                self.days.push((key, DayAccumulator {
                    min: sample.temperature,
                    max: sample.temperature,
                    condition,
                    max_pop: pop,
                }));
            }
            Some(&i) => {
                let day = &mut self.days[i].1;
                day.min = day.min.min(sample.temperature);
                day.max = day.max.max(sample.temperature);
                day.max_pop = day.max_pop.max(pop);
                if MIDDAY_HOURS.contains(&local_hour) {
                    day.condition = condition;
                }
            }
        }
    }

    /// Keys in the order they were first seen
    pub fn keys(&self) -> Vec<DateKey> {
        self.days.iter().map(|(k, _)| *k).collect()
    }

    /// Rounds and emits the first `limit` buckets in discovery order
    ///
    /// # Arguments
    ///
    /// * 'limit' - max number of days to emit
    pub fn into_aggregates(self, limit: usize) -> Vec<DailyAggregate> {
        self.days
            .into_iter()
            .take(limit)
            .map(|(key, day)| DailyAggregate {
                date_label: key.to_string(),
                min: round_half_up(day.min),
                max: round_half_up(day.max),
                condition: day.condition,
                pop: to_percent(day.max_pop),
            })
            .collect()
    }
}

/// Summarizes raw forecast samples into an hourly strip and a daily roll-up.
///
/// Samples are expected in chronological order. Days are emitted in the order they are first
/// seen and truncated to the first five, so out of order input gives out of order days.
/// All local time values are derived from each sample's own timestamp in the given time zone.
///
/// # Arguments
///
/// * 'samples' - forecast samples in chronological order
/// * 'tz' - time zone used for hour labels and day grouping
pub fn summarize<Tz: TimeZone>(samples: &[ForecastSample], tz: &Tz) -> ForecastSummary {
    let hourly = samples
        .iter()
        .take(HOURLY_LEN)
        .map(|s| HourlyEntry {
            timestamp: s.timestamp,
            temperature: round_half_up(s.temperature),
            condition: WeatherCondition::from_code(&s.condition_code),
            hour_label: local_time(s.timestamp, tz)
                .map_or(String::new(), |t| format!("{}h", t.hour())),
            pop: to_percent(s.pop * 100.0),
        })
        .collect::<Vec<HourlyEntry>>();

    let mut buckets = DailyBuckets::new();
    for sample in samples {
        match local_time(sample.timestamp, tz) {
            Some(t) => buckets.add(DateKey::from_date_time(&t), t.hour(), sample),
            None => debug!("skipping forecast sample with timestamp out of range: {}", sample.timestamp),
        }
    }

    debug!("forecast covers days {:?}", buckets.keys());

    ForecastSummary { hourly, daily: buckets.into_aggregates(DAILY_LEN) }
}

/// Rounds to nearest integer with halves going up, i.e. -2.5 becomes -2
///
/// # Arguments
///
/// * 'value' - value to round
pub fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

/// Rounds a percentage and clamps it to 0..=100
fn to_percent(value: f64) -> u8 {
    round_half_up(value).clamp(0, 100) as u8
}

fn local_time<Tz: TimeZone>(timestamp: i64, tz: &Tz) -> Option<DateTime<Tz>> {
    DateTime::from_timestamp(timestamp, 0).map(|t| t.with_timezone(tz))
}
