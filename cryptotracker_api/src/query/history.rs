use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use url::Url;

use super::Query;

/// Sampling interval for `/assets/{id}/history`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Interval {
    M1,
    M5,
    M15,
    M30,
    H1,
    H2,
    #[default]
    H6,
    H12,
    D1,
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Interval::M1 => "m1",
            Interval::M5 => "m5",
            Interval::M15 => "m15",
            Interval::M30 => "m30",
            Interval::H1 => "h1",
            Interval::H2 => "h2",
            Interval::H6 => "h6",
            Interval::H12 => "h12",
            Interval::D1 => "d1",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Interval {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "m1" => Ok(Interval::M1),
            "m5" => Ok(Interval::M5),
            "m15" => Ok(Interval::M15),
            "m30" => Ok(Interval::M30),
            "h1" => Ok(Interval::H1),
            "h2" => Ok(Interval::H2),
            "h6" => Ok(Interval::H6),
            "h12" => Ok(Interval::H12),
            "d1" => Ok(Interval::D1),
            _ => Err(format!(
                "unknown interval '{}', expected one of m1, m5, m15, m30, h1, h2, h6, h12, d1",
                s
            )),
        }
    }
}

/// Time window and resolution for a coin's price history.
#[derive(Clone, Copy, Debug)]
pub struct HistoryQuery {
    pub interval: Interval,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Query for HistoryQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("interval", &self.interval.to_string())
            .append_pair("start", &self.start.timestamp_millis().to_string())
            .append_pair("end", &self.end.timestamp_millis().to_string());
        url
    }
}

impl HistoryQuery {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            interval: Interval::default(),
            start,
            end,
        }
    }

    /// The window ending now and starting `days` days ago.
    ///
    /// Returns `None` when `days` is negative or reaches past the range
    /// `DateTime<Utc>` can represent.
    pub fn last_days(days: i64) -> Option<Self> {
        if days < 0 {
            return None;
        }
        let end = Utc::now();
        let start = end.checked_sub_signed(Duration::try_days(days)?)?;
        Some(Self::new(start, end))
    }

    pub fn with_interval(mut self, interval: Interval) -> Self {
        self.interval = interval;
        self
    }
}
