//! Candle bucketing granularity.

use serde::{Deserialize, Serialize};

/// Chart timeframe selected by the user.
///
/// `Realtime` is the tick-level view: trades are bucketed into the smallest
/// supported interval (one second). All other timeframes are static — their
/// series come from a historical fetch and are never mutated by live ticks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timeframe {
    #[default]
    #[serde(rename = "tick")]
    Realtime,
    #[serde(rename = "1m")]
    Minute1,
    #[serde(rename = "5m")]
    Minute5,
    #[serde(rename = "15m")]
    Minute15,
    #[serde(rename = "30m")]
    Minute30,
    #[serde(rename = "1d")]
    Day,
    #[serde(rename = "1w")]
    Week,
    #[serde(rename = "1M")]
    Month,
    #[serde(rename = "1y")]
    Year,
}

impl Timeframe {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Realtime => "tick",
            Self::Minute1 => "1m",
            Self::Minute5 => "5m",
            Self::Minute15 => "15m",
            Self::Minute30 => "30m",
            Self::Day => "1d",
            Self::Week => "1w",
            Self::Month => "1M",
            Self::Year => "1y",
        }
    }

    /// Whether live ticks mutate this timeframe's series.
    pub fn is_realtime(&self) -> bool {
        matches!(self, Self::Realtime)
    }

    /// Width of one bucket in milliseconds.
    ///
    /// Month and year use fixed widths. Only the realtime timeframe ever
    /// buckets live ticks, so calendar alignment is the backend's concern.
    pub fn bucket_millis(&self) -> i64 {
        const MINUTE: i64 = 60_000;
        const DAY: i64 = 86_400_000;
        match self {
            Self::Realtime => 1_000,
            Self::Minute1 => MINUTE,
            Self::Minute5 => 5 * MINUTE,
            Self::Minute15 => 15 * MINUTE,
            Self::Minute30 => 30 * MINUTE,
            Self::Day => DAY,
            Self::Week => 7 * DAY,
            Self::Month => 30 * DAY,
            Self::Year => 365 * DAY,
        }
    }

    /// Floor an epoch-millis timestamp to this timeframe's bucket boundary.
    pub fn bucket_of(&self, time_ms: i64) -> i64 {
        let width = self.bucket_millis();
        time_ms.div_euclid(width) * width
    }
}

impl std::fmt::Display for Timeframe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeframe_serde() {
        let tf: Timeframe = serde_json::from_str("\"1m\"").unwrap();
        assert_eq!(tf, Timeframe::Minute1);
        assert_eq!(serde_json::to_string(&Timeframe::Realtime).unwrap(), "\"tick\"");
    }

    #[test]
    fn test_bucket_of_floors_to_boundary() {
        // 12:00:01.500 → 12:00:01.000 on the tick timeframe
        assert_eq!(Timeframe::Realtime.bucket_of(1_700_000_001_500), 1_700_000_001_000);
        // mid-minute → minute start
        assert_eq!(Timeframe::Minute1.bucket_of(1_700_000_059_999), 1_700_000_040_000);
    }

    #[test]
    fn test_bucket_of_is_idempotent() {
        let b = Timeframe::Minute5.bucket_of(1_700_000_123_456);
        assert_eq!(Timeframe::Minute5.bucket_of(b), b);
        assert_eq!(b % Timeframe::Minute5.bucket_millis(), 0);
    }

    #[test]
    fn test_only_realtime_is_live() {
        assert!(Timeframe::Realtime.is_realtime());
        assert!(!Timeframe::Day.is_realtime());
        assert!(!Timeframe::Minute1.is_realtime());
    }
}
