use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::Add;
use std::str::FromStr;
use thiserror::Error;

const MINUTES_PER_DAY: u64 = 1440;

/// Minutes since the start of the operating day.
#[derive(Debug, Clone, Copy, Ord, Eq, PartialEq, PartialOrd, Hash)]
pub struct Time(pub u64);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimeParseError {
    #[error("invalid time format '{0}', expected HH:MM")]
    Format(String),
    #[error("time '{0}' is out of range")]
    OutOfRange(String),
}

impl Time {
    pub fn from_hm(hours: u64, minutes: u64) -> Time {
        Time(hours * 60 + minutes)
    }

    /// Parses a departure time-of-day; hours must stay within the operating day.
    pub fn parse_time_of_day(s: &str) -> Result<Time, TimeParseError> {
        let (hours, minutes) = split_hhmm(s)?;
        if hours >= 24 {
            return Err(TimeParseError::OutOfRange(s.to_string()));
        }
        Ok(Time::from_hm(hours, minutes))
    }

    /// Parses a duration written as `HH:MM`, returning minutes.
    pub fn parse_duration(s: &str) -> Result<u64, TimeParseError> {
        let (hours, minutes) = split_hhmm(s)?;
        Ok(hours * 60 + minutes)
    }
}

fn split_hhmm(s: &str) -> Result<(u64, u64), TimeParseError> {
    let bytes = s.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return Err(TimeParseError::Format(s.to_string()));
    }
    let digits = |part: &str| -> Result<u64, TimeParseError> {
        if !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TimeParseError::Format(s.to_string()));
        }
        part.parse::<u64>()
            .map_err(|_| TimeParseError::Format(s.to_string()))
    };
    let hours = digits(&s[0..2])?;
    let minutes = digits(&s[3..5])?;
    if minutes >= 60 {
        return Err(TimeParseError::OutOfRange(s.to_string()));
    }
    Ok((hours, minutes))
}

impl FromStr for Time {
    type Err = TimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Time::parse_time_of_day(s)
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let days = self.0 / MINUTES_PER_DAY;
        let remaining = self.0 % MINUTES_PER_DAY;
        write!(f, "{:02}:{:02}", remaining / 60, remaining % 60)?;
        // arrivals may spill past midnight
        if days > 0 {
            write!(f, "+{}", days)?;
        }
        Ok(())
    }
}

impl Serialize for Time {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl Add<u64> for Time {
    type Output = Self;

    fn add(self, rhs: u64) -> Self::Output {
        Time(self.0 + rhs)
    }
}
