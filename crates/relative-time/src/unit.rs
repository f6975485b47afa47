//! Output units and their accepted tokens.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// Unit in which a difference is reported.
///
/// Every unit answers to three tokens (singular, plural, short). Tokens are
/// case-sensitive: `M` is months, `m` is minutes. Deserializes from any of
/// [`TimeUnit::TOKENS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "String")]
pub enum TimeUnit {
    Years,
    Months,
    Weeks,
    Days,
    Hours,
    Minutes,
    Seconds,
    Milliseconds,
}

impl TimeUnit {
    /// All units, coarsest first.
    pub const ALL: [TimeUnit; 8] = [
        TimeUnit::Years,
        TimeUnit::Months,
        TimeUnit::Weeks,
        TimeUnit::Days,
        TimeUnit::Hours,
        TimeUnit::Minutes,
        TimeUnit::Seconds,
        TimeUnit::Milliseconds,
    ];

    /// Every accepted token, grouped by unit.
    pub const TOKENS: [&'static str; 24] = [
        "year",
        "years",
        "y",
        "month",
        "months",
        "M",
        "week",
        "weeks",
        "w",
        "day",
        "days",
        "d",
        "hour",
        "hours",
        "h",
        "minute",
        "minutes",
        "m",
        "second",
        "seconds",
        "s",
        "millisecond",
        "milliseconds",
        "ms",
    ];

    /// The three tokens naming this unit: singular, plural, short.
    pub fn aliases(self) -> [&'static str; 3] {
        let i = self as usize * 3;
        [Self::TOKENS[i], Self::TOKENS[i + 1], Self::TOKENS[i + 2]]
    }

    /// Years and months follow the civil calendar; everything else is a fixed
    /// number of milliseconds.
    pub fn is_calendar(self) -> bool {
        matches!(self, TimeUnit::Years | TimeUnit::Months)
    }

    /// Length in milliseconds for the fixed-length units.
    pub fn millis(self) -> Option<i64> {
        match self {
            TimeUnit::Years | TimeUnit::Months => None,
            TimeUnit::Weeks => Some(7 * 86_400_000),
            TimeUnit::Days => Some(86_400_000),
            TimeUnit::Hours => Some(3_600_000),
            TimeUnit::Minutes => Some(60_000),
            TimeUnit::Seconds => Some(1_000),
            TimeUnit::Milliseconds => Some(1),
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.aliases()[1])
    }
}

/// Returned when a token is not one of [`TimeUnit::TOKENS`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown unit '{0}'")]
pub struct UnknownUnit(pub String);

impl FromStr for TimeUnit {
    type Err = UnknownUnit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::TOKENS
            .iter()
            .position(|token| *token == s)
            .map(|i| Self::ALL[i / 3])
            .ok_or_else(|| UnknownUnit(s.to_string()))
    }
}

impl TryFrom<String> for TimeUnit {
    type Error = UnknownUnit;

    fn try_from(token: String) -> Result<Self, Self::Error> {
        token.parse()
    }
}
