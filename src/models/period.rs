use crate::errors::AppError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Half of the 12-hour clock.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
pub enum Period {
    #[default]
    #[serde(rename = "AM")]
    Am,
    #[serde(rename = "PM")]
    Pm,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Am => "AM",
            Period::Pm => "PM",
        }
    }

    /// Minutes added on top of the 12-hour value.
    pub fn offset_minutes(&self) -> i64 {
        match self {
            Period::Am => 0,
            Period::Pm => 720,
        }
    }
}

impl FromStr for Period {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "AM" => Ok(Period::Am),
            "PM" => Ok(Period::Pm),
            _ => Err(AppError::InvalidPeriod(s.to_string())),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
