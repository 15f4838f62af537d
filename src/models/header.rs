use super::period::Period;
use serde::Serialize;

/// Header fields shown above the timeline.
///
/// The start time is kept as the raw strings typed by the user; it is
/// printed as-is in the export and is not tied to the first row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    pub date: String,
    pub start_hour: String,
    pub start_minute: String,
    pub start_period: Period,
    pub bride: String,
    pub groom: String,
}

impl Default for Header {
    fn default() -> Self {
        Self {
            date: String::new(),
            start_hour: "9".to_string(),
            start_minute: "00".to_string(),
            start_period: Period::Am,
            bride: String::new(),
            groom: String::new(),
        }
    }
}

impl Header {
    pub fn start_time(&self) -> String {
        format!(
            "{}:{} {}",
            self.start_hour, self.start_minute, self.start_period
        )
    }
}
