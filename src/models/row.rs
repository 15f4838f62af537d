use serde::Serialize;

/// One line of the timeline table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub location: String,
    /// Start time in minutes since midnight. Not clamped to a single day.
    pub time: i64,
    pub event: String,
    /// Minutes.
    pub duration: i64,
}

impl Row {
    pub fn new(time: i64, duration: i64) -> Self {
        Self {
            location: String::new(),
            time,
            event: String::new(),
            duration,
        }
    }

    /// Minute at which the next row starts.
    pub fn end(&self) -> i64 {
        self.time + self.duration
    }

    /// Blank row that follows this one directly.
    pub fn blank_after(&self, duration: i64) -> Self {
        Self::new(self.end(), duration)
    }
}
