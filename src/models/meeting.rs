//! Meeting days and times.
//!
//! A meeting is a days code (`"MWF"`, `"TH"`, ...) plus a military-time
//! start/end pair. The days code `"A"` marks an arranged meeting with no
//! fixed time; its times are always zero.
//!
//! # Display Format
//!
//! | days | start | end | display |
//! |------|-------|-----|---------|
//! | `MW` | 1330 | 1445 | `MW 1:30PM-2:45PM` |
//! | `TH` | 0 | 1200 | `TH 12:00AM-12:00PM` |
//! | `A` | 0 | 0 | `Arranged` |

use serde::{Deserialize, Serialize};

use crate::validation::{
    validate_meeting_days, validate_meeting_times, ValidationError, ValidationResult, ARRANGED,
};

/// When an activity meets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "MeetingFields")]
pub struct Meeting {
    days: String,
    start_time: i32,
    end_time: i32,
}

#[derive(Deserialize)]
struct MeetingFields {
    days: String,
    #[serde(default)]
    start_time: i32,
    #[serde(default)]
    end_time: i32,
}

impl TryFrom<MeetingFields> for Meeting {
    type Error = ValidationError;

    fn try_from(f: MeetingFields) -> Result<Self, Self::Error> {
        Meeting::new(f.days, f.start_time, f.end_time)
    }
}

impl Meeting {
    /// Creates a validated meeting.
    ///
    /// The days code is checked first, then the times against it.
    pub fn new(
        days: impl Into<String>,
        start_time: i32,
        end_time: i32,
    ) -> Result<Self, ValidationError> {
        let days = days.into();
        validate_meeting_days(&days)?;
        validate_meeting_times(&days, start_time, end_time)?;
        Ok(Self {
            days,
            start_time,
            end_time,
        })
    }

    /// An arranged meeting (`"A"`, 0, 0).
    pub fn arranged() -> Self {
        Self {
            days: ARRANGED.to_string(),
            start_time: 0,
            end_time: 0,
        }
    }

    /// Meeting-days code.
    pub fn days(&self) -> &str {
        &self.days
    }

    /// Start time (military).
    pub fn start_time(&self) -> i32 {
        self.start_time
    }

    /// End time (military).
    pub fn end_time(&self) -> i32 {
        self.end_time
    }

    /// Whether the meeting time is arranged.
    pub fn is_arranged(&self) -> bool {
        self.days == ARRANGED
    }

    /// Replaces the days code, keeping the current times.
    ///
    /// Fails when the new code would pair `"A"` with nonzero times.
    pub fn set_days(&mut self, days: impl Into<String>) -> ValidationResult {
        let days = days.into();
        validate_meeting_days(&days)?;
        validate_meeting_times(&days, self.start_time, self.end_time)?;
        self.days = days;
        Ok(())
    }

    /// Replaces the start/end pair, validated against the current days code.
    pub fn set_times(&mut self, start_time: i32, end_time: i32) -> ValidationResult {
        validate_meeting_times(&self.days, start_time, end_time)?;
        self.start_time = start_time;
        self.end_time = end_time;
        Ok(())
    }

    /// Replaces days and times together.
    pub fn set(&mut self, days: impl Into<String>, start_time: i32, end_time: i32) -> ValidationResult {
        *self = Self::new(days, start_time, end_time)?;
        Ok(())
    }

    /// Human-readable meeting string, e.g. `"MW 1:30PM-2:45PM"` or `"Arranged"`.
    pub fn display_string(&self) -> String {
        if self.is_arranged() {
            return "Arranged".to_string();
        }
        format!(
            "{} {}-{}",
            self.days,
            twelve_hour(self.start_time),
            twelve_hour(self.end_time)
        )
    }
}

/// Converts military `HHMM` to `h:mmAM` / `h:mmPM`.
fn twelve_hour(time: i32) -> String {
    let hour = time / 100;
    let minute = time % 100;
    let (display_hour, suffix) = match hour {
        0 => (12, "AM"),
        1..=11 => (hour, "AM"),
        12 => (12, "PM"),
        _ => (hour - 12, "PM"),
    };
    format!("{display_hour}:{minute:02}{suffix}")
}
