//! Activity: anything that can sit on a schedule.
//!
//! [`Activity`] is the closed set of schedulable variants. Each variant
//! supplies its own fields and record format; the shared contract is
//! title, meeting, meeting string and the two display arrays.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Course, Event, Meeting};
use crate::validation::ValidationResult;

/// A schedulable activity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Activity {
    /// A catalog course.
    Course(Course),
    /// A user-defined event.
    Event(Event),
}

impl Activity {
    /// Title of either variant.
    pub fn title(&self) -> &str {
        match self {
            Self::Course(c) => c.title(),
            Self::Event(e) => e.title(),
        }
    }

    /// Meeting of either variant.
    pub fn meeting(&self) -> &Meeting {
        match self {
            Self::Course(c) => c.meeting(),
            Self::Event(e) => e.meeting(),
        }
    }

    /// Sets the title of either variant.
    pub fn set_title(&mut self, title: impl Into<String>) -> ValidationResult {
        match self {
            Self::Course(c) => c.set_title(title),
            Self::Event(e) => e.set_title(title),
        }
    }

    /// Sets the meeting days, keeping the current times.
    pub fn set_meeting_days(&mut self, days: impl Into<String>) -> ValidationResult {
        match self {
            Self::Course(c) => c.set_meeting_days(days),
            Self::Event(e) => e.set_meeting_days(days),
        }
    }

    /// Sets start and end time.
    pub fn set_meeting_time(&mut self, start_time: i32, end_time: i32) -> ValidationResult {
        match self {
            Self::Course(c) => c.set_course_time(start_time, end_time),
            Self::Event(e) => e.set_event_time(start_time, end_time),
        }
    }

    /// Sets days and times in one step.
    pub fn set_meeting(
        &mut self,
        days: impl Into<String>,
        start_time: i32,
        end_time: i32,
    ) -> ValidationResult {
        match self {
            Self::Course(c) => c.set_meeting(days, start_time, end_time),
            Self::Event(e) => e.set_meeting(days, start_time, end_time),
        }
    }

    /// Variant-specific meeting string.
    pub fn meeting_string(&self) -> String {
        match self {
            Self::Course(c) => c.meeting_string(),
            Self::Event(e) => e.meeting_string(),
        }
    }

    /// `[name, section, title, meeting]`; events leave name and section blank.
    pub fn short_display_array(&self) -> [String; 4] {
        match self {
            Self::Course(c) => c.short_display_array(),
            Self::Event(e) => e.short_display_array(),
        }
    }

    /// Seven-column row shared by both variants.
    pub fn long_display_array(&self) -> [String; 7] {
        match self {
            Self::Course(c) => c.long_display_array(),
            Self::Event(e) => e.long_display_array(),
        }
    }

    /// The course, if this is one.
    pub fn as_course(&self) -> Option<&Course> {
        match self {
            Self::Course(c) => Some(c),
            Self::Event(_) => None,
        }
    }

    /// The event, if this is one.
    pub fn as_event(&self) -> Option<&Event> {
        match self {
            Self::Event(e) => Some(e),
            Self::Course(_) => None,
        }
    }
}

impl From<Course> for Activity {
    fn from(course: Course) -> Self {
        Self::Course(course)
    }
}

impl From<Event> for Activity {
    fn from(event: Event) -> Self {
        Self::Event(event)
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Course(c) => fmt::Display::fmt(c, f),
            Self::Event(e) => fmt::Display::fmt(e, f),
        }
    }
}
