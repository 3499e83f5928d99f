//! Event model.
//!
//! An event is a non-course activity (office hours, a study group) that
//! repeats every one to four weeks.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

use super::Meeting;
use crate::validation::{validate_title, validate_weekly_repeat, ValidationError, ValidationResult};

/// A recurring event.
///
/// Two events are equal when title and meeting match; repeat count and
/// details are not compared.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "EventFields")]
pub struct Event {
    title: String,
    meeting: Meeting,
    weekly_repeat: i32,
    event_details: String,
}

#[derive(Deserialize)]
struct EventFields {
    title: String,
    meeting: Meeting,
    weekly_repeat: i32,
    #[serde(default)]
    event_details: String,
}

impl TryFrom<EventFields> for Event {
    type Error = ValidationError;

    fn try_from(f: EventFields) -> Result<Self, Self::Error> {
        Event::new(f.title, f.meeting, f.weekly_repeat, f.event_details)
    }
}

impl Event {
    /// Creates a validated event.
    pub fn new(
        title: impl Into<String>,
        meeting: Meeting,
        weekly_repeat: i32,
        event_details: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        validate_title(&title)?;
        validate_weekly_repeat(weekly_repeat)?;
        Ok(Self {
            title,
            meeting,
            weekly_repeat,
            event_details: event_details.into(),
        })
    }

    /// Event title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Meeting days and times.
    pub fn meeting(&self) -> &Meeting {
        &self.meeting
    }

    /// Number of weeks between occurrences.
    pub fn weekly_repeat(&self) -> i32 {
        self.weekly_repeat
    }

    /// Free-form details, possibly empty.
    pub fn event_details(&self) -> &str {
        &self.event_details
    }

    /// Sets the title; rejects empty titles and record separators.
    pub fn set_title(&mut self, title: impl Into<String>) -> ValidationResult {
        let title = title.into();
        validate_title(&title)?;
        self.title = title;
        Ok(())
    }

    /// Sets the meeting days, keeping the current times.
    pub fn set_meeting_days(&mut self, days: impl Into<String>) -> ValidationResult {
        self.meeting.set_days(days)
    }

    /// Sets start and end time.
    pub fn set_event_time(&mut self, start_time: i32, end_time: i32) -> ValidationResult {
        self.meeting.set_times(start_time, end_time)
    }

    /// Sets days and times in one step.
    pub fn set_meeting(
        &mut self,
        days: impl Into<String>,
        start_time: i32,
        end_time: i32,
    ) -> ValidationResult {
        self.meeting.set(days, start_time, end_time)
    }

    /// Sets the repeat interval in `[1, 4]` weeks.
    pub fn set_weekly_repeat(&mut self, weekly_repeat: i32) -> ValidationResult {
        validate_weekly_repeat(weekly_repeat)?;
        self.weekly_repeat = weekly_repeat;
        Ok(())
    }

    /// Details may be empty.
    pub fn set_event_details(&mut self, event_details: impl Into<String>) {
        self.event_details = event_details.into();
    }

    /// Meeting string with the repeat interval appended,
    /// e.g. `"TH 1:00PM-2:00PM (every 2 weeks)"`.
    pub fn meeting_string(&self) -> String {
        format!(
            "{} (every {} weeks)",
            self.meeting.display_string(),
            self.weekly_repeat
        )
    }

    /// `["", "", title, meeting]`
    pub fn short_display_array(&self) -> [String; 4] {
        [
            String::new(),
            String::new(),
            self.title.clone(),
            self.meeting_string(),
        ]
    }

    /// `["", "", title, "", "", meeting, details]`
    pub fn long_display_array(&self) -> [String; 7] {
        [
            String::new(),
            String::new(),
            self.title.clone(),
            String::new(),
            String::new(),
            self.meeting_string(),
            self.event_details.clone(),
        ]
    }
}

impl PartialEq for Event {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title && self.meeting == other.meeting
    }
}

impl Eq for Event {}

impl Hash for Event {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.title.hash(state);
        self.meeting.hash(state);
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{},{}",
            self.title,
            self.meeting.days(),
            self.meeting.start_time(),
            self.meeting.end_time(),
            self.weekly_repeat,
            self.event_details
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    fn study_group() -> Event {
        Event::new(
            "Study Group",
            Meeting::new("TH", 1300, 1400).unwrap(),
            2,
            "Library 2nd floor",
        )
        .unwrap()
    }

    #[test]
    fn test_event_new() {
        let e = study_group();
        assert_eq!(e.title(), "Study Group");
        assert_eq!(e.weekly_repeat(), 2);
        assert_eq!(e.event_details(), "Library 2nd floor");

        assert_eq!(
            Event::new("", Meeting::arranged(), 1, "").unwrap_err().kind,
            ValidationErrorKind::InvalidTitle
        );
        assert_eq!(
            Event::new("Gym", Meeting::arranged(), 5, "").unwrap_err().kind,
            ValidationErrorKind::InvalidWeeklyRepeat
        );
    }

    #[test]
    fn test_meeting_string_appends_repeat() {
        assert_eq!(
            study_group().meeting_string(),
            "TH 1:00PM-2:00PM (every 2 weeks)"
        );

        let arranged = Event::new("Reading", Meeting::arranged(), 1, "").unwrap();
        assert_eq!(arranged.meeting_string(), "Arranged (every 1 weeks)");
    }

    #[test]
    fn test_display_arrays() {
        let e = study_group();
        assert_eq!(
            e.short_display_array(),
            ["", "", "Study Group", "TH 1:00PM-2:00PM (every 2 weeks)"]
        );
        assert_eq!(
            e.long_display_array(),
            [
                "",
                "",
                "Study Group",
                "",
                "",
                "TH 1:00PM-2:00PM (every 2 weeks)",
                "Library 2nd floor"
            ]
        );
    }

    #[test]
    fn test_record_line_keeps_times_when_arranged() {
        assert_eq!(
            study_group().to_string(),
            "Study Group,TH,1300,1400,2,Library 2nd floor"
        );

        let arranged = Event::new("Reading", Meeting::arranged(), 1, "").unwrap();
        assert_eq!(arranged.to_string(), "Reading,A,0,0,1,");
    }

    #[test]
    fn test_setters_reject_and_retain() {
        let mut e = study_group();
        assert!(e.set_weekly_repeat(0).is_err());
        assert!(e.set_event_time(1400, 1300).is_err());
        assert!(e.set_title("").is_err());
        assert_eq!(e.weekly_repeat(), 2);
        assert_eq!(e.meeting().start_time(), 1300);

        e.set_weekly_repeat(4).unwrap();
        e.set_event_details("");
        assert_eq!(e.to_string(), "Study Group,TH,1300,1400,4,");
    }

    #[test]
    fn test_equality_ignores_repeat_and_details() {
        let a = study_group();
        let mut b = study_group();
        b.set_weekly_repeat(3).unwrap();
        b.set_event_details("Moved");
        assert_eq!(a, b);

        b.set_title("Other").unwrap();
        assert_ne!(a, b);
    }
}
