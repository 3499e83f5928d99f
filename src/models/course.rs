//! Course model.
//!
//! A course is a catalog entry identified by `(name, section)`. It carries
//! a title, credit hours, an instructor and a [`Meeting`].
//!
//! # Record Format
//!
//! ```text
//! CSC216,Programming Concepts - Java,001,4,sesmith5,MW,1330,1445
//! CSC499,Independent Study,001,3,jdyoung2,A
//! ```
//!
//! Arranged courses omit the trailing time fields.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Meeting;
use crate::validation::{
    validate_course_name, validate_credits, validate_instructor_id, validate_section,
    validate_title, ValidationError, ValidationResult,
};

/// A course offering.
///
/// Equality and hashing cover every field, so two sections of the same
/// course are different values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CourseFields")]
pub struct Course {
    name: String,
    title: String,
    section: String,
    credits: i32,
    instructor_id: String,
    meeting: Meeting,
}

#[derive(Deserialize)]
struct CourseFields {
    name: String,
    title: String,
    section: String,
    credits: i32,
    instructor_id: String,
    meeting: Meeting,
}

impl TryFrom<CourseFields> for Course {
    type Error = ValidationError;

    fn try_from(f: CourseFields) -> Result<Self, Self::Error> {
        Course::new(f.name, f.title, f.section, f.credits, f.instructor_id, f.meeting)
    }
}

impl Course {
    /// Creates a validated course.
    ///
    /// # Example
    ///
    /// ```
    /// use wolf_scheduler::models::{Course, Meeting};
    ///
    /// let meeting = Meeting::new("MW", 1330, 1445).unwrap();
    /// let course = Course::new("CSC216", "Programming Concepts - Java", "001", 4, "sesmith5", meeting).unwrap();
    /// assert_eq!(course.meeting_string(), "MW 1:30PM-2:45PM");
    /// assert_eq!(course.to_string(), "CSC216,Programming Concepts - Java,001,4,sesmith5,MW,1330,1445");
    /// ```
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        section: impl Into<String>,
        credits: i32,
        instructor_id: impl Into<String>,
        meeting: Meeting,
    ) -> Result<Self, ValidationError> {
        let (name, title, section, instructor_id) =
            (name.into(), title.into(), section.into(), instructor_id.into());
        validate_course_name(&name)?;
        validate_title(&title)?;
        validate_section(&section)?;
        validate_credits(credits)?;
        validate_instructor_id(&instructor_id)?;
        Ok(Self {
            name,
            title,
            section,
            credits,
            instructor_id,
            meeting,
        })
    }

    /// Creates a course with an arranged meeting time.
    pub fn arranged(
        name: impl Into<String>,
        title: impl Into<String>,
        section: impl Into<String>,
        credits: i32,
        instructor_id: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::new(name, title, section, credits, instructor_id, Meeting::arranged())
    }

    /// Course name, e.g. `CSC216`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Course title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Three-digit section number.
    pub fn section(&self) -> &str {
        &self.section
    }

    /// Credit hours.
    pub fn credits(&self) -> i32 {
        self.credits
    }

    /// Instructor's unity id.
    pub fn instructor_id(&self) -> &str {
        &self.instructor_id
    }

    /// Meeting days and times.
    pub fn meeting(&self) -> &Meeting {
        &self.meeting
    }

    /// Whether this course is the catalog entry `(name, section)`.
    pub fn matches(&self, name: &str, section: &str) -> bool {
        self.name == name && self.section == section
    }

    /// Sets the title; rejects empty titles and record separators.
    pub fn set_title(&mut self, title: impl Into<String>) -> ValidationResult {
        let title = title.into();
        validate_title(&title)?;
        self.title = title;
        Ok(())
    }

    /// Sets the section; must be three digits.
    pub fn set_section(&mut self, section: impl Into<String>) -> ValidationResult {
        let section = section.into();
        validate_section(&section)?;
        self.section = section;
        Ok(())
    }

    /// Sets credit hours in `[1, 5]`.
    pub fn set_credits(&mut self, credits: i32) -> ValidationResult {
        validate_credits(credits)?;
        self.credits = credits;
        Ok(())
    }

    /// Sets the instructor id; rejects empty ids and record separators.
    pub fn set_instructor_id(&mut self, instructor_id: impl Into<String>) -> ValidationResult {
        let instructor_id = instructor_id.into();
        validate_instructor_id(&instructor_id)?;
        self.instructor_id = instructor_id;
        Ok(())
    }

    /// Sets the meeting days, keeping the current times.
    pub fn set_meeting_days(&mut self, days: impl Into<String>) -> ValidationResult {
        self.meeting.set_days(days)
    }

    /// Sets start and end time.
    pub fn set_course_time(&mut self, start_time: i32, end_time: i32) -> ValidationResult {
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

    /// Meeting as `"MW 1:30PM-2:45PM"`, or `"Arranged"`.
    pub fn meeting_string(&self) -> String {
        self.meeting.display_string()
    }

    /// `[name, section, title, meeting]`
    pub fn short_display_array(&self) -> [String; 4] {
        [
            self.name.clone(),
            self.section.clone(),
            self.title.clone(),
            self.meeting_string(),
        ]
    }

    /// `[name, section, title, credits, instructor, meeting, ""]`
    pub fn long_display_array(&self) -> [String; 7] {
        [
            self.name.clone(),
            self.section.clone(),
            self.title.clone(),
            self.credits.to_string(),
            self.instructor_id.clone(),
            self.meeting_string(),
            String::new(),
        ]
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{},{}",
            self.name,
            self.title,
            self.section,
            self.credits,
            self.instructor_id,
            self.meeting.days()
        )?;
        if !self.meeting.is_arranged() {
            write!(
                f,
                ",{},{}",
                self.meeting.start_time(),
                self.meeting.end_time()
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;
    use std::collections::HashSet;

    fn csc216() -> Course {
        Course::new(
            "CSC216",
            "Programming Concepts - Java",
            "001",
            4,
            "sesmith5",
            Meeting::new("MW", 1330, 1445).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_course_new() {
        let c = csc216();
        assert_eq!(c.name(), "CSC216");
        assert_eq!(c.title(), "Programming Concepts - Java");
        assert_eq!(c.section(), "001");
        assert_eq!(c.credits(), 4);
        assert_eq!(c.instructor_id(), "sesmith5");
        assert_eq!(c.meeting().days(), "MW");
        assert_eq!(c.meeting().start_time(), 1330);
        assert_eq!(c.meeting().end_time(), 1445);
        assert!(c.matches("CSC216", "001"));
        assert!(!c.matches("CSC216", "002"));
    }

    #[test]
    fn test_course_new_rejects_each_field() {
        let m = || Meeting::new("MW", 1330, 1445).unwrap();
        let cases = [
            (Course::new("CSC", "T", "001", 4, "id", m()), ValidationErrorKind::InvalidName),
            (Course::new("CSC2160", "T", "001", 4, "id", m()), ValidationErrorKind::InvalidName),
            (Course::new("CSC216", "", "001", 4, "id", m()), ValidationErrorKind::InvalidTitle),
            (Course::new("CSC216", "T", "1", 4, "id", m()), ValidationErrorKind::InvalidSection),
            (Course::new("CSC216", "T", "00a", 4, "id", m()), ValidationErrorKind::InvalidSection),
            (Course::new("CSC216", "T", "001", 0, "id", m()), ValidationErrorKind::InvalidCredits),
            (Course::new("CSC216", "T", "001", 6, "id", m()), ValidationErrorKind::InvalidCredits),
            (Course::new("CSC216", "T", "001", 4, "", m()), ValidationErrorKind::InvalidInstructorId),
        ];
        for (result, kind) in cases {
            assert_eq!(result.unwrap_err().kind, kind);
        }
    }

    #[test]
    fn test_setters_reject_and_retain() {
        let mut c = csc216();

        assert!(c.set_title("").is_err());
        assert!(c.set_section("1234").is_err());
        assert!(c.set_credits(9).is_err());
        assert!(c.set_instructor_id("").is_err());
        assert!(c.set_meeting_days("MWX").is_err());
        assert!(c.set_course_time(1445, 1330).is_err());
        assert_eq!(c, csc216());

        c.set_title("Java II").unwrap();
        c.set_section("002").unwrap();
        c.set_credits(3).unwrap();
        c.set_instructor_id("jdyoung2").unwrap();
        c.set_meeting_days("TH").unwrap();
        c.set_course_time(800, 915).unwrap();
        assert_eq!(
            c.to_string(),
            "CSC216,Java II,002,3,jdyoung2,TH,800,915"
        );
    }

    #[test]
    fn test_set_meeting_to_arranged() {
        let mut c = csc216();
        assert!(c.set_meeting_days("A").is_err());
        c.set_meeting("A", 0, 0).unwrap();
        assert_eq!(c.meeting_string(), "Arranged");
        assert_eq!(
            c.to_string(),
            "CSC216,Programming Concepts - Java,001,4,sesmith5,A"
        );
    }

    #[test]
    fn test_display_arrays() {
        let c = csc216();
        assert_eq!(
            c.short_display_array(),
            ["CSC216", "001", "Programming Concepts - Java", "MW 1:30PM-2:45PM"]
        );
        assert_eq!(
            c.long_display_array(),
            [
                "CSC216",
                "001",
                "Programming Concepts - Java",
                "4",
                "sesmith5",
                "MW 1:30PM-2:45PM",
                ""
            ]
        );
    }

    #[test]
    fn test_equality_covers_all_fields() {
        let a = csc216();
        let mut b = csc216();
        assert_eq!(a, b);

        b.set_credits(3).unwrap();
        assert_ne!(a, b);

        let mut set = HashSet::new();
        set.insert(a.clone());
        set.insert(csc216());
        assert_eq!(set.len(), 1);
        set.insert(b);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_serde_roundtrip_validates() {
        let c = csc216();
        let json = serde_json::to_string(&c).unwrap();
        let back: Course = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);

        let bad = json.replace("\"001\"", "\"01\"");
        let err = serde_json::from_str::<Course>(&bad).unwrap_err();
        assert!(err.to_string().contains("Invalid section."));
    }
}
