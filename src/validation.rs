//! Field validation for activities and courses.
//!
//! Every setter in [`crate::models`] runs one of these checks before it
//! assigns. A failed check returns a [`ValidationError`] and the entity keeps
//! its previous value.
//!
//! # Rules
//! - Title and instructor id: non-empty
//! - Name, title and instructor id: no record separators (`,` `\r` `\n`)
//! - Meeting days: only `M T W H F A`, and `A` (arranged) only on its own
//! - Meeting times: military `HHMM` in `[0, 2359]`, minutes in `[0, 59]`,
//!   start not after end, both zero when arranged
//! - Course name: 4 to 6 characters
//! - Section: exactly 3 ASCII digits
//! - Credits: `[1, 5]`
//! - Weekly repeat: `[1, 4]`

use thiserror::Error;

/// Meeting-days code for an arranged (no fixed time) meeting.
pub const ARRANGED: &str = "A";

/// Characters permitted in a meeting-days code.
pub const MEETING_DAY_CODES: [char; 6] = ['M', 'T', 'W', 'H', 'F', 'A'];

/// Latest valid military time.
pub const MAX_MILITARY_TIME: i32 = 2359;

/// A rejected field value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    /// Title is empty or contains a record separator.
    InvalidTitle,
    /// Meeting-days code contains an unknown letter or misuses `A`.
    InvalidMeetingDays,
    /// Start/end time out of range, inverted, or nonzero for an arranged meeting.
    InvalidMeetingTime,
    /// Course name length outside `[4, 6]` or contains a record separator.
    InvalidName,
    /// Section is not three digits.
    InvalidSection,
    /// Credit hours outside `[1, 5]`.
    InvalidCredits,
    /// Instructor id is empty or contains a record separator.
    InvalidInstructorId,
    /// Event repeat count outside `[1, 4]`.
    InvalidWeeklyRepeat,
}

impl ValidationErrorKind {
    fn default_message(self) -> &'static str {
        match self {
            Self::InvalidTitle => "Invalid title.",
            Self::InvalidMeetingDays => "Invalid meeting days.",
            Self::InvalidMeetingTime => "Invalid meeting times.",
            Self::InvalidName => "Invalid course name.",
            Self::InvalidSection => "Invalid section.",
            Self::InvalidCredits => "Invalid credits.",
            Self::InvalidInstructorId => "Invalid instructor id.",
            Self::InvalidWeeklyRepeat => "Invalid weekly repeat.",
        }
    }
}

impl ValidationError {
    /// Creates an error with a custom message.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl From<ValidationErrorKind> for ValidationError {
    fn from(kind: ValidationErrorKind) -> Self {
        Self::new(kind, kind.default_message())
    }
}

/// Characters that delimit fields and records in a record line.
pub const RECORD_SEPARATORS: [char; 3] = [',', '\r', '\n'];

/// Validation result.
pub type ValidationResult = Result<(), ValidationError>;

fn check(ok: bool, kind: ValidationErrorKind) -> ValidationResult {
    if ok {
        Ok(())
    } else {
        Err(kind.into())
    }
}

fn is_record_safe(field: &str) -> bool {
    !field.contains(RECORD_SEPARATORS)
}

/// Titles must be non-empty and free of record separators.
pub fn validate_title(title: &str) -> ValidationResult {
    check(
        !title.is_empty() && is_record_safe(title),
        ValidationErrorKind::InvalidTitle,
    )
}

/// Validates a meeting-days code on its own (no time check).
pub fn validate_meeting_days(days: &str) -> ValidationResult {
    let known = days.chars().all(|c| MEETING_DAY_CODES.contains(&c));
    let arranged_alone = !days.contains('A') || days == ARRANGED;
    check(
        !days.is_empty() && known && arranged_alone,
        ValidationErrorKind::InvalidMeetingDays,
    )
}

/// Whether `time` is a valid military `HHMM` value.
pub fn is_military_time(time: i32) -> bool {
    (0..=MAX_MILITARY_TIME).contains(&time) && time % 100 <= 59
}

/// Validates a start/end pair against the given meeting-days code.
pub fn validate_meeting_times(days: &str, start_time: i32, end_time: i32) -> ValidationResult {
    let in_range = is_military_time(start_time) && is_military_time(end_time);
    let ordered = start_time <= end_time;
    let arranged_ok = days != ARRANGED || (start_time == 0 && end_time == 0);
    check(
        in_range && ordered && arranged_ok,
        ValidationErrorKind::InvalidMeetingTime,
    )
}

/// Course names are 4 to 6 characters long.
pub fn validate_course_name(name: &str) -> ValidationResult {
    let len = name.chars().count();
    check(
        (4..=6).contains(&len) && is_record_safe(name),
        ValidationErrorKind::InvalidName,
    )
}

/// Sections are exactly three ASCII digits.
pub fn validate_section(section: &str) -> ValidationResult {
    check(
        section.len() == 3 && section.bytes().all(|b| b.is_ascii_digit()),
        ValidationErrorKind::InvalidSection,
    )
}

/// Credit hours lie in `[1, 5]`.
pub fn validate_credits(credits: i32) -> ValidationResult {
    check((1..=5).contains(&credits), ValidationErrorKind::InvalidCredits)
}

/// Instructor ids must be non-empty and free of record separators.
pub fn validate_instructor_id(instructor_id: &str) -> ValidationResult {
    check(
        !instructor_id.is_empty() && is_record_safe(instructor_id),
        ValidationErrorKind::InvalidInstructorId,
    )
}

/// Weekly repeat counts lie in `[1, 4]`.
pub fn validate_weekly_repeat(weekly_repeat: i32) -> ValidationResult {
    check(
        (1..=4).contains(&weekly_repeat),
        ValidationErrorKind::InvalidWeeklyRepeat,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind_of(result: ValidationResult) -> ValidationErrorKind {
        result.unwrap_err().kind
    }

    #[test]
    fn test_title() {
        assert!(validate_title("Programming Concepts - Java").is_ok());
        assert_eq!(kind_of(validate_title("")), ValidationErrorKind::InvalidTitle);
    }

    #[test]
    fn test_record_separators_rejected() {
        for bad in ["Java, Part 2", "Java\nPart 2", "Java\r"] {
            assert_eq!(kind_of(validate_title(bad)), ValidationErrorKind::InvalidTitle);
        }
        assert_eq!(kind_of(validate_course_name("CS,21")), ValidationErrorKind::InvalidName);
        assert_eq!(kind_of(validate_course_name("CSC\n1")), ValidationErrorKind::InvalidName);
        assert_eq!(
            kind_of(validate_instructor_id("se,smith")),
            ValidationErrorKind::InvalidInstructorId
        );
        assert!(validate_title("Java - Part 2").is_ok());
    }

    #[test]
    fn test_meeting_days_valid() {
        for days in ["M", "MW", "TH", "MTWHF", "F", "A", "WM"] {
            assert!(validate_meeting_days(days).is_ok(), "{days} should pass");
        }
    }

    #[test]
    fn test_meeting_days_invalid() {
        for days in ["", "S", "MWX", "mw", "AM", "MA", "AA", "M W"] {
            assert_eq!(
                kind_of(validate_meeting_days(days)),
                ValidationErrorKind::InvalidMeetingDays,
                "{days} should fail"
            );
        }
    }

    #[test]
    fn test_military_time_bounds() {
        assert!(is_military_time(0));
        assert!(is_military_time(59));
        assert!(is_military_time(1200));
        assert!(is_military_time(2359));
        assert!(!is_military_time(-1));
        assert!(!is_military_time(60));
        assert!(!is_military_time(1299));
        assert!(!is_military_time(2360));
        assert!(!is_military_time(2400));
    }

    #[test]
    fn test_meeting_times() {
        assert!(validate_meeting_times("MW", 1330, 1445).is_ok());
        assert!(validate_meeting_times("MW", 1330, 1330).is_ok());
        assert!(validate_meeting_times("A", 0, 0).is_ok());

        // Inverted
        assert!(validate_meeting_times("MW", 1445, 1330).is_err());
        // Bad minutes
        assert!(validate_meeting_times("MW", 1360, 1445).is_err());
        assert!(validate_meeting_times("MW", 1330, 1475).is_err());
        // Arranged with any nonzero time
        assert!(validate_meeting_times("A", 0, 1000).is_err());
        assert!(validate_meeting_times("A", 800, 1000).is_err());
    }

    #[test]
    fn test_course_name() {
        assert!(validate_course_name("CSC2").is_ok());
        assert!(validate_course_name("CSC216").is_ok());
        assert!(validate_course_name("CSC").is_err());
        assert!(validate_course_name("CSC2160").is_err());
    }

    #[test]
    fn test_section() {
        assert!(validate_section("001").is_ok());
        assert!(validate_section("01").is_err());
        assert!(validate_section("0011").is_err());
        assert!(validate_section("0A1").is_err());
    }

    #[test]
    fn test_numeric_ranges() {
        assert!(validate_credits(1).is_ok());
        assert!(validate_credits(5).is_ok());
        assert!(validate_credits(0).is_err());
        assert!(validate_credits(6).is_err());

        assert!(validate_weekly_repeat(1).is_ok());
        assert!(validate_weekly_repeat(4).is_ok());
        assert!(validate_weekly_repeat(0).is_err());
        assert!(validate_weekly_repeat(5).is_err());
    }

    #[test]
    fn test_error_message() {
        let err = validate_section("xyz").unwrap_err();
        assert_eq!(err.to_string(), "Invalid section.");
        assert_eq!(err, ValidationError::from(ValidationErrorKind::InvalidSection));
    }
}
