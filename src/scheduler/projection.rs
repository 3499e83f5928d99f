//! Tabular views of a course list.
//!
//! Views are plain rows of strings, one row per course, ready for a table
//! widget or console printer. An empty list yields an empty table.
//!
//! # Columns
//!
//! | View | Columns |
//! |------|---------|
//! | [`course_rows`] | name, section, title |
//! | [`full_course_rows`] | name, section, title, credits, instructor, meeting |

use std::rc::Rc;

use crate::models::Course;

/// `[name, section, title]`
pub type CourseRow = [String; 3];

/// `[name, section, title, credits, instructor, meeting]`
pub type FullCourseRow = [String; 6];

/// Summary rows for catalog or schedule listings.
pub fn course_rows(courses: &[Rc<Course>]) -> Vec<CourseRow> {
    courses
        .iter()
        .map(|c| {
            [
                c.name().to_string(),
                c.section().to_string(),
                c.title().to_string(),
            ]
        })
        .collect()
}

/// Detail rows including credits, instructor and meeting string.
pub fn full_course_rows(courses: &[Rc<Course>]) -> Vec<FullCourseRow> {
    courses
        .iter()
        .map(|c| {
            [
                c.name().to_string(),
                c.section().to_string(),
                c.title().to_string(),
                c.credits().to_string(),
                c.instructor_id().to_string(),
                c.meeting_string(),
            ]
        })
        .collect()
}
