//! Course record reader.

use std::io::BufRead;
use tracing::warn;

use super::{RecordError, RecordPolicy};
use crate::models::{Course, Meeting};
use crate::validation::ARRANGED;

const ARRANGED_FIELDS: usize = 6;
const TIMED_FIELDS: usize = 8;

/// Parses one course record.
///
/// ```text
/// name,title,section,credits,instructorId,meetingDays[,startTime,endTime]
/// ```
///
/// Timed records have exactly 8 fields; arranged (`A`) records have exactly
/// 6 and are read with both times zero. `line` is only used for error
/// reporting.
pub fn parse_course_record(text: &str, line: usize) -> Result<Course, RecordError> {
    let fields: Vec<&str> = text.split(',').collect();
    if fields.len() < ARRANGED_FIELDS {
        return Err(malformed(
            line,
            format!("expected at least {ARRANGED_FIELDS} fields, found {}", fields.len()),
        ));
    }

    let credits = parse_int(fields[3], "credits", line)?;
    let days = fields[5];
    let arranged = days == ARRANGED;

    let meeting = match (arranged, fields.len()) {
        (true, ARRANGED_FIELDS) => Meeting::new(days, 0, 0),
        (false, TIMED_FIELDS) => {
            let start = parse_int(fields[6], "start time", line)?;
            let end = parse_int(fields[7], "end time", line)?;
            Meeting::new(days, start, end)
        }
        (true, n) => {
            return Err(malformed(
                line,
                format!("arranged course takes {ARRANGED_FIELDS} fields, found {n}"),
            ))
        }
        (false, n) => {
            return Err(malformed(
                line,
                format!("timed course takes {TIMED_FIELDS} fields, found {n}"),
            ))
        }
    }
    .map_err(|source| RecordError::InvalidCourse { line, source })?;

    Course::new(fields[0], fields[1], fields[2], credits, fields[4], meeting)
        .map_err(|source| RecordError::InvalidCourse { line, source })
}

/// Reads every course record from `reader`.
///
/// Blank lines are ignored. A record repeating an earlier `(name, section)`
/// is dropped with a warning. Bad records either abort the read or are
/// skipped, depending on `policy`.
pub fn read_course_records<R: BufRead>(
    reader: R,
    policy: RecordPolicy,
) -> Result<Vec<Course>, RecordError> {
    let mut courses: Vec<Course> = Vec::new();

    for (idx, text) in reader.lines().enumerate() {
        let text = text?;
        let line = idx + 1;
        let record = text.strip_suffix('\r').unwrap_or(&text);
        if record.trim().is_empty() {
            continue;
        }

        match parse_course_record(record, line) {
            Ok(course) => {
                if courses
                    .iter()
                    .any(|c| c.matches(course.name(), course.section()))
                {
                    warn!(
                        line,
                        name = course.name(),
                        section = course.section(),
                        "skipping duplicate course record"
                    );
                    continue;
                }
                courses.push(course);
            }
            Err(err) if policy == RecordPolicy::SkipInvalid => {
                warn!(line, error = %err, "skipping invalid course record");
            }
            Err(err) => return Err(err),
        }
    }

    Ok(courses)
}

fn parse_int(field: &str, what: &str, line: usize) -> Result<i32, RecordError> {
    field
        .parse()
        .map_err(|_| malformed(line, format!("{what} is not an integer: {field:?}")))
}

fn malformed(line: usize, reason: String) -> RecordError {
    RecordError::Malformed { line, reason }
}
