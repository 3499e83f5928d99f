//! Catalog and schedule manager.
//!
//! # Invariants
//!
//! 1. The catalog is fixed once the scheduler is built.
//! 2. Only courses found in the catalog can be scheduled; the schedule holds
//!    the catalog's own `Rc` instance.
//! 3. At most one scheduled course per course name, whatever the section.
//!
//! Time overlaps between scheduled courses are not checked.

use std::fmt;
use std::path::Path;
use std::rc::Rc;

use tracing::{debug, info};

use super::projection::{course_rows, full_course_rows, CourseRow, FullCourseRow};
use crate::config::SchedulerConfig;
use crate::io::{CatalogSource, FileCatalog, FileRecordSink, RecordSink};
use crate::models::Course;
use crate::{Result, SchedulerError};

/// A course catalog plus the user's schedule drawn from it.
///
/// # Example
///
/// ```
/// use wolf_scheduler::models::{Course, Meeting};
/// use wolf_scheduler::scheduler::WolfScheduler;
///
/// let catalog = vec![
///     Course::new("CSC216", "Programming Concepts - Java", "001", 4, "sesmith5",
///         Meeting::new("MW", 1330, 1445).unwrap()).unwrap(),
///     Course::new("CSC216", "Programming Concepts - Java", "002", 4, "jdyoung2",
///         Meeting::new("TH", 1330, 1445).unwrap()).unwrap(),
/// ];
/// let mut scheduler = WolfScheduler::from_catalog(catalog);
///
/// assert!(scheduler.add_course("CSC216", "001").unwrap());
/// assert!(scheduler.add_course("CSC216", "002").unwrap_err().is_already_enrolled());
/// assert!(!scheduler.add_course("CSC116", "001").unwrap());
/// assert_eq!(scheduler.scheduled_courses().len(), 1);
/// ```
pub struct WolfScheduler {
    catalog: Vec<Rc<Course>>,
    schedule: Vec<Rc<Course>>,
    title: String,
    sink: Box<dyn RecordSink>,
}

impl WolfScheduler {
    /// Builds a scheduler from a course-record file with default settings.
    pub fn new(catalog_path: impl AsRef<Path>) -> Result<Self> {
        Self::with_config(catalog_path, &SchedulerConfig::default())
    }

    /// Builds a scheduler from a course-record file.
    pub fn with_config(catalog_path: impl AsRef<Path>, config: &SchedulerConfig) -> Result<Self> {
        Self::load(
            &FileCatalog::new(config.record_policy),
            catalog_path.as_ref(),
            config,
        )
    }

    /// Builds a scheduler from any catalog source.
    ///
    /// A load failure leaves nothing behind and is reported as
    /// [`SchedulerError::CatalogLoad`].
    pub fn load(
        source: &dyn CatalogSource,
        catalog_path: &Path,
        config: &SchedulerConfig,
    ) -> Result<Self> {
        let courses = source
            .load_courses(catalog_path)
            .map_err(|source| SchedulerError::CatalogLoad {
                path: catalog_path.to_path_buf(),
                source,
            })?;
        info!(
            path = %catalog_path.display(),
            courses = courses.len(),
            "course catalog loaded"
        );

        let mut scheduler = Self::from_catalog(courses);
        scheduler.title = config.schedule_title.clone();
        Ok(scheduler)
    }

    /// Builds a scheduler over an in-memory catalog.
    pub fn from_catalog(courses: Vec<Course>) -> Self {
        Self {
            catalog: courses.into_iter().map(Rc::new).collect(),
            schedule: Vec::new(),
            title: crate::config::DEFAULT_SCHEDULE_TITLE.to_string(),
            sink: Box::new(FileRecordSink),
        }
    }

    /// Replaces the export destination.
    pub fn with_sink(mut self, sink: impl RecordSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Loaded catalog, in file order.
    pub fn catalog(&self) -> &[Rc<Course>] {
        &self.catalog
    }

    /// Scheduled courses, in the order they were added.
    pub fn schedule(&self) -> &[Rc<Course>] {
        &self.schedule
    }

    /// Finds the catalog entry for `(name, section)`.
    pub fn course_from_catalog(&self, name: &str, section: &str) -> Option<Rc<Course>> {
        self.catalog
            .iter()
            .find(|c| c.matches(name, section))
            .cloned()
    }

    /// Adds a catalog course to the end of the schedule.
    ///
    /// # Returns
    /// - `Ok(true)` when the course was added
    /// - `Ok(false)` when `(name, section)` is not in the catalog
    /// - `Err(AlreadyEnrolled)` when any section of `name` is already scheduled
    pub fn add_course(&mut self, name: &str, section: &str) -> Result<bool> {
        let Some(course) = self.course_from_catalog(name, section) else {
            debug!(name, section, "course not in catalog");
            return Ok(false);
        };

        if self.schedule.iter().any(|c| c.name() == name) {
            return Err(SchedulerError::AlreadyEnrolled {
                name: name.to_string(),
            });
        }

        self.schedule.push(course);
        debug!(name, section, scheduled = self.schedule.len(), "course added");
        Ok(true)
    }

    /// Removes `(name, section)` from the schedule.
    ///
    /// Returns `false` when it was not scheduled.
    pub fn remove_course(&mut self, name: &str, section: &str) -> bool {
        match self.schedule.iter().position(|c| c.matches(name, section)) {
            Some(idx) => {
                self.schedule.remove(idx);
                debug!(name, section, scheduled = self.schedule.len(), "course removed");
                true
            }
            None => false,
        }
    }

    /// Empties the schedule. The catalog is unaffected.
    pub fn reset_schedule(&mut self) {
        self.schedule = Vec::new();
        debug!("schedule reset");
    }

    /// `[name, section, title]` for every catalog course.
    pub fn course_catalog(&self) -> Vec<CourseRow> {
        course_rows(&self.catalog)
    }

    /// `[name, section, title]` for every scheduled course.
    pub fn scheduled_courses(&self) -> Vec<CourseRow> {
        course_rows(&self.schedule)
    }

    /// `[name, section, title, credits, instructor, meeting]` for every
    /// scheduled course.
    pub fn full_scheduled_courses(&self) -> Vec<FullCourseRow> {
        full_course_rows(&self.schedule)
    }

    /// Schedule title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Renames the schedule.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Writes the schedule, one course record per line.
    pub fn export_schedule(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let records: Vec<String> = self.schedule.iter().map(|c| c.to_string()).collect();
        self.sink
            .write_records(path, &records)
            .map_err(|source| SchedulerError::Export {
                path: path.to_path_buf(),
                source,
            })?;
        info!(path = %path.display(), records = records.len(), "schedule exported");
        Ok(())
    }
}

impl fmt::Debug for WolfScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WolfScheduler")
            .field("title", &self.title)
            .field("catalog", &self.catalog.len())
            .field("schedule", &self.schedule.len())
            .finish_non_exhaustive()
    }
}
