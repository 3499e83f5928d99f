//! Course scheduler and table views.
//!
//! `WolfScheduler` owns a read-only course catalog and the user's schedule.
//! Courses are added and removed by `(name, section)`; the `projection`
//! module turns either list into rows for display.

pub mod projection;
mod wolf;

pub use projection::{CourseRow, FullCourseRow};
pub use wolf::WolfScheduler;
