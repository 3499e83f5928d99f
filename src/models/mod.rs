//! Schedulable activity models.
//!
//! Provides the data types that make up a catalog and a schedule. All
//! constructors and setters validate their input; an invalid value is
//! rejected and the previous state is kept.
//!
//! # Variants
//!
//! | Type | Identity | Record line |
//! |------|----------|-------------|
//! | [`Course`] | `(name, section)` | `name,title,section,credits,instructor,days[,start,end]` |
//! | [`Event`] | title + meeting | `title,days,start,end,repeat,details` |
//!
//! Both embed a [`Meeting`] and are unified by the [`Activity`] enum.

mod activity;
mod course;
mod event;
mod meeting;

pub use activity::Activity;
pub use course::Course;
pub use event::Event;
pub use meeting::Meeting;
