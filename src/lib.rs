//! Course catalog and schedule management.
//!
//! Loads a catalog of course offerings, lets a user build a schedule from it,
//! and writes that schedule back out as line records.
//!
//! # Modules
//!
//! - **`models`**: `Course`, `Event`, the `Activity` enum and the shared
//!   `Meeting` days/time value
//! - **`validation`**: Field rules and `ValidationError`
//! - **`scheduler`**: `WolfScheduler` (catalog + schedule) and table projections
//! - **`io`**: Course record reader, activity record writer, and the
//!   `CatalogSource` / `RecordSink` traits the scheduler is built on
//! - **`config`**: `SchedulerConfig`, loadable from TOML
//!
//! # Logging
//!
//! Emits `tracing` events (catalog loads, schedule changes, skipped records).
//! No subscriber is installed by this crate.

pub mod config;
pub mod error;
pub mod io;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::{Result, SchedulerError};
