//! High-level operations.
//!
//! This module contains the implementation of libvet commands.

pub mod check;
pub mod schedule;
pub mod summary;

pub use check::{check_libraries, check_library, CheckOptions};
pub use schedule::{schedule, ScheduleOptions, ScheduleResult};
pub use summary::{render_markdown, summarize, Summary};
