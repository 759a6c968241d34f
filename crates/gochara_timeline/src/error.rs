//! Error types for transit timeline generation.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from transit timeline generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum TimelineError {
    /// The target year has no representable Jan 1 / Dec 31 calendar dates.
    YearOutOfRange(i32),
}

impl Display for TimelineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::YearOutOfRange(year) => write!(f, "year out of range: {year}"),
        }
    }
}

impl Error for TimelineError {}
