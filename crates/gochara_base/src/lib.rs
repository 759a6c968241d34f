//! Reference data and classification math for the gochara transit timeline.
//!
//! This crate provides:
//! - The 9 grahas with mean daily motions and display colors
//! - Rashi (zodiac sign) classification with element, short code, and DMS
//! - Nakshatra (lunar mansion) and pada classification with rulers
//!
//! All longitudes are ecliptic degrees. Every classification entry point
//! normalizes its input into [0, 360), so callers may pass any finite angle.

pub mod graha;
pub mod nakshatra;
pub mod rashi;
pub mod util;

pub use graha::{ALL_GRAHAS, Graha};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_RULER_CYCLE, NAKSHATRA_SPAN, Nakshatra, NakshatraInfo, PADA_SPAN,
    nakshatra_from_longitude, pada_from_longitude,
};
pub use rashi::{
    ALL_RASHIS, Dms, Rashi, RashiInfo, Tattva, deg_to_dms, dms_to_deg, rashi_from_longitude,
};
pub use util::normalize_360;
