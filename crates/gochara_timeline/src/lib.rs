//! Simulated annual transit timeline engine.
//!
//! Walks each graha's ecliptic longitude through a calendar year in daily
//! steps and partitions the year into contiguous segments of constant
//! (rashi, nakshatra, pada) classification. Motion is a simulated constant
//! mean rate per graha seeded deterministically from the year, not a real
//! ephemeris, so identical inputs always reproduce identical timelines.

pub mod error;
pub mod motion;
pub mod timeline;
pub mod timeline_types;

pub use error::TimelineError;
pub use motion::{MotionModel, seed_longitude_deg};
pub use timeline::{
    TRANSIT_WINDOW_DAYS, annual_timeline, graha_transits, graha_transits_with_model,
};
pub use timeline_types::{TransitLane, TransitSegment, TransitTimeline};
