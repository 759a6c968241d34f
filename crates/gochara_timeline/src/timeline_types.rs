//! Output types for the annual transit timeline.

use chrono::NaiveDate;

use gochara_base::{Graha, Nakshatra, Rashi};

/// One contiguous run of constant (rashi, nakshatra, pada) classification.
///
/// `start` is inclusive. `end` equals the next segment's start; the final
/// segment of a lane is force-closed on Dec 31 of the year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitSegment {
    /// Which graha this segment belongs to.
    pub graha: Graha,
    /// First day of the segment.
    pub start: NaiveDate,
    /// Boundary date: the next segment's start, or Dec 31 for the last.
    pub end: NaiveDate,
    /// Rashi holding over the whole segment.
    pub rashi: Rashi,
    /// Nakshatra holding over the whole segment.
    pub nakshatra: Nakshatra,
    /// Pada (1-4) holding over the whole segment.
    pub pada: u8,
    /// Ecliptic longitude on the segment's first day, degrees [0, 360).
    pub start_longitude_deg: f64,
}

impl TransitSegment {
    /// Days from start to the end boundary.
    pub fn duration_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}

/// One graha's ordered, gapless partition of the year.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitLane {
    /// The graha this lane tracks.
    pub graha: Graha,
    /// Segments in date order; each segment's end is the next one's start.
    pub segments: Vec<TransitSegment>,
}

/// Annual transit timeline for a set of grahas.
///
/// Lanes are kept in traditional graha order regardless of request order,
/// one lane per distinct requested graha.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitTimeline {
    /// The simulated calendar year.
    pub year: i32,
    /// One lane per requested graha, in traditional order.
    pub lanes: Vec<TransitLane>,
}

impl TransitTimeline {
    /// Lane for a specific graha, if it was requested.
    pub fn lane(&self, graha: Graha) -> Option<&TransitLane> {
        self.lanes.iter().find(|l| l.graha == graha)
    }

    /// Segments for a specific graha, if it was requested.
    pub fn segments(&self, graha: Graha) -> Option<&[TransitSegment]> {
        self.lane(graha).map(|l| l.segments.as_slice())
    }

    /// True when no grahas were requested.
    pub fn is_empty(&self) -> bool {
        self.lanes.is_empty()
    }

    /// Number of lanes (distinct requested grahas).
    pub fn len(&self) -> usize {
        self.lanes.len()
    }
}
