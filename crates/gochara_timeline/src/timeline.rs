//! Annual transit segmentation: the daily longitude walk.
//!
//! For each graha the engine advances a simulated longitude one day at a
//! time across the year and closes a segment whenever the (rashi, nakshatra,
//! pada) classification changes. Comparing the whole triple catches any
//! number of grid boundaries crossed in one daily step; a sub-day crossing
//! that returns within the same day is invisible at this resolution.

use chrono::{Days, NaiveDate};

use gochara_base::{
    ALL_GRAHAS, Graha, Nakshatra, Rashi, nakshatra_from_longitude, normalize_360,
    rashi_from_longitude,
};

use crate::error::TimelineError;
use crate::motion::MotionModel;
use crate::timeline_types::{TransitLane, TransitSegment, TransitTimeline};

/// Simulated days per year. Fixed at 365 for every year; the final segment
/// is force-closed on Dec 31 either way, which in leap years absorbs the
/// extra calendar day.
pub const TRANSIT_WINDOW_DAYS: u32 = 365;

// ---------------------------------------------------------------------------
// Classification triple
// ---------------------------------------------------------------------------

/// The (rashi, nakshatra, pada) triple driving the split decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Classification {
    rashi: Rashi,
    nakshatra: Nakshatra,
    pada: u8,
}

fn classify(lon_deg: f64) -> Classification {
    let rashi = rashi_from_longitude(lon_deg).rashi;
    let nak = nakshatra_from_longitude(lon_deg);
    Classification {
        rashi,
        nakshatra: nak.nakshatra,
        pada: nak.pada,
    }
}

/// Accumulator for the segment currently being walked.
struct OpenSegment {
    start: NaiveDate,
    start_longitude_deg: f64,
    class: Classification,
}

impl OpenSegment {
    fn close(&self, graha: Graha, end: NaiveDate) -> TransitSegment {
        TransitSegment {
            graha,
            start: self.start,
            end,
            rashi: self.class.rashi,
            nakshatra: self.class.nakshatra,
            pada: self.class.pada,
            start_longitude_deg: self.start_longitude_deg,
        }
    }
}

// ---------------------------------------------------------------------------
// Per-graha walk
// ---------------------------------------------------------------------------

/// Jan 1 and Dec 31 of the target year.
fn year_window(year: i32) -> Result<(NaiveDate, NaiveDate), TimelineError> {
    let start = NaiveDate::from_ymd_opt(year, 1, 1).ok_or(TimelineError::YearOutOfRange(year))?;
    let end = NaiveDate::from_ymd_opt(year, 12, 31).ok_or(TimelineError::YearOutOfRange(year))?;
    Ok((start, end))
}

/// Transit segments for one graha using the default annual motion model.
pub fn graha_transits(year: i32, graha: Graha) -> Result<Vec<TransitSegment>, TimelineError> {
    graha_transits_with_model(year, graha, MotionModel::annual(graha, year))
}

/// Transit segments for one graha under a caller-supplied motion model.
///
/// The result is an ordered, gapless partition of the year: the first
/// segment starts on Jan 1, each segment's end equals the next segment's
/// start, and the last segment ends on Dec 31. Every emitted segment covers
/// at least one day.
pub fn graha_transits_with_model(
    year: i32,
    graha: Graha,
    model: MotionModel,
) -> Result<Vec<TransitSegment>, TimelineError> {
    let (window_start, window_end) = year_window(year)?;

    let mut lon = normalize_360(model.start_longitude_deg);
    let mut open = OpenSegment {
        start: window_start,
        start_longitude_deg: lon,
        class: classify(lon),
    };
    let mut segments = Vec::new();

    for day in 1..TRANSIT_WINDOW_DAYS {
        lon = model.step(lon);
        let class = classify(lon);
        if class != open.class {
            let boundary = window_start + Days::new(u64::from(day));
            // Day 364 of a common year lands on Dec 31, which belongs to
            // the force-close below, never to a fresh segment.
            if boundary < window_end {
                segments.push(open.close(graha, boundary));
                open = OpenSegment {
                    start: boundary,
                    start_longitude_deg: lon,
                    class,
                };
            }
        }
    }

    segments.push(open.close(graha, window_end));
    Ok(segments)
}

// ---------------------------------------------------------------------------
// Timeline assembly
// ---------------------------------------------------------------------------

/// Annual transit timeline for a set of grahas.
///
/// Duplicates collapse and request order is ignored: lanes come out in
/// traditional graha order. An empty request yields an empty timeline, not
/// an error; an unrepresentable year is an error even for empty requests.
pub fn annual_timeline(year: i32, grahas: &[Graha]) -> Result<TransitTimeline, TimelineError> {
    year_window(year)?;

    let mut requested = [false; 9];
    for g in grahas {
        requested[g.index() as usize] = true;
    }

    let mut lanes = Vec::with_capacity(grahas.len().min(ALL_GRAHAS.len()));
    for graha in ALL_GRAHAS {
        if requested[graha.index() as usize] {
            lanes.push(TransitLane {
                graha,
                segments: graha_transits(year, graha)?,
            });
        }
    }

    Ok(TransitTimeline { year, lanes })
}
