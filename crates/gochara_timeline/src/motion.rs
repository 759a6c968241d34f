//! Simulated motion model: a seeded start longitude plus a constant rate.

use gochara_base::{Graha, normalize_360};

/// Longitude-walk parameters for one graha over one year.
///
/// The model is deliberately simple: a start longitude plus a constant mean
/// daily rate. Substitute any start/speed pair to drive the segmentation
/// against different motion assumptions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionModel {
    /// Ecliptic longitude on Jan 1 in degrees. Any finite angle; the walk
    /// normalizes into [0, 360).
    pub start_longitude_deg: f64,
    /// Constant daily motion in degrees per day (negative = retrograde).
    pub speed_deg_per_day: f64,
}

impl MotionModel {
    /// Model from an explicit start longitude and speed.
    pub fn new(start_longitude_deg: f64, speed_deg_per_day: f64) -> Self {
        Self {
            start_longitude_deg,
            speed_deg_per_day,
        }
    }

    /// Default annual model: deterministic seeded start longitude plus the
    /// graha's mean daily motion.
    pub fn annual(graha: Graha, year: i32) -> Self {
        Self {
            start_longitude_deg: seed_longitude_deg(graha, year),
            speed_deg_per_day: graha.mean_motion_deg_per_day(),
        }
    }

    /// Advance a longitude by one day, wrapped into [0, 360).
    pub fn step(&self, lon_deg: f64) -> f64 {
        normalize_360(lon_deg + self.speed_deg_per_day)
    }
}

/// Deterministic pseudo start longitude for a (graha, year) pair.
///
/// Mixes the year with the graha's position in the traditional order so
/// every graha starts on a distinct longitude and reruns are bit-identical.
/// i64 arithmetic keeps extreme years in range; rem_euclid lands the result
/// in [0, 360) for negative years too.
pub fn seed_longitude_deg(graha: Graha, year: i32) -> f64 {
    let mix = year as i64 * 13 + (graha.index() as i64 + 1) * 57;
    mix.rem_euclid(360) as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use gochara_base::ALL_GRAHAS;

    #[test]
    fn seed_in_range() {
        for year in [-4000, 0, 1987, 2024, 2525] {
            for g in ALL_GRAHAS {
                let s = seed_longitude_deg(g, year);
                assert!((0.0..360.0).contains(&s), "{} in {year}: {s}", g.name());
            }
        }
    }

    #[test]
    fn seed_deterministic() {
        for g in ALL_GRAHAS {
            assert_eq!(
                seed_longitude_deg(g, 2024).to_bits(),
                seed_longitude_deg(g, 2024).to_bits()
            );
        }
    }

    #[test]
    fn seeds_distinct_per_graha() {
        for year in [1950, 2024, 2031] {
            for (i, a) in ALL_GRAHAS.iter().enumerate() {
                for b in ALL_GRAHAS.iter().skip(i + 1) {
                    assert_ne!(
                        seed_longitude_deg(*a, year),
                        seed_longitude_deg(*b, year),
                        "{} vs {} in {year}",
                        a.name(),
                        b.name()
                    );
                }
            }
        }
    }

    #[test]
    fn seed_varies_by_year() {
        assert_ne!(
            seed_longitude_deg(Graha::Chandra, 2024),
            seed_longitude_deg(Graha::Chandra, 2025)
        );
    }

    #[test]
    fn annual_uses_mean_motion() {
        let m = MotionModel::annual(Graha::Shani, 2024);
        assert!((m.speed_deg_per_day - 0.033).abs() < 1e-12);
        assert!((0.0..360.0).contains(&m.start_longitude_deg));
    }

    #[test]
    fn step_advances_and_wraps() {
        let m = MotionModel::new(0.0, 13.2);
        assert!((m.step(100.0) - 113.2).abs() < 1e-10);
        assert!((m.step(355.0) - 8.2).abs() < 1e-10);
    }

    #[test]
    fn step_wraps_retrograde_below_zero() {
        let m = MotionModel::new(0.0, -0.05);
        assert!((m.step(0.0) - 359.95).abs() < 1e-10);
    }
}
