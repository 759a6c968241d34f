//! Rashi (zodiac sign) classification and DMS formatting.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees each.
//! Given an ecliptic longitude, we identify which rashi the point falls in
//! and express the position as degrees-minutes-seconds within that sign.
//! Signs are closed at their lower bound and open at the upper: Mesha is
//! [0, 30), Vrishabha is [30, 60), and so on.

use crate::util::normalize_360;

/// The 12 rashis (zodiac signs) starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

/// Elemental category (tattva) of a rashi.
///
/// The cycle Agni, Prithvi, Vayu, Jala repeats from Mesha through Meena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tattva {
    Agni,
    Prithvi,
    Vayu,
    Jala,
}

impl Tattva {
    /// Sanskrit name of the tattva.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Agni => "Agni",
            Self::Prithvi => "Prithvi",
            Self::Vayu => "Vayu",
            Self::Jala => "Jala",
        }
    }

    /// English name of the tattva.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Agni => "Fire",
            Self::Prithvi => "Earth",
            Self::Vayu => "Air",
            Self::Jala => "Water",
        }
    }
}

impl Rashi {
    /// Sanskrit name of the rashi.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Western (English) name of the rashi.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// Three-letter display code of the rashi.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Mesha => "ARI",
            Self::Vrishabha => "TAU",
            Self::Mithuna => "GEM",
            Self::Karka => "CAN",
            Self::Simha => "LEO",
            Self::Kanya => "VIR",
            Self::Tula => "LIB",
            Self::Vrischika => "SCO",
            Self::Dhanu => "SAG",
            Self::Makara => "CAP",
            Self::Kumbha => "AQU",
            Self::Meena => "PIS",
        }
    }

    /// 0-based index (Mesha=0 .. Meena=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Mesha => 0,
            Self::Vrishabha => 1,
            Self::Mithuna => 2,
            Self::Karka => 3,
            Self::Simha => 4,
            Self::Kanya => 5,
            Self::Tula => 6,
            Self::Vrischika => 7,
            Self::Dhanu => 8,
            Self::Makara => 9,
            Self::Kumbha => 10,
            Self::Meena => 11,
        }
    }

    /// 1-based display number (Mesha=1 .. Meena=12).
    pub const fn number(self) -> u8 {
        self.index() + 1
    }

    /// Elemental category of the rashi.
    pub const fn tattva(self) -> Tattva {
        match self {
            Self::Mesha | Self::Simha | Self::Dhanu => Tattva::Agni,
            Self::Vrishabha | Self::Kanya | Self::Makara => Tattva::Prithvi,
            Self::Mithuna | Self::Tula | Self::Kumbha => Tattva::Vayu,
            Self::Karka | Self::Vrischika | Self::Meena => Tattva::Jala,
        }
    }

    /// Display color (hex) of the rashi.
    pub const fn color(self) -> &'static str {
        match self {
            Self::Mesha => "#ef4444",
            Self::Vrishabha => "#10b981",
            Self::Mithuna => "#fbbf24",
            Self::Karka => "#3b82f6",
            Self::Simha => "#dc2626",
            Self::Kanya => "#059669",
            Self::Tula => "#d97706",
            Self::Vrischika => "#1d4ed8",
            Self::Dhanu => "#b91c1c",
            Self::Makara => "#047857",
            Self::Kumbha => "#b45309",
            Self::Meena => "#1e3a8a",
        }
    }

    /// All 12 rashis in order.
    pub const fn all() -> &'static [Rashi; 12] {
        &ALL_RASHIS
    }
}

/// Degrees-minutes-seconds representation of an angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    /// Whole degrees (0..29 within a rashi, or 0..359 standalone).
    pub degrees: u16,
    /// Arc-minutes (0..59).
    pub minutes: u8,
    /// Arc-seconds (0.0..60.0), may include fractional part.
    pub seconds: f64,
}

/// Full rashi position result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RashiInfo {
    /// The rashi (zodiac sign).
    pub rashi: Rashi,
    /// 0-based rashi index (0 = Mesha).
    pub rashi_index: u8,
    /// Position within the rashi as DMS.
    pub dms: Dms,
    /// Decimal degrees within the rashi [0.0, 30.0).
    pub degrees_in_rashi: f64,
}

/// Convert DMS back to decimal degrees.
pub fn dms_to_deg(dms: &Dms) -> f64 {
    dms.degrees as f64 + dms.minutes as f64 / 60.0 + dms.seconds / 3600.0
}

/// Convert decimal degrees to degrees-minutes-seconds.
///
/// Handles negative input by taking absolute value.
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let total_degrees = d.floor() as u16;
    let remainder = (d - total_degrees as f64) * 60.0;
    let minutes = remainder.floor() as u8;
    let seconds = (remainder - minutes as f64) * 60.0;
    Dms {
        degrees: total_degrees,
        minutes,
        seconds,
    }
}

/// Determine rashi from ecliptic longitude.
///
/// Each rashi spans exactly 30 degrees, closed-lower/open-upper.
pub fn rashi_from_longitude(lon_deg: f64) -> RashiInfo {
    let lon = normalize_360(lon_deg);
    let rashi_idx = (lon / 30.0).floor() as u8;
    // Clamp to 11 in case of floating point edge (exactly 360.0)
    let rashi_idx = rashi_idx.min(11);
    let degrees_in_rashi = lon - (rashi_idx as f64) * 30.0;
    let rashi = ALL_RASHIS[rashi_idx as usize];
    let dms = deg_to_dms(degrees_in_rashi);

    RashiInfo {
        rashi,
        rashi_index: rashi_idx,
        dms,
        degrees_in_rashi,
    }
}
