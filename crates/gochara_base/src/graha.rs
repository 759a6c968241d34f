//! Graha (celestial body) enum with motion and display attributes.
//!
//! The 9 grahas tracked by the transit timeline: the 7 classical planets
//! plus the lunar nodes Rahu and Ketu. Each graha carries the constant mean
//! daily motion used by the simulated motion model and a display color that
//! also colors the nakshatras it rules.

/// The 9 grahas in traditional order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Graha {
    Surya,
    Chandra,
    Mangal,
    Buddh,
    Guru,
    Shukra,
    Shani,
    Rahu,
    Ketu,
}

/// All 9 grahas in traditional order (0 = Surya, 8 = Ketu).
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

impl Graha {
    /// Sanskrit name of the graha.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Mangal => "Mangal",
            Self::Buddh => "Buddh",
            Self::Guru => "Guru",
            Self::Shukra => "Shukra",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// English name of the graha.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Mangal => "Mars",
            Self::Buddh => "Mercury",
            Self::Guru => "Jupiter",
            Self::Shukra => "Venus",
            Self::Shani => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// 0-based index into ALL_GRAHAS.
    pub const fn index(self) -> u8 {
        match self {
            Self::Surya => 0,
            Self::Chandra => 1,
            Self::Mangal => 2,
            Self::Buddh => 3,
            Self::Guru => 4,
            Self::Shukra => 5,
            Self::Shani => 6,
            Self::Rahu => 7,
            Self::Ketu => 8,
        }
    }

    /// Mean daily motion in degrees per day for the simulated motion model.
    ///
    /// The nodes run retrograde, hence the negative rates.
    pub const fn mean_motion_deg_per_day(self) -> f64 {
        match self {
            Self::Surya => 1.0,
            Self::Chandra => 13.2,
            Self::Mangal => 0.5,
            Self::Buddh => 1.5,
            Self::Guru => 0.083,
            Self::Shukra => 1.6,
            Self::Shani => 0.033,
            Self::Rahu | Self::Ketu => -0.05,
        }
    }

    /// True for the lunar nodes Rahu and Ketu.
    pub const fn is_node(self) -> bool {
        matches!(self, Self::Rahu | Self::Ketu)
    }

    /// Display color (hex) for this graha and the nakshatras it rules.
    pub const fn color(self) -> &'static str {
        match self {
            Self::Surya => "#fb923c",
            Self::Chandra => "#e2e8f0",
            Self::Mangal => "#ef4444",
            Self::Buddh => "#22c55e",
            Self::Guru => "#fbbf24",
            Self::Shukra => "#f472b6",
            Self::Shani => "#3b82f6",
            Self::Rahu => "#71717a",
            Self::Ketu => "#a8a29e",
        }
    }

    /// All 9 grahas in order.
    pub const fn all() -> &'static [Graha; 9] {
        &ALL_GRAHAS
    }

    /// Look up a graha by English or Sanskrit name (case-insensitive).
    ///
    /// Returns None for unrecognized names.
    pub fn from_name(s: &str) -> Option<Graha> {
        match s.to_lowercase().as_str() {
            "sun" | "surya" => Some(Graha::Surya),
            "moon" | "chandra" => Some(Graha::Chandra),
            "mars" | "mangal" => Some(Graha::Mangal),
            "mercury" | "buddh" => Some(Graha::Buddh),
            "jupiter" | "guru" => Some(Graha::Guru),
            "venus" | "shukra" => Some(Graha::Shukra),
            "saturn" | "shani" => Some(Graha::Shani),
            "rahu" => Some(Graha::Rahu),
            "ketu" => Some(Graha::Ketu),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_grahas_count() {
        assert_eq!(ALL_GRAHAS.len(), 9);
    }

    #[test]
    fn graha_indices_sequential() {
        for (i, g) in ALL_GRAHAS.iter().enumerate() {
            assert_eq!(g.index() as usize, i);
        }
    }

    #[test]
    fn graha_names_nonempty() {
        for g in ALL_GRAHAS {
            assert!(!g.name().is_empty());
            assert!(!g.english_name().is_empty());
        }
    }

    #[test]
    fn mean_motions_match_model() {
        assert!((Graha::Surya.mean_motion_deg_per_day() - 1.0).abs() < 1e-12);
        assert!((Graha::Chandra.mean_motion_deg_per_day() - 13.2).abs() < 1e-12);
        assert!((Graha::Shani.mean_motion_deg_per_day() - 0.033).abs() < 1e-12);
    }

    #[test]
    fn nodes_retrograde() {
        assert!(Graha::Rahu.mean_motion_deg_per_day() < 0.0);
        assert!(Graha::Ketu.mean_motion_deg_per_day() < 0.0);
        for g in ALL_GRAHAS {
            if !g.is_node() {
                assert!(g.mean_motion_deg_per_day() > 0.0, "{} direct", g.name());
            }
        }
    }

    #[test]
    fn node_flags() {
        assert!(Graha::Rahu.is_node());
        assert!(Graha::Ketu.is_node());
        assert!(!Graha::Chandra.is_node());
    }

    #[test]
    fn colors_are_hex() {
        for g in ALL_GRAHAS {
            assert!(g.color().starts_with('#'), "{} color", g.name());
            assert_eq!(g.color().len(), 7);
        }
    }

    #[test]
    fn from_name_english() {
        assert_eq!(Graha::from_name("Sun"), Some(Graha::Surya));
        assert_eq!(Graha::from_name("saturn"), Some(Graha::Shani));
        assert_eq!(Graha::from_name("JUPITER"), Some(Graha::Guru));
    }

    #[test]
    fn from_name_sanskrit() {
        assert_eq!(Graha::from_name("Chandra"), Some(Graha::Chandra));
        assert_eq!(Graha::from_name("shukra"), Some(Graha::Shukra));
    }

    #[test]
    fn from_name_unknown() {
        assert_eq!(Graha::from_name("Pluto"), None);
        assert_eq!(Graha::from_name(""), None);
    }
}
