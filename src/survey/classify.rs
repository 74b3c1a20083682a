//! Qualitative signal-strength bands.

/// Five ordered signal-quality bands.
///
/// Band boundaries are inclusive on the upper (stronger) side: exactly
/// −50 dBm is Excellent, exactly −60 dBm is Good, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SignalBand {
    Excellent,
    Good,
    Fair,
    Weak,
    VeryWeak,
}

impl SignalBand {
    /// Classify a raw RSSI reading.  Total over all of `i8`.
    pub const fn from_dbm(dbm: i8) -> Self {
        if dbm >= -50 {
            Self::Excellent
        } else if dbm >= -60 {
            Self::Good
        } else if dbm >= -70 {
            Self::Fair
        } else if dbm >= -80 {
            Self::Weak
        } else {
            Self::VeryWeak
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Weak => "Weak",
            Self::VeryWeak => "Very Weak",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_assign_to_stronger_band() {
        assert_eq!(SignalBand::from_dbm(-50), SignalBand::Excellent);
        assert_eq!(SignalBand::from_dbm(-60), SignalBand::Good);
        assert_eq!(SignalBand::from_dbm(-70), SignalBand::Fair);
        assert_eq!(SignalBand::from_dbm(-80), SignalBand::Weak);
    }

    #[test]
    fn one_below_boundary_drops_a_band() {
        assert_eq!(SignalBand::from_dbm(-51), SignalBand::Good);
        assert_eq!(SignalBand::from_dbm(-61), SignalBand::Fair);
        assert_eq!(SignalBand::from_dbm(-71), SignalBand::Weak);
        assert_eq!(SignalBand::from_dbm(-81), SignalBand::VeryWeak);
    }

    #[test]
    fn extremes_are_covered() {
        assert_eq!(SignalBand::from_dbm(0), SignalBand::Excellent);
        assert_eq!(SignalBand::from_dbm(i8::MAX), SignalBand::Excellent);
        assert_eq!(SignalBand::from_dbm(i8::MIN), SignalBand::VeryWeak);
    }

    #[test]
    fn scenario_bands_match_ranked_strengths() {
        let bands: Vec<SignalBand> = [-45i8, -58, -72, -90]
            .iter()
            .map(|&d| SignalBand::from_dbm(d))
            .collect();
        assert_eq!(
            bands,
            vec![
                SignalBand::Excellent,
                SignalBand::Good,
                SignalBand::Fair,
                SignalBand::VeryWeak,
            ]
        );
    }
}
