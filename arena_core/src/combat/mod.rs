//! Combat resolution - the damage pipeline shared by every attack

mod resolution;

pub use resolution::{resolve_strike, weapon_strike, Strike, StrikeOutcome};

/// Round to one decimal place, half away from zero
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Value as shown to the player: never negative, one decimal
pub fn display_value(value: f64) -> f64 {
    if value < 0.0 {
        0.0
    } else {
        round1(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_round1() {
        assert_eq!(round1(2.96), 3.0);
        assert_eq!(round1(2.94), 2.9);
        assert_eq!(round1(-1.25), -1.3);
    }

    #[test]
    fn test_display_value_clamps() {
        assert_eq!(display_value(-4.2), 0.0);
        assert_eq!(display_value(-0.01), 0.0);
        assert_eq!(display_value(12.34), 12.3);
    }

    proptest! {
        #[test]
        fn prop_display_never_negative(value in -1.0e6f64..1.0e6) {
            prop_assert!(display_value(value) >= 0.0);
        }
    }
}
