//! Influence Calculator
//!
//! Turns one normalized attribute value plus an exponent into a
//! multiplicative weight modifier. Several compounding factors can shift
//! an event's likelihood by orders of magnitude without ever reaching
//! 0 or infinity.

/// Lower clamp of an influence multiplier.
pub const INFLUENCE_MIN: f64 = 0.02;

/// Upper clamp of an influence multiplier.
pub const INFLUENCE_MAX: f64 = 50.0;

/// Exponents closer to zero than this have no effect.
const EXPONENT_EPSILON: f64 = 1e-9;

/// Computes the multiplier for one (normalized value, exponent) pair.
///
/// A positive exponent amplifies with high values (`v^e`). A negative
/// exponent inverts first (`(1-v)^|e|`), so a *low* attribute value
/// drives the effect - the vulnerability-factor case.
pub fn calculate_influence(normalized_value: f64, exponent: f64) -> f64 {
    if exponent.abs() < EXPONENT_EPSILON {
        return 1.0;
    }

    let multiplier = if exponent > 0.0 {
        normalized_value.powf(exponent)
    } else {
        (1.0 - normalized_value).powf(exponent.abs())
    };

    multiplier.clamp(INFLUENCE_MIN, INFLUENCE_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_exponent_is_identity() {
        for v in [0.01, 0.25, 0.5, 0.75, 0.99] {
            assert_eq!(calculate_influence(v, 0.0), 1.0);
        }
    }

    #[test]
    fn test_positive_exponent_formula() {
        let v = 0.6;
        let e = 2.0;
        assert!((calculate_influence(v, e) - v.powf(e)).abs() < 1e-12);
    }

    #[test]
    fn test_negative_exponent_inverts() {
        let v = 0.2_f64;
        let e = -1.5;
        let expected = (1.0 - v).powf(1.5);
        assert!((calculate_influence(v, e) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_result_always_in_bounds() {
        for v in [0.01, 0.1, 0.5, 0.9, 0.99] {
            for e in [-20.0, -3.0, -0.5, 0.0, 0.5, 3.0, 20.0] {
                let m = calculate_influence(v, e);
                assert!(
                    (INFLUENCE_MIN..=INFLUENCE_MAX).contains(&m),
                    "influence({}, {}) = {} out of bounds",
                    v,
                    e,
                    m
                );
            }
        }
    }

    #[test]
    fn test_extreme_exponent_clamps_to_floor() {
        // 0.01^20 is far below the floor
        assert_eq!(calculate_influence(0.01, 20.0), INFLUENCE_MIN);
    }

    #[test]
    fn test_low_value_drives_negative_exponent() {
        // Low job security (0.1) with a negative exponent should weigh
        // more than high job security (0.9)
        let vulnerable = calculate_influence(0.1, -2.0);
        let secure = calculate_influence(0.9, -2.0);
        assert!(vulnerable > secure);
    }
}
