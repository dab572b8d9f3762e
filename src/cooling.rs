//! Cooling unit count under the N+1 redundancy policy.

use serde::{Deserialize, Serialize};

use crate::quantity::power::Kilowatts;

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CoolingSizing {
    pub units_count: u32,

    #[serde(rename = "total_power_kilowatts")]
    pub total_power: Kilowatts,
}

impl CoolingSizing {
    pub const NONE: Self = Self { units_count: 0, total_power: Kilowatts::ZERO };
}

/// Size the cooling for the IT load.
///
/// Enough units to carry the load plus exactly one redundant unit, so a zero load still
/// yields the single redundant unit. A zero unit power means no model is chosen.
/// The count saturates at `u32::MAX` for absurd loads.
#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn size_cooling(total_it_load: Kilowatts, unit_power: Kilowatts) -> CoolingSizing {
    if unit_power == Kilowatts::ZERO {
        return CoolingSizing::NONE;
    }
    let units_count = ((total_it_load / unit_power).ceil() + 1.0) as u32;
    CoolingSizing { units_count, total_power: unit_power * f64::from(units_count) }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_no_model() {
        assert_eq!(size_cooling(Kilowatts::from(40.0), Kilowatts::ZERO), CoolingSizing::NONE);
    }

    #[test]
    fn test_zero_load_keeps_redundant_unit() {
        let sizing = size_cooling(Kilowatts::ZERO, Kilowatts::from(25.0));
        assert_eq!(sizing.units_count, 1);
        assert_eq!(sizing.total_power, Kilowatts::from(25.0));
    }

    #[test]
    fn test_exact_multiple() {
        assert_eq!(size_cooling(Kilowatts::from(25.0), Kilowatts::from(25.0)).units_count, 2);
    }

    #[test]
    fn test_fractional_multiple() {
        let unit_power = Kilowatts::from(12.5);
        let sizing = size_cooling(unit_power * 3.2, unit_power);
        assert_eq!(sizing.units_count, 5);
        assert_abs_diff_eq!(sizing.total_power.0, 62.5);
    }

    #[test]
    fn test_huge_load_saturates() {
        let unit_power = Kilowatts::from(12.5);
        let sizing = size_cooling(Kilowatts::from(60_000_000_000.0), unit_power);
        assert_eq!(sizing.units_count, u32::MAX);
        assert_abs_diff_eq!(sizing.total_power.0, 12.5 * f64::from(u32::MAX));
    }

    #[test]
    fn test_n_plus_one() {
        for unit_power in [12.5, 25.0, 35.0, 45.0, 60.0, 70.0] {
            let unit_power = Kilowatts::from(unit_power);
            for load in [Kilowatts::ZERO, unit_power, unit_power * 3.2] {
                let expected = (load / unit_power).ceil() + 1.0;
                assert_abs_diff_eq!(f64::from(size_cooling(load, unit_power).units_count), expected);
            }
        }
    }
}
