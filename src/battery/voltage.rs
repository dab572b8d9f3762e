use crate::quantity::{Quantity, electric::Volts, power::Kilowatts};

/// Upper load bound (inclusive) and the DC bus voltage serving it.
const TIERS: [(f64, f64); 3] = [(20.0, 192.0), (40.0, 240.0), (100.0, 384.0)];

const TOP_TIER: f64 = 480.0;

/// DC bus voltage for the load.
///
/// This is a property of the load alone, every battery model is strung to the same bus.
#[must_use]
pub fn dc_bus_voltage(load: Kilowatts) -> Volts {
    let voltage = TIERS
        .iter()
        .find(|(max_load, _)| load.0 <= *max_load)
        .map_or(TOP_TIER, |(_, voltage)| *voltage);
    Quantity(voltage)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiers() {
        for (load, expected) in [
            (0.0, 192.0),
            (20.0, 192.0),
            (20.01, 240.0),
            (40.0, 240.0),
            (40.5, 384.0),
            (100.0, 384.0),
            (100.1, 480.0),
            (1000.0, 480.0),
        ] {
            assert_eq!(dc_bus_voltage(Kilowatts::from(load)), Volts::from(expected), "{load} kW");
        }
    }
}
