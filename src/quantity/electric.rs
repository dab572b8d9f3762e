//! Electrical units of the DC battery bus.

use std::{
    fmt::{Display, Formatter},
    ops::Mul,
};

use crate::quantity::{Quantity, energy::KilowattHours};

pub type Volts = Quantity<1, 0, -1, 0, 0>;

pub type Amperes = Quantity<0, 0, 1, 0, 0>;

pub type AmpereHours = Quantity<0, 1, 1, 0, 0>;

impl Display for Volts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0} V", self.0)
    }
}

impl Display for Amperes {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} A", self.0)
    }
}

impl Display for AmpereHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0} Ah", self.0)
    }
}

/// Stored energy of a cell or string at the given voltage.
impl Mul<Volts> for AmpereHours {
    type Output = KilowattHours;

    fn mul(self, rhs: Volts) -> Self::Output {
        Quantity(self.0 * rhs.0 / 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_energy() {
        assert_eq!(AmpereHours::from(100.0) * Volts::from(384.0), KilowattHours::from(38.4));
    }

    #[test]
    fn test_display() {
        assert_eq!(Volts::from(384.0).to_string(), "384 V");
        assert_eq!(Amperes::from(43.403).to_string(), "43.4 A");
        assert_eq!(AmpereHours::from(100.0).to_string(), "100 Ah");
    }
}
