use std::{
    fmt::{Display, Formatter},
    ops::{Div, Mul},
};

use crate::quantity::{
    Quantity,
    electric::{Amperes, Volts},
    energy::KilowattHours,
    time::Hours,
};

pub type Kilowatts = Quantity<1, 0, 0, 0, 0>;

impl Kilowatts {
    pub const fn watts(self) -> f64 {
        self.0 * 1000.0
    }
}

impl Display for Kilowatts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} kW", self.0)
    }
}

impl Mul<Hours> for Kilowatts {
    type Output = KilowattHours;

    fn mul(self, rhs: Hours) -> Self::Output {
        Quantity(self.0 * rhs.0)
    }
}

/// Current drawn from a DC bus.
impl Div<Volts> for Kilowatts {
    type Output = Amperes;

    fn div(self, rhs: Volts) -> Self::Output {
        Quantity(self.watts() / rhs.0)
    }
}
