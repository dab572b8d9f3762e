use std::fmt::{Display, Formatter};

use crate::quantity::Quantity;

pub type KilowattHours = Quantity<1, 1, 0, 0, 0>;

impl KilowattHours {
    pub const fn watt_hours(self) -> f64 {
        self.0 * 1000.0
    }
}

impl Display for KilowattHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} kWh", self.0)
    }
}
