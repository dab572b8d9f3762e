use std::fmt::{Display, Formatter};

use crate::quantity::Quantity;

pub type Kilograms = Quantity<0, 0, 0, 1, 0>;

impl Display for Kilograms {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} kg", self.0)
    }
}
