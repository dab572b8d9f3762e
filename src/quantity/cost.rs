use std::fmt::{Display, Formatter};

use ordered_float::OrderedFloat;

use crate::quantity::Quantity;

/// Amount in US dollars.
pub type Cost = Quantity<0, 0, 0, 0, 1>;

impl Cost {
    /// Total ordering for ranking, NaN sorts last.
    pub const fn ordered(self) -> OrderedFloat<f64> {
        OrderedFloat(self.0)
    }

    pub fn round_to_cents(self) -> Self {
        Self((self.0 * 100.0).round() / 100.0)
    }
}

impl Display for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}
