use std::fmt::{Display, Formatter};

use crate::quantity::Quantity;

pub type Hours = Quantity<0, 1, 0, 0, 0>;

impl Hours {
    pub fn from_minutes(minutes: u32) -> Self {
        Self(f64::from(minutes) / 60.0)
    }
}

impl Display for Hours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0} min", self.0 * 60.0)
    }
}
