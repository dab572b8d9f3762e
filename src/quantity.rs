pub mod cost;
pub mod electric;
pub mod energy;
pub mod mass;
pub mod power;
pub mod time;

use std::ops::{Div, Mul};

use serde::{Deserialize, Serialize};

/// Dimensioned `f64`.
///
/// The const parameters are the exponents of power, time, electric current, mass and money.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    PartialEq,
    PartialOrd,
    Serialize,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::From,
    derive_more::FromStr,
    derive_more::Neg,
    derive_more::Sub,
    derive_more::SubAssign,
    derive_more::Sum,
)]
#[serde(transparent)]
pub struct Quantity<
    const POWER: isize,
    const TIME: isize,
    const CURRENT: isize,
    const MASS: isize,
    const COST: isize,
>(pub f64);

impl<const POWER: isize, const TIME: isize, const CURRENT: isize, const MASS: isize, const COST: isize>
    Quantity<POWER, TIME, CURRENT, MASS, COST>
{
    pub const ZERO: Self = Self(0.0);

    pub const fn min(self, rhs: Self) -> Self {
        Self(self.0.min(rhs.0))
    }

    pub const fn max(self, rhs: Self) -> Self {
        Self(self.0.max(rhs.0))
    }

    pub const fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl<const POWER: isize, const TIME: isize, const CURRENT: isize, const MASS: isize, const COST: isize>
    Mul<f64> for Quantity<POWER, TIME, CURRENT, MASS, COST>
{
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl<const POWER: isize, const TIME: isize, const CURRENT: isize, const MASS: isize, const COST: isize>
    Div<f64> for Quantity<POWER, TIME, CURRENT, MASS, COST>
{
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Self(self.0 / rhs)
    }
}

/// Same-dimension division yields a bare ratio.
impl<const POWER: isize, const TIME: isize, const CURRENT: isize, const MASS: isize, const COST: isize>
    Div<Self> for Quantity<POWER, TIME, CURRENT, MASS, COST>
{
    type Output = f64;

    fn div(self, rhs: Self) -> Self::Output {
        self.0 / rhs.0
    }
}
