//! # SCAD Units
//!
//! Lengths tagged with their unit at compile time.
//!
//! Geometry trees take plain millimeters. Part dimensions are usually written
//! in whatever unit the drawing uses (inches for pegboard, scale feet for
//! model railroad buildings), so a [`Length`] carries the magnitude together
//! with a zero-sized unit marker and converts to millimeters at the boundary.
//!
//! ## Example
//!
//! ```rust
//! use scad_units::{inches, mm, Inches, Length, Millimeters};
//!
//! let spacing = inches(1.0);
//! let clearance = mm(0.4);
//!
//! // Different units never mix without an explicit conversion.
//! let total: Length<Millimeters> = spacing.convert() + clearance;
//! assert!((total.to_mm() - 25.8).abs() < 1e-9);
//!
//! let back: Length<Inches> = total.convert();
//! assert!((back.value() - 25.8 / 25.4).abs() < 1e-12);
//! ```

use std::fmt;
use std::iter::Sum;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use config::constants::{HO_SCALE_RATIO, INCHES_PER_FOOT, MM_PER_INCH, N_SCALE_RATIO};

// =============================================================================
// UNIT MARKERS
// =============================================================================

/// A length unit known at compile time.
pub trait Unit: Copy + Default + PartialEq + PartialOrd + fmt::Debug {
    /// Millimeters in one of this unit.
    const MM_PER_UNIT: f64;
    /// Suffix used by `Display`.
    const SYMBOL: &'static str;
}

macro_rules! unit {
    ($(#[$meta:meta])* $name:ident, $mm:expr, $symbol:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
        pub struct $name;

        impl Unit for $name {
            const MM_PER_UNIT: f64 = $mm;
            const SYMBOL: &'static str = $symbol;
        }
    };
}

unit!(
    /// Canonical unit of every geometry tree.
    Millimeters, 1.0, "mm"
);
unit!(
    /// Imperial inch.
    Inches, MM_PER_INCH, "in"
);
unit!(
    /// Imperial foot.
    Feet, MM_PER_INCH * INCHES_PER_FOOT, "ft"
);
unit!(
    /// One prototype inch at N scale (1:160).
    NScaleInches, MM_PER_INCH / N_SCALE_RATIO, "n\""
);
unit!(
    /// One prototype foot at N scale (1:160).
    NScaleFeet, MM_PER_INCH * INCHES_PER_FOOT / N_SCALE_RATIO, "n'"
);
unit!(
    /// One prototype inch at HO scale (1:87).
    HoScaleInches, MM_PER_INCH / HO_SCALE_RATIO, "ho\""
);

// =============================================================================
// LENGTH
// =============================================================================

/// A magnitude in unit `U`.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Length<U: Unit> {
    value: f64,
    unit: PhantomData<U>,
}

impl<U: Unit> Length<U> {
    pub const fn new(value: f64) -> Self {
        Self {
            value,
            unit: PhantomData,
        }
    }

    /// Magnitude in `U`.
    pub const fn value(self) -> f64 {
        self.value
    }

    /// Magnitude in millimeters, the unit geometry constructors expect.
    pub fn to_mm(self) -> f64 {
        self.value * U::MM_PER_UNIT
    }

    /// Same length expressed in `V`.
    pub fn convert<V: Unit>(self) -> Length<V> {
        Length::new(self.to_mm() / V::MM_PER_UNIT)
    }

    pub fn abs(self) -> Self {
        Self::new(self.value.abs())
    }

    pub fn min(self, other: Self) -> Self {
        Self::new(self.value.min(other.value))
    }

    pub fn max(self, other: Self) -> Self {
        Self::new(self.value.max(other.value))
    }
}

/// Millimeter components of a length triple, ready for a cube size or offset.
pub fn mm3<U: Unit>(lengths: [Length<U>; 3]) -> [f64; 3] {
    lengths.map(Length::to_mm)
}

pub const fn mm(value: f64) -> Length<Millimeters> {
    Length::new(value)
}

pub const fn inches(value: f64) -> Length<Inches> {
    Length::new(value)
}

pub const fn feet(value: f64) -> Length<Feet> {
    Length::new(value)
}

pub const fn n_scale_inches(value: f64) -> Length<NScaleInches> {
    Length::new(value)
}

pub const fn n_scale_feet(value: f64) -> Length<NScaleFeet> {
    Length::new(value)
}

pub const fn ho_scale_inches(value: f64) -> Length<HoScaleInches> {
    Length::new(value)
}

impl<U: Unit> fmt::Display for Length<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, U::SYMBOL)
    }
}

// =============================================================================
// ARITHMETIC
// =============================================================================

impl<U: Unit> Add for Length<U> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.value + rhs.value)
    }
}

impl<U: Unit> Sub for Length<U> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.value - rhs.value)
    }
}

impl<U: Unit> AddAssign for Length<U> {
    fn add_assign(&mut self, rhs: Self) {
        self.value += rhs.value;
    }
}

impl<U: Unit> SubAssign for Length<U> {
    fn sub_assign(&mut self, rhs: Self) {
        self.value -= rhs.value;
    }
}

impl<U: Unit> Neg for Length<U> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.value)
    }
}

impl<U: Unit> Mul<f64> for Length<U> {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.value * rhs)
    }
}

impl<U: Unit> Mul<Length<U>> for f64 {
    type Output = Length<U>;

    fn mul(self, rhs: Length<U>) -> Length<U> {
        rhs * self
    }
}

impl<U: Unit> Div<f64> for Length<U> {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self::new(self.value / rhs)
    }
}

/// Ratio of two lengths in the same unit.
impl<U: Unit> Div for Length<U> {
    type Output = f64;

    fn div(self, rhs: Self) -> f64 {
        self.value / rhs.value
    }
}

impl<U: Unit> Sum for Length<U> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_inch_to_mm() {
        assert_relative_eq!(inches(1.0).to_mm(), 25.4);
        assert_relative_eq!(inches(3.25).to_mm(), 82.55, epsilon = 1e-12);
    }

    #[test]
    fn test_scale_units() {
        assert_relative_eq!(n_scale_feet(1.0).to_mm(), 304.8 / 160.0, epsilon = 1e-12);
        assert_relative_eq!(n_scale_inches(12.0).to_mm(), n_scale_feet(1.0).to_mm(), epsilon = 1e-12);
        assert_relative_eq!(ho_scale_inches(87.0).to_mm(), 25.4, epsilon = 1e-12);
        assert_relative_eq!(feet(1.0).to_mm(), 304.8, epsilon = 1e-12);
    }

    #[test]
    fn test_convert_round_trip() {
        let original = inches(0.245);
        let there: Length<Millimeters> = original.convert();
        let back: Length<Inches> = there.convert();
        assert_relative_eq!(back.value(), original.value(), epsilon = 1e-12);
    }

    #[test]
    fn test_arithmetic_stays_in_unit() {
        let thickness = inches(0.06);
        let clearance = inches(0.25);
        let total = thickness + clearance + 2.0 * thickness;
        assert_relative_eq!(total.value(), 0.37, epsilon = 1e-12);
        assert_relative_eq!((total / 2.0).value(), 0.185, epsilon = 1e-12);
        assert_relative_eq!(total / thickness, 0.37 / 0.06, epsilon = 1e-12);
        assert_relative_eq!((-thickness).abs().value(), 0.06);
    }

    #[test]
    fn test_sum_and_bounds() {
        let parts = [mm(1.0), mm(2.5), mm(0.5)];
        let total: Length<Millimeters> = parts.iter().copied().sum();
        assert_relative_eq!(total.to_mm(), 4.0);
        assert_eq!(mm(1.0).max(mm(2.0)), mm(2.0));
        assert_eq!(mm(1.0).min(mm(2.0)), mm(1.0));
        assert!(mm(1.0) < mm(1.5));
    }

    #[test]
    fn test_mm3() {
        let size = mm3([inches(1.0), inches(2.0), inches(0.5)]);
        assert_relative_eq!(size[0], 25.4);
        assert_relative_eq!(size[1], 50.8);
        assert_relative_eq!(size[2], 12.7);
    }

    #[test]
    fn test_display() {
        assert_eq!(inches(3.0).to_string(), "3in");
        assert_eq!(mm(2.75).to_string(), "2.75mm");
    }
}
