//! Elementary rotation matrices
//!
//! Right-handed rotations about the coordinate axes, angle in radians:
//! ```text
//! Rx(θ) = [1  0   0 ]   Ry(θ) = [ c  0  s]   Rz(θ) = [c  -s  0]
//!         [0  c  -s ]           [ 0  1  0]           [s   c  0]
//!         [0  s   c ]           [-s  0  c]           [0   0  1]
//! ```

use nalgebra::Matrix3;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Rotation about the x-axis
#[must_use]
pub fn rx(theta: f64) -> Matrix3<f64> {
    let (s, c) = theta.sin_cos();
    Matrix3::new(
        1.0, 0.0, 0.0,
        0.0, c, -s,
        0.0, s, c,
    )
}

/// Rotation about the y-axis
#[must_use]
pub fn ry(theta: f64) -> Matrix3<f64> {
    let (s, c) = theta.sin_cos();
    Matrix3::new(
        c, 0.0, s,
        0.0, 1.0, 0.0,
        -s, 0.0, c,
    )
}

/// Rotation about the z-axis
#[must_use]
pub fn rz(theta: f64) -> Matrix3<f64> {
    let (s, c) = theta.sin_cos();
    Matrix3::new(
        c, -s, 0.0,
        s, c, 0.0,
        0.0, 0.0, 1.0,
    )
}

/// A coordinate axis to rotate about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// The x-axis
    X,
    /// The y-axis
    Y,
    /// The z-axis
    Z,
}

impl Axis {
    /// Rotation matrix about this axis
    #[must_use]
    pub fn rotation(self, theta: f64) -> Matrix3<f64> {
        match self {
            Self::X => rx(theta),
            Self::Y => ry(theta),
            Self::Z => rz(theta),
        }
    }
}

/// Axis name that is not x, y or z
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown axis '{0}', expected x, y or z")]
pub struct AxisParseError(String);

impl FromStr for Axis {
    type Err = AxisParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "x" => Ok(Self::X),
            "y" => Ok(Self::Y),
            "z" => Ok(Self::Z),
            _ => Err(AxisParseError(s.to_string())),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => f.write_str("x"),
            Self::Y => f.write_str("y"),
            Self::Z => f.write_str("z"),
        }
    }
}
