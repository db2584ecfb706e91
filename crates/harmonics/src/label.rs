//! Display helpers. None of this takes part in geometry.

use crate::{Degree, HarmonicIndex, Order};

use std::fmt;

pub const HIGH_ORDER_LABEL: &str = "High Order Polynomial";

/// Cartesian polynomial form of $r^l Y_l^m$, up to normalization.
///
/// Tabulated for $l <= 3$.
pub fn polynomial_label(l: Degree, m: Order) -> &'static str {
  match (l, m) {
    (0, 0) => "1",

    (1, -1) => "y",
    (1, 0) => "z",
    (1, 1) => "x",

    (2, -2) => "xy",
    (2, -1) => "yz",
    (2, 0) => "2z² - x² - y²",
    (2, 1) => "xz",
    (2, 2) => "x² - y²",

    (3, -3) => "y(3x² - y²)",
    (3, -2) => "xyz",
    (3, -1) => "y(4z² - x² - y²)",
    (3, 0) => "z(2z² - 3x² - 3y²)",
    (3, 1) => "x(4z² - x² - y²)",
    (3, 2) => "z(x² - y²)",
    (3, 3) => "x(x² - 3y²)",

    _ => HIGH_ORDER_LABEL,
  }
}

/// Spectroscopic letter of an orbital with angular momentum $l$.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrbitalType {
  S,
  P,
  D,
  F,
  G,
  Complex,
}
impl OrbitalType {
  pub fn from_degree(l: Degree) -> Self {
    match l {
      0 => Self::S,
      1 => Self::P,
      2 => Self::D,
      3 => Self::F,
      4 => Self::G,
      _ => Self::Complex,
    }
  }
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::S => "s",
      Self::P => "p",
      Self::D => "d",
      Self::F => "f",
      Self::G => "g",
      Self::Complex => "complex",
    }
  }
}
impl fmt::Display for OrbitalType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Nodal structure and symmetry of a single harmonic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrbitalInfo {
  index: HarmonicIndex,
}
impl OrbitalInfo {
  pub fn new(index: HarmonicIndex) -> Self {
    Self { index }
  }

  pub fn index(&self) -> HarmonicIndex {
    self.index
  }
  pub fn orbital_type(&self) -> OrbitalType {
    OrbitalType::from_degree(self.index.degree())
  }
  pub fn polynomial(&self) -> &'static str {
    polynomial_label(self.index.degree(), self.index.order())
  }

  /// Total number of nodal lines, always $l$.
  pub fn angular_nodes(&self) -> usize {
    self.index.degree()
  }
  /// Great circles through the poles, $|m|$.
  pub fn azimuthal_nodes(&self) -> usize {
    self.index.order().unsigned_abs()
  }
  /// Circles of constant latitude, $l - |m|$.
  pub fn polar_nodes(&self) -> usize {
    self.angular_nodes() - self.azimuthal_nodes()
  }

  /// `Axial` for $m = 0$, the cyclic group `C|m|` otherwise.
  pub fn symmetry(&self) -> String {
    match self.azimuthal_nodes() {
      0 => "Axial".to_string(),
      m => format!("C{m}"),
    }
  }

  pub fn orientation(&self) -> String {
    let m = self.index.order();
    if self.index.degree() == 0 {
      "Symmetric (Spherical)".to_string()
    } else if m == 0 {
      "Aligned with Z-axis (Vertical)".to_string()
    } else if m > 0 {
      format!("Aligned with Cos({m}φ). (Often X-aligned)")
    } else {
      format!("Aligned with Sin({}φ). (Often Y-aligned)", m.unsigned_abs())
    }
  }

  /// Rotation about the polar axis, in degrees, that maps $Y_l^m$ onto
  /// $Y_l^(-m)$. [`None`] for $m = 0$.
  pub fn opposite_order_rotation(&self) -> Option<f64> {
    match self.azimuthal_nodes() {
      0 => None,
      m => Some(90.0 / m as f64),
    }
  }
}
