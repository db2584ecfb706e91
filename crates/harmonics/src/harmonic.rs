use crate::{
  combo::factorial_ratio, legendre::legendre_p, Degree, HarmonicIndex, HarmonicTerm, Order,
};

use std::f64::consts::{PI, SQRT_2};

/// Normalization constant $sqrt((2l+1)/(4 pi) (l-|m|)!/(l+|m|)!)$.
///
/// The $sqrt(2)$ of the $m != 0$ real harmonics is not included here.
/// The factorial ratio is formed as a single product of $2|m|$ terms.
pub fn normalization(l: Degree, m: Order) -> f64 {
  let m = m.unsigned_abs();
  if m > l {
    return 0.0;
  }
  let pre = (2 * l + 1) as f64 / (4.0 * PI) / factorial_ratio(l + m, l - m);
  pre.sqrt()
}

/// Real spherical harmonic $Y_l^m (theta, phi)$.
///
/// Takes polar angle $theta in [0, pi]$ and azimuth $phi in [0, tau)$.
/// Positive orders carry $cos(m phi)$, negative orders $sin(|m| phi)$.
pub fn real_spherical_harmonic(l: Degree, m: Order, theta: f64, phi: f64) -> f64 {
  let n = normalization(l, m);
  let p = legendre_p(l, m, theta.cos());
  match m {
    0 => n * p,
    m if m > 0 => SQRT_2 * n * p * (m as f64 * phi).cos(),
    m => SQRT_2 * n * p * (m.unsigned_abs() as f64 * phi).sin(),
  }
}

/// A real valued function on the unit sphere in spherical coordinates.
pub trait SphericalFunction {
  fn eval(&self, theta: f64, phi: f64) -> f64;
}

impl SphericalFunction for HarmonicIndex {
  fn eval(&self, theta: f64, phi: f64) -> f64 {
    real_spherical_harmonic(self.degree(), self.order(), theta, phi)
  }
}

impl SphericalFunction for HarmonicTerm {
  fn eval(&self, theta: f64, phi: f64) -> f64 {
    self.weight() * self.index().eval(theta, phi)
  }
}

/// Linear combination $sum_i c_i Y_(l_i)^(m_i)$.
impl SphericalFunction for [HarmonicTerm] {
  fn eval(&self, theta: f64, phi: f64) -> f64 {
    self.iter().map(|term| term.eval(theta, phi)).sum()
  }
}
