//! Tensor product midpoint quadrature on the unit sphere.
//!
//! Integrates in $(theta, phi)$ with the area element $sin(theta)$, using
//! $n$ cells in $theta$ and $2n$ in $phi$. Periodicity in $phi$ makes the
//! azimuthal part exact for trigonometric polynomials of degree below $2n$.

use crate::harmonic::SphericalFunction;

use itertools::iproduct;
use std::f64::consts::{PI, TAU};

/// $integral_(S^2) f dif A$.
pub fn integrate_sphere<F>(f: F, n: usize) -> f64
where
  F: Fn(f64, f64) -> f64,
{
  assert!(n > 0, "quadrature needs at least one cell");
  let dtheta = PI / n as f64;
  let dphi = TAU / (2 * n) as f64;
  iproduct!(0..n, 0..2 * n)
    .map(|(itheta, iphi)| {
      let theta = (itheta as f64 + 0.5) * dtheta;
      let phi = (iphi as f64 + 0.5) * dphi;
      f(theta, phi) * theta.sin()
    })
    .sum::<f64>()
    * dtheta
    * dphi
}

/// $L^2$ inner product $integral_(S^2) f g dif A$.
pub fn inner_product<F, G>(f: &F, g: &G, n: usize) -> f64
where
  F: SphericalFunction + ?Sized,
  G: SphericalFunction + ?Sized,
{
  integrate_sphere(|theta, phi| f.eval(theta, phi) * g.eval(theta, phi), n)
}

#[cfg(test)]
mod test {
  use super::*;

  use approx::assert_relative_eq;

  #[test]
  fn surface_area() {
    assert_relative_eq!(integrate_sphere(|_, _| 1.0, 128), 4.0 * PI, epsilon = 1e-3);
  }

  #[test]
  fn odd_in_polar_axis() {
    assert_relative_eq!(integrate_sphere(|theta, _| theta.cos(), 32), 0.0, epsilon = 1e-12);
  }
}
