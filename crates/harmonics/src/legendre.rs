use crate::{Degree, Order};

/// Associated Legendre polynomial $P_l^m (x)$ for $x in [-1, 1]$.
///
/// Includes the Condon-Shortley phase $(-1)^m$ and only depends on $|m|$.
/// Evaluated by upward recurrence in the degree, starting from
/// $P_m^m (x) = (-1)^m (2m-1)!! (1-x^2)^(m/2)$, which stays stable for large $l$
/// where the closed form does not.
///
/// Returns 0 for $|m| > l$.
pub fn legendre_p(l: Degree, m: Order, x: f64) -> f64 {
  let m = m.unsigned_abs();
  if m > l {
    return 0.0;
  }

  // $P_m^m$ as a running product, so neither $(2m-1)!!$ nor the power is
  // formed on its own.
  let mut pmm = 1.0;
  if m > 0 {
    let somx2 = ((1.0 - x) * (1.0 + x)).sqrt();
    let mut fact = 1.0;
    for _ in 0..m {
      pmm *= -fact * somx2;
      fact += 2.0;
    }
  }
  if l == m {
    return pmm;
  }

  let mut pmmp1 = x * (2 * m + 1) as f64 * pmm;
  if l == m + 1 {
    return pmmp1;
  }

  let mut pll = 0.0;
  for ll in m + 2..=l {
    pll = ((2 * ll - 1) as f64 * x * pmmp1 - (ll + m - 1) as f64 * pmm) / (ll - m) as f64;
    pmm = pmmp1;
    pmmp1 = pll;
  }
  pll
}
