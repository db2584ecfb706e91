use crate::{error::HarmonicError, Degree, Order, Result, DEGREE_LIMIT};

use std::fmt;

/// A valid pair $(l, m)$ with $|m| <= l$.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HarmonicIndex {
  degree: Degree,
  order: Order,
}
// constructors
impl HarmonicIndex {
  pub fn new(degree: Degree, order: Order) -> Result<Self> {
    if order.unsigned_abs() > degree {
      return Err(HarmonicError::InvalidHarmonicIndex {
        degree: degree as isize,
        order,
      });
    }
    Ok(Self { degree, order })
  }

  /// For indices coming from untyped input, where the degree may be negative.
  pub fn from_signed(degree: isize, order: isize) -> Result<Self> {
    if degree < 0 {
      return Err(HarmonicError::InvalidHarmonicIndex { degree, order });
    }
    Self::new(degree as Degree, order)
  }

  /// Clamps the order into $[-l, l]$. Always valid.
  pub fn clamped(degree: Degree, order: Order) -> Self {
    let bound = Order::try_from(degree).unwrap_or(Order::MAX);
    let order = order.clamp(-bound, bound);
    Self { degree, order }
  }

  /// For raw slider input: degree into $[0, l_max]$, then order into $[-l, l]$.
  pub fn from_controls(degree: isize, order: isize) -> Self {
    let degree = degree.clamp(0, DEGREE_LIMIT as isize) as Degree;
    Self::clamped(degree, order)
  }

  pub fn monopole() -> Self {
    Self {
      degree: 0,
      order: 0,
    }
  }
}
// getters
impl HarmonicIndex {
  pub fn degree(&self) -> Degree {
    self.degree
  }
  pub fn order(&self) -> Order {
    self.order
  }
}
// updates
impl HarmonicIndex {
  /// Changes the degree and pulls the order back into range.
  pub fn with_degree(self, degree: Degree) -> Self {
    Self::clamped(degree, self.order)
  }
  pub fn with_order_clamped(self, order: Order) -> Self {
    Self::clamped(self.degree, order)
  }
}
impl Default for HarmonicIndex {
  fn default() -> Self {
    Self::monopole()
  }
}
impl fmt::Display for HarmonicIndex {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Y({},{})", self.degree, self.order)
  }
}

/// One addend $c Y_l^m$ of a linear combination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HarmonicTerm {
  index: HarmonicIndex,
  weight: f64,
}
impl HarmonicTerm {
  pub fn new(index: HarmonicIndex, weight: f64) -> Self {
    Self { index, weight }
  }
  pub fn unweighted(index: HarmonicIndex) -> Self {
    Self::new(index, 1.0)
  }

  pub fn index(&self) -> HarmonicIndex {
    self.index
  }
  pub fn degree(&self) -> Degree {
    self.index.degree()
  }
  pub fn order(&self) -> Order {
    self.index.order()
  }
  pub fn weight(&self) -> f64 {
    self.weight
  }

  pub fn set_index(&mut self, index: HarmonicIndex) {
    self.index = index;
  }
  pub fn set_weight(&mut self, weight: f64) {
    self.weight = weight;
  }
}
