//! Real spherical harmonics.
//!
//! - Associated Legendre polynomials by stable upward recurrence.
//! - Normalized real harmonics $Y_l^m (theta, phi)$ and weighted sums of them.
//! - Sign to color mapping and display helpers.
//!
//! Everything in here is a pure function of its arguments.

pub mod color;
pub mod combo;
pub mod error;
pub mod harmonic;
pub mod index;
pub mod label;
pub mod legendre;
pub mod quadrature;

pub use color::phase_color;
pub use error::{HarmonicError, Result};
pub use harmonic::{normalization, real_spherical_harmonic, SphericalFunction};
pub use index::{HarmonicIndex, HarmonicTerm};
pub use label::{polynomial_label, OrbitalInfo, OrbitalType};
pub use legendre::legendre_p;

/// Degree $l$ of a harmonic.
pub type Degree = usize;
/// Order $m$ of a harmonic, $|m| <= l$.
pub type Order = isize;

/// Largest degree the controls of an interactive viewer should offer.
pub const DEGREE_LIMIT: Degree = 10;

/// Beyond this degree $(l+|m|)!$ overflows `f64` for $|m| = l$.
///
/// Evaluation still returns a number, but it is no longer meaningful.
pub const DEGREE_PRECISION_LIMIT: Degree = 85;
