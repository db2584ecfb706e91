//! Triangle meshes of real spherical harmonics.
//!
//! The surface $r(theta, phi) = a |f(theta, phi)|$ (or $a f^2$) of a single
//! harmonic or of a linear combination $f = sum_i c_i Y_(l_i)^(m_i)$ is sampled on
//! a regular $(theta, phi)$ grid, colored by the sign of $f$ and returned as
//! flat render buffers.
//!
//! The renderer frame has the physical polar axis $z$ pointing up ($y$).

extern crate nalgebra as na;

pub mod binding;
pub mod buffer;
pub mod config;
pub mod generate;
pub mod grid;
pub mod io;
pub mod surface;

pub use buffer::MeshBuffer;
pub use config::{SingleConfig, SurfaceConfig, VisualizationMode};
pub use generate::{generate_mesh, generate_single, generate_superposition};
pub use surface::HarmonicSurface;

pub type VertexIdx = usize;
