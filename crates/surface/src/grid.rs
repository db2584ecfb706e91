use crate::VertexIdx;

use itertools::iproduct;
use std::f64::consts::{PI, TAU};

/// Regular grid over $[0, pi] times [0, tau]$ with $R$ cells along each axis.
///
/// Vertices are numbered row-major: row $y$ has constant $theta$ and holds
/// $R+1$ vertices of increasing $phi$. The first and last row are the poles
/// and the first and last column coincide (the seam), none of them are merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SphericalGrid {
  ncells_axis: usize,
}
impl SphericalGrid {
  pub fn new(ncells_axis: usize) -> Self {
    assert!(ncells_axis >= 1, "grid needs at least one cell per axis");
    Self { ncells_axis }
  }

  pub fn ncells_axis(&self) -> usize {
    self.ncells_axis
  }
  pub fn nvertices_axis(&self) -> usize {
    self.ncells_axis + 1
  }
  pub fn nvertices(&self) -> usize {
    self.nvertices_axis().pow(2)
  }
  pub fn ncells(&self) -> usize {
    self.ncells_axis.pow(2)
  }
  pub fn ntriangles(&self) -> usize {
    2 * self.ncells()
  }

  /// Polar angle of row `irow`.
  pub fn theta(&self, irow: usize) -> f64 {
    irow as f64 / self.ncells_axis as f64 * PI
  }
  /// Azimuth of column `icol`.
  pub fn phi(&self, icol: usize) -> f64 {
    icol as f64 / self.ncells_axis as f64 * TAU
  }

  pub fn vertex_idx(&self, irow: usize, icol: usize) -> VertexIdx {
    self.nvertices_axis() * irow + icol
  }

  /// Unit direction of a grid vertex in the renderer frame.
  pub fn direction(&self, irow: usize, icol: usize) -> na::Vector3<f64> {
    spherical2render(1.0, self.theta(irow), self.phi(icol))
  }

  /// Two triangles per cell, with outward facing counter-clockwise winding.
  ///
  /// For the cell with corners
  /// `a = (y, x)`, `b = (y+1, x)`, `c = (y+1, x+1)`, `d = (y, x+1)`
  /// the triangles are `(a, d, b)` and `(b, d, c)`.
  pub fn triangles(&self) -> Vec<[VertexIdx; 3]> {
    let mut triangles = Vec::with_capacity(self.ntriangles());
    for (y, x) in iproduct!(0..self.ncells_axis, 0..self.ncells_axis) {
      let a = self.vertex_idx(y, x);
      let b = self.vertex_idx(y + 1, x);
      let c = self.vertex_idx(y + 1, x + 1);
      let d = self.vertex_idx(y, x + 1);
      triangles.push([a, d, b]);
      triangles.push([b, d, c]);
    }
    triangles
  }
}

/// Spherical coordinates to the renderer frame.
///
/// Physical $(x, y, z)$ become $(x, z, y)$: the polar axis points up.
pub fn spherical2render(r: f64, theta: f64, phi: f64) -> na::Vector3<f64> {
  let (sin_theta, cos_theta) = theta.sin_cos();
  let (sin_phi, cos_phi) = phi.sin_cos();
  na::Vector3::new(
    r * sin_theta * cos_phi,
    r * cos_theta,
    r * sin_theta * sin_phi,
  )
}

#[cfg(test)]
mod test {
  use super::*;

  use approx::assert_relative_eq;

  #[test]
  fn counts() {
    for r in 1..10 {
      let grid = SphericalGrid::new(r);
      assert_eq!(grid.nvertices(), (r + 1) * (r + 1));
      let triangles = grid.triangles();
      assert_eq!(triangles.len(), 2 * r * r);
      assert!(triangles.iter().flatten().all(|&v| v < grid.nvertices()));
    }
  }

  #[test]
  fn single_cell_winding() {
    let grid = SphericalGrid::new(1);
    assert_eq!(grid.triangles(), vec![[0, 1, 2], [2, 1, 3]]);
  }

  #[test]
  fn second_row_indices() {
    let grid = SphericalGrid::new(2);
    let triangles = grid.triangles();
    // cell (1, 0): a=3, b=6, c=7, d=4
    assert_eq!(triangles[4], [3, 4, 6]);
    assert_eq!(triangles[5], [6, 4, 7]);
  }

  #[test]
  fn angles_span_sphere() {
    let grid = SphericalGrid::new(8);
    assert_eq!(grid.theta(0), 0.0);
    assert_relative_eq!(grid.theta(8), PI);
    assert_eq!(grid.phi(0), 0.0);
    assert_relative_eq!(grid.phi(8), TAU);
    assert_relative_eq!(grid.theta(4), PI / 2.0);
  }

  #[test]
  fn render_frame() {
    assert_relative_eq!(spherical2render(2.0, 0.0, 1.3), na::Vector3::new(0.0, 2.0, 0.0));
    assert_relative_eq!(
      spherical2render(1.0, PI / 2.0, 0.0),
      na::Vector3::x(),
      epsilon = 1e-15
    );
    assert_relative_eq!(
      spherical2render(1.0, PI / 2.0, PI / 2.0),
      na::Vector3::z(),
      epsilon = 1e-15
    );
  }
}
