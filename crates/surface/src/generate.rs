use crate::{
  config::{SingleConfig, SurfaceConfig, VisualizationMode},
  grid::{spherical2render, SphericalGrid},
  surface::{vertex_normals, HarmonicSurface},
  MeshBuffer,
};

use harmonics::{phase_color, Degree, SphericalFunction, DEGREE_PRECISION_LIMIT};
use rayon::prelude::*;
use tracing::{debug, debug_span, warn};

/// Surface of one harmonic, displaced according to the configured mode.
pub fn generate_single(config: &SingleConfig) -> HarmonicSurface {
  let index = config.index();
  let _span = debug_span!(
    "generate_single",
    %index,
    resolution = config.resolution(),
    mode = ?config.mode()
  )
  .entered();
  check_precision(index.degree());

  let grid = SphericalGrid::new(config.resolution());
  let surface = sample_surface(&index, grid, config.amplitude(), config.mode());
  debug!(
    nvertices = surface.nvertices(),
    ntriangles = surface.ntriangles(),
    "generated surface"
  );
  surface
}

/// Surface of $f = sum_i c_i Y_(l_i)^(m_i)$ with radius $a |f|$.
///
/// The mode of the configuration is not consulted: the density of a sum is
/// not the sum of densities.
pub fn generate_superposition(config: &SurfaceConfig) -> HarmonicSurface {
  let _span = debug_span!(
    "generate_superposition",
    nterms = config.nterms(),
    resolution = config.resolution()
  )
  .entered();
  check_precision(config.max_degree());

  let grid = SphericalGrid::new(config.resolution());
  let surface = sample_surface(
    config.terms(),
    grid,
    config.amplitude(),
    VisualizationMode::Amplitude,
  );
  debug!(
    nvertices = surface.nvertices(),
    ntriangles = surface.ntriangles(),
    "generated surface"
  );
  surface
}

/// Render buffers for any configuration.
///
/// A single term is drawn like [`generate_single`] with its weight applied,
/// honoring the mode. Several terms go through [`generate_superposition`].
pub fn generate_mesh(config: &SurfaceConfig) -> MeshBuffer {
  let surface = match config.terms() {
    [term] => {
      let _span = debug_span!(
        "generate_term",
        index = %term.index(),
        weight = term.weight(),
        resolution = config.resolution(),
        mode = ?config.mode()
      )
      .entered();
      check_precision(term.degree());
      let grid = SphericalGrid::new(config.resolution());
      sample_surface(term, grid, config.amplitude(), config.mode())
    }
    _ => {
      if config.mode() == VisualizationMode::Density {
        warn!(
          nterms = config.nterms(),
          "density mode is not defined for a superposition, using amplitude"
        );
      }
      generate_superposition(config)
    }
  };
  MeshBuffer::from(surface)
}

/// Samples `field` on `grid` and builds the displaced, colored surface.
///
/// Rows of constant $theta$ are sampled in parallel and concatenated in
/// order, so the vertex numbering is the row-major one of [`SphericalGrid`].
/// Colors always come from the signed value, never from its square.
pub fn sample_surface<F>(
  field: &F,
  grid: SphericalGrid,
  amplitude: f64,
  mode: VisualizationMode,
) -> HarmonicSurface
where
  F: SphericalFunction + Sync + ?Sized,
{
  let rows: Vec<Vec<(f64, na::Vector3<f64>)>> = (0..grid.nvertices_axis())
    .into_par_iter()
    .map(|irow| {
      let theta = grid.theta(irow);
      (0..grid.nvertices_axis())
        .map(|icol| {
          let phi = grid.phi(icol);
          let value = field.eval(theta, phi);
          let radius = mode.radius(value, amplitude);
          (value, spherical2render(radius, theta, phi))
        })
        .collect()
    })
    .collect();

  let nvertices = grid.nvertices();
  let mut coords = na::Matrix3xX::zeros(nvertices);
  let mut values = Vec::with_capacity(nvertices);
  let mut colors = Vec::with_capacity(nvertices);
  for (ivertex, (value, coord)) in rows.into_iter().flatten().enumerate() {
    coords.set_column(ivertex, &coord);
    values.push(value);
    colors.push(phase_color(value));
  }

  let triangles = grid.triangles();
  let nvertices_axis = grid.nvertices_axis();
  let normals = vertex_normals(&coords, &triangles, |ivertex| {
    grid.direction(ivertex / nvertices_axis, ivertex % nvertices_axis)
  });

  HarmonicSurface::new(triangles, coords, normals, values, colors)
}

fn check_precision(degree: Degree) {
  if degree > DEGREE_PRECISION_LIMIT {
    warn!(
      degree,
      limit = DEGREE_PRECISION_LIMIT,
      "degree past the precision limit of the normalization"
    );
  }
}
