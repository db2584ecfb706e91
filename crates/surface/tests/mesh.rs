//! Properties of generated render buffers, checked against direct evaluation
//! of the harmonics.

use harmonics::{real_spherical_harmonic, HarmonicIndex, HarmonicTerm};
use surface::{
  generate_mesh, generate_single, generate_superposition, grid::SphericalGrid, SingleConfig,
  SurfaceConfig, VisualizationMode,
};

use approx::assert_relative_eq;

fn single(l: usize, m: isize, amplitude: f64, resolution: usize) -> SingleConfig {
  let index = HarmonicIndex::new(l, m).unwrap();
  SingleConfig::new(index, amplitude, resolution, VisualizationMode::Amplitude).unwrap()
}

#[test]
fn d_z2_scenario() {
  let config = single(2, 0, 4.0, 4);
  let mesh = generate_single(&config).to_mesh_buffer();

  assert_eq!(mesh.positions.len(), 3 * 25);
  assert_eq!(mesh.colors.len(), 3 * 25);
  assert_eq!(mesh.normals.len(), 3 * 25);
  assert_eq!(mesh.nvertices(), 25);
  assert_eq!(mesh.ntriangles(), 32);

  // The whole first row collapses onto the north pole.
  for icol in 0..=4 {
    let phi = icol as f64 / 4.0 * std::f64::consts::TAU;
    let expected = real_spherical_harmonic(2, 0, 0.0, phi).abs() * 4.0;
    let [x, y, z] = mesh.position(icol);
    assert_eq!(x, 0.0);
    assert_eq!(z, 0.0);
    assert_relative_eq!(y as f64, expected, max_relative = 1e-6);
  }
}

#[test]
fn counts_for_any_resolution() {
  for resolution in [1, 2, 5, 16, 33] {
    let mesh = generate_mesh(&SurfaceConfig::from(single(3, -2, 1.0, resolution)));
    let nvertices = (resolution + 1) * (resolution + 1);
    assert_eq!(mesh.nvertices(), nvertices);
    assert_eq!(mesh.ntriangles(), 2 * resolution * resolution);
    assert!(mesh.indices.iter().all(|&i| (i as usize) < nvertices));
    assert!(mesh.colors.iter().all(|c| (0.0..=1.0).contains(c)));
  }
}

#[test]
fn winding_is_preserved() {
  let mesh = generate_mesh(&SurfaceConfig::from(single(1, 1, 1.0, 3)));
  // row length 4: cell (0, 0) is a=0, b=4, c=5, d=1
  assert_eq!(mesh.triangle(0), [0, 1, 4]);
  assert_eq!(mesh.triangle(1), [4, 1, 5]);
  // cell (2, 2) is a=10, b=14, c=15, d=11
  assert_eq!(mesh.triangle(16), [10, 11, 14]);
  assert_eq!(mesh.triangle(17), [14, 11, 15]);
}

#[test]
fn unit_weight_superposition_equals_single() {
  for (l, m) in [(0, 0), (1, -1), (2, 1), (3, 3)] {
    let config = single(l, m, 2.5, 10);
    let single_surface = generate_single(&config);

    let term = HarmonicTerm::new(config.index(), 1.0);
    let sum_config = SurfaceConfig::new(vec![term], 2.5, 10, VisualizationMode::Amplitude).unwrap();
    let sum = generate_superposition(&sum_config);

    assert_eq!(single_surface.nvertices(), sum.nvertices());
    assert_eq!(single_surface.triangles(), sum.triangles());
    assert_relative_eq!(
      single_surface.vertex_coords(),
      sum.vertex_coords(),
      epsilon = 1e-12
    );
    assert_eq!(single_surface.colors(), sum.colors());
  }
}

#[test]
fn colors_follow_sign_of_sum() {
  // $Y_0^0 - Y_1^0$ is negative only near the north pole.
  let terms = vec![
    HarmonicTerm::new(HarmonicIndex::new(0, 0).unwrap(), 1.0),
    HarmonicTerm::new(HarmonicIndex::new(1, 0).unwrap(), -1.0),
  ];
  let config = SurfaceConfig::new(terms, 1.0, 8, VisualizationMode::Amplitude).unwrap();
  let mesh = generate_mesh(&config);
  let grid = SphericalGrid::new(8);

  let north = mesh.color(grid.vertex_idx(0, 0));
  let south = mesh.color(grid.vertex_idx(8, 0));
  assert_eq!(north[2], 1.0);
  assert_relative_eq!(south[0], 0.9);
}

#[test]
fn normals_are_unit_length() {
  let mut config = SurfaceConfig::default();
  config.set_resolution(24).unwrap();
  let mesh = generate_mesh(&config);
  for ivertex in 0..mesh.nvertices() {
    let [x, y, z] = mesh.normal(ivertex);
    let norm = (x * x + y * y + z * z).sqrt();
    assert_relative_eq!(norm, 1.0, epsilon = 1e-5);
  }
}
