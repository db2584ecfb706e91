use harmonics::{HarmonicIndex, OrbitalInfo, Order};
use surface::{generate_single, generate_superposition, io, SingleConfig, SurfaceConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
  tracing_subscriber::fmt::init();
  std::fs::create_dir_all("out")?;

  let mut config = SingleConfig::default();
  config.set_resolution(64)?;
  for l in 0..=3 {
    for m in -(l as Order)..=l as Order {
      let index = HarmonicIndex::new(l, m)?;
      config.set_degree(l);
      config.set_order(m);

      let info = OrbitalInfo::new(index);
      let surface = generate_single(&config);
      println!(
        "{index}: {} orbital, {}, symmetry {}, r_max={:.3}",
        info.orbital_type(),
        info.polynomial(),
        info.symmetry(),
        surface.bounding_radius()
      );
      io::save_obj_to_file(&surface, format!("out/harmonic_l{l}_m{m}.obj"))?;
    }
  }

  let hybrid = SurfaceConfig::default();
  let surface = generate_superposition(&hybrid);
  io::save_obj_to_file(&surface, "out/superposition.obj")?;

  Ok(())
}
