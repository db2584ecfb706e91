use crate::{HarmonicSurface, MeshBuffer};

use std::{
  fs::File,
  io::{BufWriter, Write},
  path::Path,
};

pub fn save_obj_to_file(surface: &HarmonicSurface, path: impl AsRef<Path>) -> std::io::Result<()> {
  let file = File::create(path)?;
  let mut writer = BufWriter::new(file);
  writer.write_all(surface.to_obj_string().as_bytes())?;
  writer.flush()
}

/// Raw little endian dump: vertex count, triangle count (both `u32`), then
/// positions, colors, normals (`f32`) and indices (`u32`).
pub fn write_mesh_buffer<W: Write>(mut writer: W, buffer: &MeshBuffer) -> std::io::Result<()> {
  for count in [buffer.nvertices(), buffer.ntriangles()] {
    let count = u32::try_from(count).map_err(|_| {
      std::io::Error::new(
        std::io::ErrorKind::InvalidInput,
        format!("mesh too large for u32 counts: {count}"),
      )
    })?;
    writer.write_all(&count.to_le_bytes())?;
  }
  for attribute in [&buffer.positions, &buffer.colors, &buffer.normals] {
    for x in attribute {
      writer.write_all(&x.to_le_bytes())?;
    }
  }
  for i in &buffer.indices {
    writer.write_all(&i.to_le_bytes())?;
  }
  Ok(())
}

pub fn save_mesh_buffer_to_file(buffer: &MeshBuffer, path: impl AsRef<Path>) -> std::io::Result<()> {
  let file = File::create(path)?;
  let mut writer = BufWriter::new(file);
  write_mesh_buffer(&mut writer, buffer)?;
  writer.flush()
}
