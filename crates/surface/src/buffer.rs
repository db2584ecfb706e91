use crate::HarmonicSurface;

/// Flat, GPU ready vertex and index buffers.
///
/// `positions`, `colors` and `normals` hold three `f32` per vertex, `indices`
/// three vertex indices per triangle. The buffer is owned by whoever asked for
/// it; any render resource created from it has to be released before the
/// buffer of the next generation is bound, see [`crate::binding::MeshSlot`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuffer {
  pub positions: Vec<f32>,
  pub colors: Vec<f32>,
  pub normals: Vec<f32>,
  pub indices: Vec<u32>,
}
impl MeshBuffer {
  pub fn nvertices(&self) -> usize {
    self.positions.len() / 3
  }
  pub fn ntriangles(&self) -> usize {
    self.indices.len() / 3
  }

  pub fn position(&self, ivertex: usize) -> [f32; 3] {
    triple(&self.positions, ivertex)
  }
  pub fn color(&self, ivertex: usize) -> [f32; 3] {
    triple(&self.colors, ivertex)
  }
  pub fn normal(&self, ivertex: usize) -> [f32; 3] {
    triple(&self.normals, ivertex)
  }
  pub fn triangle(&self, itriangle: usize) -> [u32; 3] {
    triple(&self.indices, itriangle)
  }

  pub fn triangle_iter(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
    self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
  }
}

fn triple<T: Copy>(data: &[T], i: usize) -> [T; 3] {
  [data[3 * i], data[3 * i + 1], data[3 * i + 2]]
}

impl From<&HarmonicSurface> for MeshBuffer {
  fn from(surface: &HarmonicSurface) -> Self {
    let nvertices = surface.nvertices();
    let mut positions = Vec::with_capacity(3 * nvertices);
    let mut colors = Vec::with_capacity(3 * nvertices);
    let mut normals = Vec::with_capacity(3 * nvertices);
    for ((v, n), c) in surface
      .vertex_coords()
      .column_iter()
      .zip(surface.vertex_normals().column_iter())
      .zip(surface.colors())
    {
      positions.extend(v.iter().map(|&x| x as f32));
      normals.extend(n.iter().map(|&x| x as f32));
      colors.extend(c.iter().map(|&x| x as f32));
    }

    let indices = surface
      .triangles()
      .iter()
      .flatten()
      .map(|&i| i as u32)
      .collect();

    Self {
      positions,
      colors,
      normals,
      indices,
    }
  }
}
impl From<HarmonicSurface> for MeshBuffer {
  fn from(surface: HarmonicSurface) -> Self {
    Self::from(&surface)
  }
}
