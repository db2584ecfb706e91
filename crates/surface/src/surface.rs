use crate::{buffer::MeshBuffer, VertexIdx};

/// A generated harmonic surface in the renderer frame.
///
/// Per vertex it stores the position, the signed field value it was displaced
/// by, the color derived from that value and a unit normal.
#[derive(Debug, Clone)]
pub struct HarmonicSurface {
  triangles: Vec<[VertexIdx; 3]>,
  coords: na::Matrix3xX<f64>,
  normals: na::Matrix3xX<f64>,
  values: Vec<f64>,
  colors: Vec<[f64; 3]>,
}
impl HarmonicSurface {
  pub fn new(
    triangles: Vec<[VertexIdx; 3]>,
    coords: na::Matrix3xX<f64>,
    normals: na::Matrix3xX<f64>,
    values: Vec<f64>,
    colors: Vec<[f64; 3]>,
  ) -> Self {
    let nvertices = coords.ncols();
    assert_eq!(normals.ncols(), nvertices);
    assert_eq!(values.len(), nvertices);
    assert_eq!(colors.len(), nvertices);
    Self {
      triangles,
      coords,
      normals,
      values,
      colors,
    }
  }

  pub fn triangles(&self) -> &[[VertexIdx; 3]] {
    &self.triangles
  }
  pub fn vertex_coords(&self) -> &na::Matrix3xX<f64> {
    &self.coords
  }
  pub fn vertex_normals(&self) -> &na::Matrix3xX<f64> {
    &self.normals
  }
  /// Signed field value at each vertex, before taking magnitudes.
  pub fn values(&self) -> &[f64] {
    &self.values
  }
  pub fn colors(&self) -> &[[f64; 3]] {
    &self.colors
  }

  pub fn nvertices(&self) -> usize {
    self.coords.ncols()
  }
  pub fn ntriangles(&self) -> usize {
    self.triangles.len()
  }

  /// Largest distance of a vertex from the origin.
  pub fn bounding_radius(&self) -> f64 {
    self
      .coords
      .column_iter()
      .map(|c| c.norm())
      .fold(0.0, f64::max)
  }

  pub fn to_mesh_buffer(&self) -> MeshBuffer {
    MeshBuffer::from(self)
  }

  /// Wavefront OBJ with per vertex colors and normals.
  pub fn to_obj_string(&self) -> String {
    let vertices = self
      .coords
      .column_iter()
      .zip(&self.colors)
      .map(|(v, [r, g, b])| {
        format!(
          "v {:.6} {:.6} {:.6} {r:.4} {g:.4} {b:.4}\n",
          v.x, v.y, v.z
        )
      });
    let normals = self
      .normals
      .column_iter()
      .map(|n| format!("vn {:.6} {:.6} {:.6}\n", n.x, n.y, n.z));
    let faces = self.triangles.iter().map(|t| {
      // .obj uses 1-indexing.
      let [i, j, k] = t.map(|i| i + 1);
      format!("f {i}//{i} {j}//{j} {k}//{k}\n")
    });
    vertices.chain(normals).chain(faces).collect()
  }
}

/// Area weighted vertex normals.
///
/// Every triangle adds its unnormalized face normal $(v_1 - v_0) times (v_2 - v_0)$
/// to its three vertices. Vertices that only touch degenerate triangles
/// (collapsed poles, nodes of the field at the origin) get `fallback(ivertex)`.
pub fn vertex_normals(
  coords: &na::Matrix3xX<f64>,
  triangles: &[[VertexIdx; 3]],
  fallback: impl Fn(VertexIdx) -> na::Vector3<f64>,
) -> na::Matrix3xX<f64> {
  let mut normals = na::Matrix3xX::zeros(coords.ncols());
  for ivs in triangles {
    let vs = ivs.map(|i| coords.column(i));
    let e0 = vs[1] - vs[0];
    let e1 = vs[2] - vs[0];
    let face_normal = e0.cross(&e1);
    for &iv in ivs {
      let mut n = normals.column_mut(iv);
      n += &face_normal;
    }
  }
  for (iv, mut n) in normals.column_iter_mut().enumerate() {
    let unit = n
      .try_normalize(f64::EPSILON)
      .unwrap_or_else(|| fallback(iv));
    n.copy_from(&unit);
  }
  normals
}
