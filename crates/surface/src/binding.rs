//! Ownership of render resources across regenerations.
//!
//! A [`MeshBuffer`] is plain data, but whatever a renderer builds from it
//! (vertex buffers, VAOs, ...) has to be released explicitly. [`MeshSlot`]
//! releases the old resource before the replacement is uploaded and bound.
//! [`SurfaceView`] only regenerates when its configuration actually changed.

use crate::{config::SurfaceConfig, generate::generate_mesh, MeshBuffer};

use tracing::debug;

/// A resource created from a [`MeshBuffer`] that must be freed explicitly.
pub trait RenderResource {
  fn release(&mut self);
}

/// Holds at most one bound render resource.
#[derive(Debug)]
pub struct MeshSlot<R: RenderResource> {
  bound: Option<R>,
  revision: u64,
}
impl<R: RenderResource> MeshSlot<R> {
  pub fn new() -> Self {
    Self {
      bound: None,
      revision: 0,
    }
  }

  pub fn bound(&self) -> Option<&R> {
    self.bound.as_ref()
  }
  pub fn is_bound(&self) -> bool {
    self.bound.is_some()
  }
  /// Number of buffers bound so far.
  pub fn revision(&self) -> u64 {
    self.revision
  }

  /// Releases the current resource, then uploads `buffer` and binds the result.
  pub fn bind<F>(&mut self, buffer: &MeshBuffer, upload: F) -> u64
  where
    F: FnOnce(&MeshBuffer) -> R,
  {
    self.unbind();
    self.bound = Some(upload(buffer));
    self.revision += 1;
    debug!(
      revision = self.revision,
      nvertices = buffer.nvertices(),
      "bound mesh"
    );
    self.revision
  }

  pub fn unbind(&mut self) {
    if let Some(mut old) = self.bound.take() {
      old.release();
    }
  }
}
impl<R: RenderResource> Default for MeshSlot<R> {
  fn default() -> Self {
    Self::new()
  }
}
impl<R: RenderResource> Drop for MeshSlot<R> {
  fn drop(&mut self) {
    self.unbind();
  }
}

/// Change driven regeneration of a surface.
///
/// Generation is quadratic in the resolution, so it happens once per
/// configuration change and not once per frame.
#[derive(Debug, Default)]
pub struct SurfaceView {
  config: SurfaceConfig,
  mesh: Option<MeshBuffer>,
  ngenerations: usize,
}
impl SurfaceView {
  pub fn new(config: SurfaceConfig) -> Self {
    Self {
      config,
      mesh: None,
      ngenerations: 0,
    }
  }

  pub fn config(&self) -> &SurfaceConfig {
    &self.config
  }
  pub fn ngenerations(&self) -> usize {
    self.ngenerations
  }
  pub fn is_stale(&self) -> bool {
    self.mesh.is_none()
  }

  /// Replaces the configuration. Returns whether it differed.
  pub fn set_config(&mut self, config: SurfaceConfig) -> bool {
    if config == self.config {
      return false;
    }
    self.config = config;
    self.mesh = None;
    true
  }

  /// Edits the configuration in place and invalidates the mesh if it changed.
  pub fn update<T>(&mut self, edit: impl FnOnce(&mut SurfaceConfig) -> T) -> T {
    let mut config = self.config.clone();
    let out = edit(&mut config);
    self.set_config(config);
    out
  }

  /// The mesh of the current configuration, generating it if needed.
  pub fn mesh(&mut self) -> &MeshBuffer {
    let config = &self.config;
    let ngenerations = &mut self.ngenerations;
    self.mesh.get_or_insert_with(|| {
      *ngenerations += 1;
      generate_mesh(config)
    })
  }

  /// A copy of the freshly generated mesh if the configuration changed since
  /// the last generation, [`None`] otherwise.
  pub fn take_if_stale(&mut self) -> Option<MeshBuffer> {
    if !self.is_stale() {
      return None;
    }
    Some(self.mesh().clone())
  }
}

#[cfg(test)]
mod test {
  use super::*;
  use crate::config::VisualizationMode;

  use std::{cell::RefCell, rc::Rc};

  struct FakeGpuMesh {
    id: u64,
    log: Rc<RefCell<Vec<String>>>,
  }
  impl RenderResource for FakeGpuMesh {
    fn release(&mut self) {
      self.log.borrow_mut().push(format!("release {}", self.id));
    }
  }

  #[test]
  fn releases_before_rebinding() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut slot = MeshSlot::new();
    let buffer = MeshBuffer::default();

    for id in 1..=3 {
      let log_upload = log.clone();
      slot.bind(&buffer, |_| {
        log_upload.borrow_mut().push(format!("upload {id}"));
        FakeGpuMesh {
          id,
          log: log_upload.clone(),
        }
      });
    }
    assert_eq!(slot.revision(), 3);
    drop(slot);

    assert_eq!(
      *log.borrow(),
      [
        "upload 1",
        "release 1",
        "upload 2",
        "release 2",
        "upload 3",
        "release 3"
      ]
    );
  }

  #[test]
  fn regenerates_only_on_change() {
    let terms = SurfaceConfig::default().terms().to_vec();
    let config = SurfaceConfig::new(terms, 4.0, 6, VisualizationMode::Amplitude).unwrap();
    let mut view = SurfaceView::new(config.clone());
    assert!(view.is_stale());

    assert_eq!(view.mesh().nvertices(), 49);
    view.mesh();
    assert_eq!(view.ngenerations(), 1);

    assert!(!view.set_config(config));
    assert!(view.take_if_stale().is_none());

    view.update(|c| c.set_resolution(3)).unwrap();
    let mesh = view.take_if_stale().unwrap();
    assert_eq!(mesh.nvertices(), 16);
    assert_eq!(view.ngenerations(), 2);

    view.update(|c| c.set_resolution(3)).unwrap();
    assert!(!view.is_stale());
  }
}
