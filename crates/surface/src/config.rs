use harmonics::{Degree, HarmonicError, HarmonicIndex, HarmonicTerm, Order, Result};

/// How the field value $f$ becomes the radius of the surface.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisualizationMode {
  /// $r = a |f|$
  #[default]
  Amplitude,
  /// $r = a f^2$, the probability density.
  Density,
}
impl VisualizationMode {
  pub fn radius(self, value: f64, amplitude: f64) -> f64 {
    match self {
      Self::Amplitude => value.abs() * amplitude,
      Self::Density => value * value * amplitude,
    }
  }
}

/// Largest resolution whose $(R+1)^2$ vertices are addressable by `u32` indices.
pub const RESOLUTION_LIMIT: usize = 65534;

fn check_resolution(resolution: usize) -> Result<()> {
  if resolution < 1 {
    return Err(HarmonicError::InvalidConfiguration(
      "resolution must be at least 1".to_string(),
    ));
  }
  if resolution > RESOLUTION_LIMIT {
    return Err(HarmonicError::InvalidConfiguration(format!(
      "resolution must be at most {RESOLUTION_LIMIT}, got {resolution}"
    )));
  }
  Ok(())
}

fn check_amplitude(amplitude: f64) -> Result<()> {
  if !amplitude.is_finite() || amplitude < 0.0 {
    return Err(HarmonicError::InvalidConfiguration(format!(
      "amplitude must be finite and non-negative, got {amplitude}"
    )));
  }
  Ok(())
}

fn check_weight(weight: f64) -> Result<()> {
  if !weight.is_finite() {
    return Err(HarmonicError::InvalidConfiguration(format!(
      "term weight must be finite, got {weight}"
    )));
  }
  Ok(())
}

/// Surface of one harmonic $Y_l^m$.
#[derive(Debug, Clone, PartialEq)]
pub struct SingleConfig {
  index: HarmonicIndex,
  amplitude: f64,
  resolution: usize,
  mode: VisualizationMode,
}
impl SingleConfig {
  pub fn new(
    index: HarmonicIndex,
    amplitude: f64,
    resolution: usize,
    mode: VisualizationMode,
  ) -> Result<Self> {
    check_amplitude(amplitude)?;
    check_resolution(resolution)?;
    Ok(Self {
      index,
      amplitude,
      resolution,
      mode,
    })
  }

  pub fn index(&self) -> HarmonicIndex {
    self.index
  }
  pub fn amplitude(&self) -> f64 {
    self.amplitude
  }
  pub fn resolution(&self) -> usize {
    self.resolution
  }
  pub fn mode(&self) -> VisualizationMode {
    self.mode
  }

  /// Changes the degree, clamping the order into range.
  pub fn set_degree(&mut self, degree: Degree) {
    self.index = self.index.with_degree(degree);
  }
  pub fn set_order(&mut self, order: Order) {
    self.index = self.index.with_order_clamped(order);
  }
  pub fn set_amplitude(&mut self, amplitude: f64) -> Result<()> {
    check_amplitude(amplitude)?;
    self.amplitude = amplitude;
    Ok(())
  }
  pub fn set_resolution(&mut self, resolution: usize) -> Result<()> {
    check_resolution(resolution)?;
    self.resolution = resolution;
    Ok(())
  }
  pub fn set_mode(&mut self, mode: VisualizationMode) {
    self.mode = mode;
  }
}
impl Default for SingleConfig {
  /// The $d_(z^2)$ orbital.
  fn default() -> Self {
    Self {
      index: HarmonicIndex::clamped(2, 0),
      amplitude: 4.0,
      resolution: 128,
      mode: VisualizationMode::Amplitude,
    }
  }
}

/// Surface of a linear combination of harmonics.
///
/// Always holds at least one term. The mode only has an effect with exactly
/// one term, a sum is always shown by amplitude.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceConfig {
  terms: Vec<HarmonicTerm>,
  amplitude: f64,
  resolution: usize,
  mode: VisualizationMode,
}
// constructors
impl SurfaceConfig {
  pub fn new(
    terms: Vec<HarmonicTerm>,
    amplitude: f64,
    resolution: usize,
    mode: VisualizationMode,
  ) -> Result<Self> {
    if terms.is_empty() {
      return Err(HarmonicError::InvalidConfiguration(
        "a superposition needs at least one term".to_string(),
      ));
    }
    for term in &terms {
      check_weight(term.weight())?;
    }
    check_amplitude(amplitude)?;
    check_resolution(resolution)?;
    Ok(Self {
      terms,
      amplitude,
      resolution,
      mode,
    })
  }
}
// getters
impl SurfaceConfig {
  pub fn terms(&self) -> &[HarmonicTerm] {
    &self.terms
  }
  pub fn nterms(&self) -> usize {
    self.terms.len()
  }
  pub fn amplitude(&self) -> f64 {
    self.amplitude
  }
  pub fn resolution(&self) -> usize {
    self.resolution
  }
  pub fn mode(&self) -> VisualizationMode {
    self.mode
  }
  pub fn max_degree(&self) -> Degree {
    self.terms.iter().map(|t| t.degree()).max().unwrap_or(0)
  }
}
// updates
impl SurfaceConfig {
  pub fn set_amplitude(&mut self, amplitude: f64) -> Result<()> {
    check_amplitude(amplitude)?;
    self.amplitude = amplitude;
    Ok(())
  }
  pub fn set_resolution(&mut self, resolution: usize) -> Result<()> {
    check_resolution(resolution)?;
    self.resolution = resolution;
    Ok(())
  }
  pub fn set_mode(&mut self, mode: VisualizationMode) {
    self.mode = mode;
  }

  pub fn push_term(&mut self, term: HarmonicTerm) -> Result<()> {
    check_weight(term.weight())?;
    self.terms.push(term);
    Ok(())
  }

  /// Removes and returns term `iterm`. The last remaining term is kept.
  pub fn remove_term(&mut self, iterm: usize) -> Result<HarmonicTerm> {
    self.term_exists(iterm)?;
    if self.terms.len() == 1 {
      return Err(HarmonicError::InvalidConfiguration(
        "cannot remove the last term".to_string(),
      ));
    }
    Ok(self.terms.remove(iterm))
  }

  /// Partial update of term `iterm`.
  ///
  /// The order is clamped into $[-l, l]$ of the resulting degree.
  pub fn update_term(
    &mut self,
    iterm: usize,
    degree: Option<Degree>,
    order: Option<Order>,
    weight: Option<f64>,
  ) -> Result<()> {
    self.term_exists(iterm)?;
    if let Some(weight) = weight {
      check_weight(weight)?;
    }

    let term = &mut self.terms[iterm];
    let degree = degree.unwrap_or(term.degree());
    let order = order.unwrap_or(term.order());
    term.set_index(HarmonicIndex::clamped(degree, order));
    if let Some(weight) = weight {
      term.set_weight(weight);
    }
    Ok(())
  }

  fn term_exists(&self, iterm: usize) -> Result<()> {
    if iterm >= self.terms.len() {
      return Err(HarmonicError::InvalidConfiguration(format!(
        "no term {iterm}, there are {}",
        self.terms.len()
      )));
    }
    Ok(())
  }
}
impl Default for SurfaceConfig {
  /// An $s$ orbital with a bit of $p_z$ mixed in.
  fn default() -> Self {
    let terms = vec![
      HarmonicTerm::new(HarmonicIndex::clamped(0, 0), 1.0),
      HarmonicTerm::new(HarmonicIndex::clamped(1, 0), 0.5),
    ];
    Self {
      terms,
      amplitude: 4.0,
      resolution: 128,
      mode: VisualizationMode::Amplitude,
    }
  }
}
impl From<SingleConfig> for SurfaceConfig {
  fn from(single: SingleConfig) -> Self {
    Self {
      terms: vec![HarmonicTerm::unweighted(single.index)],
      amplitude: single.amplitude,
      resolution: single.resolution,
      mode: single.mode,
    }
  }
}
