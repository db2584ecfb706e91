#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HarmonicError {
  #[error("invalid harmonic index (l={degree}, m={order}): requires 0 <= |m| <= l")]
  InvalidHarmonicIndex { degree: isize, order: isize },
  #[error("invalid configuration: {0}")]
  InvalidConfiguration(String),
}

pub type Result<T> = std::result::Result<T, HarmonicError>;
