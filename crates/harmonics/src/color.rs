/// Color encoding of the sign and magnitude of a field value.
///
/// Values near zero are pale. Growing positive values saturate towards red,
/// growing negative values towards blue. Saturation is reached at $|v| = 0.5$.
/// Zero counts as negative.
pub fn phase_color(value: f64) -> [f64; 3] {
  let intensity = (value.abs() * 2.0).min(1.0);
  let fade = 1.0 - intensity;
  if value > 0.0 {
    [0.9, 0.2 + fade * 0.8, 0.2 + fade * 0.8]
  } else {
    [0.2 + fade * 0.8, 0.5 + fade * 0.5, 1.0]
  }
}

#[cfg(test)]
mod test {
  use super::*;

  use approx::assert_relative_eq;

  #[test]
  fn saturated_ends() {
    assert_relative_eq!(&phase_color(0.5)[..], &[0.9, 0.2, 0.2][..]);
    assert_relative_eq!(&phase_color(3.0)[..], &[0.9, 0.2, 0.2][..]);
    assert_relative_eq!(&phase_color(-0.5)[..], &[0.2, 0.5, 1.0][..]);
    assert_relative_eq!(&phase_color(-3.0)[..], &[0.2, 0.5, 1.0][..]);
  }

  #[test]
  fn zero_is_pale() {
    let zero = phase_color(0.0);
    assert_relative_eq!(&zero[..], &[1.0, 1.0, 1.0][..], epsilon = 1e-15);
    assert_ne!(zero, phase_color(1.0));
    assert_ne!(zero, phase_color(-1.0));
  }

  #[test]
  fn sign_picks_warm_or_cool() {
    for i in 1..=10 {
      let v = i as f64 * 0.05;
      let [pr, pg, pb] = phase_color(v);
      let [nr, ng, nb] = phase_color(-v);
      // warm side keeps red fixed, cool side keeps blue fixed
      assert_eq!(pr, 0.9);
      assert_eq!(nb, 1.0);
      assert_eq!(pg, pb);
      assert!(nb >= nr && ng >= nr);
      // the same fade drives both sides
      assert_eq!(pg, nr);
    }
  }

  #[test]
  fn in_unit_cube() {
    for i in -40..=40 {
      let c = phase_color(i as f64 * 0.03);
      assert!(c.iter().all(|&x| (0.0..=1.0).contains(&x)));
    }
  }
}
