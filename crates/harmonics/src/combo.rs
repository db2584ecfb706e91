//! Factorials as floating point products.
//!
//! Integer factorials overflow at $21!$, which is well inside the range of
//! degrees we want to evaluate, so all of these return `f64`.

pub fn factorial(num: usize) -> f64 {
  (1..=num).map(|k| k as f64).product()
}

/// $n!! = n (n-2) (n-4) ...$ down to 1 or 2, with $0!! = 1$.
pub fn double_factorial(num: usize) -> f64 {
  (1..=num).rev().step_by(2).map(|k| k as f64).product()
}

/// $n! / k!$ for $k <= n$, without computing either factorial.
pub fn factorial_ratio(n: usize, k: usize) -> f64 {
  debug_assert!(k <= n);
  (k + 1..=n).map(|i| i as f64).product()
}
