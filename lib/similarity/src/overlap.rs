//! Set-overlap and numeric-closeness functions for metadata fields
//!
//! All functions return a similarity in [0.0, 1.0] where 1.0 means identical.

use ahash::AHashSet;

/// Jaccard index of two string collections treated as sets
///
/// Returns `None` when either side is empty: the field is absent and must
/// not contribute to a score.
pub fn jaccard<S: AsRef<str>>(a: &[S], b: &[S]) -> Option<f32> {
    let set_a: AHashSet<&str> = a.iter().map(AsRef::as_ref).collect();
    let set_b: AHashSet<&str> = b.iter().map(AsRef::as_ref).collect();

    if set_a.is_empty() || set_b.is_empty() {
        return None;
    }

    let intersection = set_a.intersection(&set_b).count();
    let union = set_a.union(&set_b).count();

    Some(intersection as f32 / union.max(1) as f32)
}

/// Closeness of two values on a fixed scale: 1 - |a - b| / range
pub fn absolute_closeness(a: f32, b: f32, range: f32) -> f32 {
    if range <= 0.0 {
        return 0.0;
    }
    (1.0 - (a - b).abs() / range).clamp(0.0, 1.0)
}

/// Relative closeness: 1 - |a - b| / max(a, b)
pub fn relative_closeness(a: f64, b: f64) -> f32 {
    let max = a.abs().max(b.abs());
    if max == 0.0 {
        1.0
    } else {
        (1.0 - (a - b).abs() / max).clamp(0.0, 1.0) as f32
    }
}
