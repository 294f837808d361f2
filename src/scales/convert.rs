//! Linear interpolation between two scales' reference points

use super::scale::Scale;

/// Convert `temperature`, expressed in `from`, into `to`.
///
/// Both scales are assumed linear between their melting and boiling points.
/// A degenerate `from` (equal reference points) yields a non-finite result.
pub fn convert(from: &Scale, to: &Scale, temperature: f64) -> f64 {
    if from == to {
        return temperature;
    }
    to.melting_point + (temperature - from.melting_point) * to.span() / from.span()
}
