// Angular similarity between word-frequency histograms.
//
// The score is the arccosine of a dot-product ratio:
//
//   acos( dot(a, b) / sqrt(dot(a, b) * dot(b, b)) )
//
// Note the denominator: it multiplies the cross product by the second
// histogram's self product, not dot(a, a) * dot(b, b). The measure is therefore
// asymmetric in its arguments and the ratio can exceed 1 when `a` carries more
// weight on the shared words than `b` does on itself. `conventional_angle` is
// the textbook cosine angle, kept alongside as a baseline.
//
// Undefined results are errors, never 0 or 1. A zero denominator gives
// `NoOverlap`: for `angular_similarity` that means no shared words (or an empty
// second histogram), for `conventional_angle` an empty histogram on either
// side. A ratio outside [-1, 1] gives `OutOfDomain`. Ratios within
// `ROUNDING_TOLERANCE` of the boundary are clamped onto it, so a histogram
// compared with itself is exactly 0 radians.

use std::f64::consts::FRAC_PI_2;

use thiserror::Error;
use tracing::debug;

use crate::text::Histogram;

/// How far past +/-1 a ratio may stray from rounding before it is an error.
pub const ROUNDING_TOLERANCE: f64 = 1e-12;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimilarityError {
    /// The denominator is zero: no shared words, or an empty histogram.
    #[error("histograms share no words; similarity is undefined")]
    NoOverlap,
    /// The cosine ratio fell outside the domain of acos.
    #[error("cosine ratio {ratio} is outside [-1, 1]; similarity is undefined")]
    OutOfDomain { ratio: f64 },
}

/// Sum of `a[w] * b[w]` over words present in both histograms.
///
/// Accumulates in u128: the product of two u64 counts always fits.
pub fn dot(a: &Histogram, b: &Histogram) -> u128 {
    a.iter()
        .filter(|(word, _)| b.contains(word))
        .map(|(word, count)| u128::from(count) * u128::from(b.get(word)))
        .sum()
}

/// Angle in radians between `a` and `b` using the cross-times-second denominator.
pub fn angular_similarity(a: &Histogram, b: &Histogram) -> Result<f64, SimilarityError> {
    let cross = dot(a, b) as f64;
    let denom = (cross * dot(b, b) as f64).sqrt();
    let angle = acos_ratio(cross, denom)?;
    debug!(cross, denom, angle, "Computed angular similarity");
    Ok(angle)
}

/// [`angular_similarity`] divided by pi/2.
pub fn normalized_similarity(a: &Histogram, b: &Histogram) -> Result<f64, SimilarityError> {
    Ok(angular_similarity(a, b)? / FRAC_PI_2)
}

/// Textbook cosine angle: `acos(dot(a, b) / sqrt(dot(a, a) * dot(b, b)))`.
pub fn conventional_angle(a: &Histogram, b: &Histogram) -> Result<f64, SimilarityError> {
    let cross = dot(a, b) as f64;
    let denom = (dot(a, a) as f64 * dot(b, b) as f64).sqrt();
    acos_ratio(cross, denom)
}

/// [`conventional_angle`] divided by pi/2.
pub fn normalized_conventional(a: &Histogram, b: &Histogram) -> Result<f64, SimilarityError> {
    Ok(conventional_angle(a, b)? / FRAC_PI_2)
}

fn acos_ratio(numerator: f64, denom: f64) -> Result<f64, SimilarityError> {
    if denom == 0.0 {
        return Err(SimilarityError::NoOverlap);
    }
    let ratio = numerator / denom;
    if ratio.abs() > 1.0 + ROUNDING_TOLERANCE || ratio.is_nan() {
        return Err(SimilarityError::OutOfDomain { ratio });
    }
    Ok(ratio.clamp(-1.0, 1.0).acos())
}
