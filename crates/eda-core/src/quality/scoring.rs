//! Composite quality score.

/// Combine missingness and raised flags into a score in [0, 1].
///
/// The score starts at 1.0, loses the mean missing share and then
/// `flag_penalty` per raised flag. It never increases with more
/// missingness or more flags.
pub fn quality_score(mean_missing_share: f64, raised_flags: usize, flag_penalty: f64) -> f64 {
    let score = 1.0 - mean_missing_share - flag_penalty * raised_flags as f64;
    score.clamp(0.0, 1.0)
}
