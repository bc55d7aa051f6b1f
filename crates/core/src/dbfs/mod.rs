//! Decibels-relative-to-full-scale mapping for sample magnitudes.

/// Largest magnitude a signed 16-bit sample can carry.
pub const FULL_SCALE: f64 = 32767.0;

/// Stand-in for negative infinity on a meter that bottoms out at silence.
const SILENCE_FLOOR_DB: f64 = -100.0;
/// Smallest magnitude fed to the logarithm; zero would be undefined.
const MIN_MAGNITUDE: f64 = 0.1;

/// Maps a sample magnitude to a dBFS value in [-100, 0].
///
/// The input may be a true peak (largest absolute sample of a chunk) or a
/// mean magnitude; the mapping is agnostic to how it was derived. Values
/// outside [0.1, 32767] are clamped before taking the logarithm, and
/// non-finite input reads as silence.
pub fn dbfs(magnitude: f64) -> i32 {
    let magnitude = if magnitude.is_finite() { magnitude } else { 0.0 };
    let clamped = magnitude.clamp(MIN_MAGNITUDE, FULL_SCALE);
    let db = 20.0 * (clamped / FULL_SCALE).log10();
    db.max(SILENCE_FLOOR_DB).round() as i32
}
