//! Perceptual power level for UI volume meters.

/// Mean absolute amplitudes below this value use the linear mapping.
const LINEAR_CEILING: f64 = 1251.0;
/// Divisor of the linear regime; a mean amplitude of 1250 reads as 10.
const LINEAR_DIVISOR: f64 = 1250.0;
/// Reference amplitude of the logarithmic regime.
const LOG_REFERENCE: f64 = 10_000.0;

/// Maps a chunk's absolute-sample sum and sample count to a 0–100 level.
///
/// The mean amplitude `abs_sum / sample_count` is scaled linearly below
/// 1251 and logarithmically above it, with both regimes meeting near 10.
/// The linear branch keeps quiet input legible on a meter where a log curve
/// would saturate; the log branch compresses the loud range without capping
/// out early. A zero sample count reads as silence, not an error.
pub fn power_level(abs_sum: u64, sample_count: usize) -> u8 {
    if sample_count == 0 {
        return 0;
    }

    let power = abs_sum as f64 / sample_count as f64;
    let level = if power < LINEAR_CEILING {
        (power / LINEAR_DIVISOR * 10.0).round()
    } else {
        ((1.0 + (power / LOG_REFERENCE).log10()) * 100.0)
            .clamp(0.0, 100.0)
            .round()
    };

    level as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn silence_reads_as_zero() {
        assert_eq!(power_level(0, 1), 0);
        assert_eq!(power_level(0, 4096), 0);
    }

    #[test]
    fn zero_sample_count_is_guarded() {
        assert_eq!(power_level(0, 0), 0);
        assert_eq!(power_level(12345, 0), 0);
    }

    #[test]
    fn linear_regime_reaches_ten_at_its_ceiling() {
        assert_eq!(power_level(1250, 1), 10);
        assert_eq!(power_level(625, 1), 5);
    }

    #[test]
    fn regimes_meet_without_a_jump() {
        let below = power_level(1250, 1);
        let above = power_level(1251, 1);
        assert!(above >= below);
        assert!(above - below <= 1);
    }

    #[test]
    fn log_regime_compresses_loud_input() {
        // mean amplitude 5000: (1 + log10(0.5)) * 100 rounds to 70
        assert_eq!(power_level(5000, 1), 70);
        assert_eq!(power_level(10_000, 1), 100);
    }

    #[test]
    fn level_is_capped_at_one_hundred() {
        assert_eq!(power_level(u64::from(u32::MAX), 1), 100);
        assert_eq!(power_level(32767 * 4096, 4096), 100);
    }

    #[test]
    fn level_never_decreases_with_amplitude() {
        let mut previous = 0;
        for abs_sum in (0..200_000u64).step_by(37) {
            let level = power_level(abs_sum, 1);
            assert!(level >= previous, "level dropped at abs_sum {abs_sum}");
            assert!(level <= 100);
            previous = level;
        }
    }
}
