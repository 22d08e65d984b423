/// Qualitative read of a fractional xG value. The engine emits the tone;
/// turning it into display text is the report layer's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Fraction above 0.75: one good chance away from the next goal.
    NearNextGoal,
    /// Fraction below 0.25: the scoreline looks fragile.
    FragileScoreline,
    /// Anything in between.
    Unsettled,
}

const UPPER: f64 = 0.75;
const LOWER: f64 = 0.25;

/// Tone driven purely by the fractional part of `xg`, with strict bounds
/// on both sides.
pub fn fractional_tone(xg: f64) -> (Tone, f64) {
    let fraction = xg - xg.floor();
    let tone = if fraction > UPPER {
        Tone::NearNextGoal
    } else if fraction < LOWER {
        Tone::FragileScoreline
    } else {
        Tone::Unsettled
    };
    (tone, fraction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_fraction_is_near_next_goal() {
        assert_eq!(fractional_tone(1.80).0, Tone::NearNextGoal);
        assert_eq!(fractional_tone(0.76).0, Tone::NearNextGoal);
    }

    #[test]
    fn low_fraction_is_fragile() {
        assert_eq!(fractional_tone(2.10).0, Tone::FragileScoreline);
        assert_eq!(fractional_tone(3.0).0, Tone::FragileScoreline);
    }

    #[test]
    fn boundaries_fall_to_unsettled() {
        // Strict inequalities: exactly 0.25 and 0.75 are "unsettled".
        assert_eq!(fractional_tone(1.25).0, Tone::Unsettled);
        assert_eq!(fractional_tone(1.75).0, Tone::Unsettled);
        assert_eq!(fractional_tone(0.5).0, Tone::Unsettled);
    }

    #[test]
    fn fraction_is_reported_alongside_tone() {
        let (_, fraction) = fractional_tone(2.35);
        assert!((fraction - 0.35).abs() < 1e-12);
    }
}
