//! The WCAG conformance levels and their pass/fail classification.

use crate::Float;

/// A WCAG conformance level.
///
/// The guidelines distinguish AA and AAA conformance and, for each, between
/// normal and large text, for four levels overall. Every level has a fixed
/// minimum contrast ratio that never changes with the colors under test.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Level {
    /// AA conformance for large text, requiring a ratio of at least 3.0.
    #[cfg_attr(feature = "serde", serde(rename = "AALarge"))]
    AaLarge,
    /// AA conformance for normal text, requiring a ratio of at least 4.5.
    #[cfg_attr(feature = "serde", serde(rename = "AA"))]
    Aa,
    /// AAA conformance for large text, requiring a ratio of at least 4.5.
    #[cfg_attr(feature = "serde", serde(rename = "AAALarge"))]
    AaaLarge,
    /// AAA conformance for normal text, requiring a ratio of at least 7.0.
    #[cfg_attr(feature = "serde", serde(rename = "AAA"))]
    Aaa,
}

impl Level {
    /// All four levels, from most to least lenient.
    pub const ALL: [Level; 4] = [Level::AaLarge, Level::Aa, Level::AaaLarge, Level::Aaa];

    /// Access this level's minimum contrast ratio.
    pub const fn threshold(&self) -> Float {
        match *self {
            Self::AaLarge => 3.0,
            Self::Aa | Self::AaaLarge => 4.5,
            Self::Aaa => 7.0,
        }
    }

    /// Rate the given contrast ratio against this level's threshold.
    ///
    /// A ratio exactly equal to the threshold passes.
    pub fn rate(&self, ratio: Float) -> Status {
        if ratio >= self.threshold() {
            Status::Pass
        } else {
            Status::Fail
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match *self {
            Self::AaLarge => "AA Large",
            Self::Aa => "AA",
            Self::AaaLarge => "AAA Large",
            Self::Aaa => "AAA",
        };

        f.write_str(s)
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// The binary outcome of rating a contrast ratio against a conformance level.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    Pass,
    Fail,
}

impl Status {
    /// Determine whether this status is a pass.
    pub const fn is_pass(&self) -> bool {
        matches!(*self, Self::Pass)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match *self {
            Self::Pass => "Pass",
            Self::Fail => "Fail",
        })
    }
}

// ====================================================================================================================

/// The pass/fail status of a contrast ratio for every conformance level.
///
/// Each level is rated independently, so a ratio of 5.0 passes AA large, AA,
/// and AAA large while failing AAA. The assessment is a pure function of the
/// ratio alone:
///
/// ```
/// # use contrastcheck::{Assessment, Level, Status};
/// let assessment = Assessment::new(4.5);
/// assert_eq!(assessment.get(Level::Aa), Status::Pass);
/// assert_eq!(assessment.get(Level::Aaa), Status::Fail);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Assessment {
    #[cfg_attr(feature = "serde", serde(rename = "AALarge"))]
    aa_large: Status,
    #[cfg_attr(feature = "serde", serde(rename = "AA"))]
    aa: Status,
    #[cfg_attr(feature = "serde", serde(rename = "AAALarge"))]
    aaa_large: Status,
    #[cfg_attr(feature = "serde", serde(rename = "AAA"))]
    aaa: Status,
}

impl Assessment {
    /// Rate the given contrast ratio against all four conformance levels.
    pub fn new(ratio: Float) -> Self {
        Self {
            aa_large: Level::AaLarge.rate(ratio),
            aa: Level::Aa.rate(ratio),
            aaa_large: Level::AaaLarge.rate(ratio),
            aaa: Level::Aaa.rate(ratio),
        }
    }

    /// Access the status for the given conformance level.
    pub const fn get(&self, level: Level) -> Status {
        match level {
            Level::AaLarge => self.aa_large,
            Level::Aa => self.aa,
            Level::AaaLarge => self.aaa_large,
            Level::Aaa => self.aaa,
        }
    }

    /// Determine whether every level passes.
    pub const fn all_pass(&self) -> bool {
        self.aa_large.is_pass() && self.aa.is_pass() && self.aaa_large.is_pass() && self.aaa.is_pass()
    }

    /// Determine whether at least one level passes.
    pub const fn any_pass(&self) -> bool {
        // AA large has the most lenient threshold.
        self.aa_large.is_pass()
    }
}

impl std::fmt::Display for Assessment {
    /// Format this assessment as a compact listing, one `level: status` entry
    /// per level, separated by commas.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, level) in Level::ALL.iter().enumerate() {
            if 0 < index {
                f.write_str(", ")?;
            }
            f.write_fmt(format_args!("{}: {}", level, self.get(*level)))?;
        }

        Ok(())
    }
}

// ====================================================================================================================


#[cfg(test)]
mod test {
    use super::{Assessment, Level, Status};

    #[test]
    fn test_thresholds() {
        assert_eq!(Level::AaLarge.threshold(), 3.0);
        assert_eq!(Level::Aa.threshold(), 4.5);
        assert_eq!(Level::AaaLarge.threshold(), 4.5);
        assert_eq!(Level::Aaa.threshold(), 7.0);
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        assert_eq!(Level::Aa.rate(4.5), Status::Pass);
        assert_eq!(Level::AaaLarge.rate(4.5), Status::Pass);
        assert_eq!(Level::Aa.rate(4.49999), Status::Fail);
        assert_eq!(Level::AaLarge.rate(3.0), Status::Pass);
        assert_eq!(Level::Aaa.rate(7.0), Status::Pass);
        assert_eq!(Level::Aaa.rate(6.99999), Status::Fail);
    }

    #[test]
    fn test_assessment() {
        let best = Assessment::new(21.0);
        assert!(best.all_pass(), "maximum contrast should pass every level");

        let worst = Assessment::new(1.0);
        assert!(!worst.any_pass(), "minimum contrast should fail every level");
        for level in Level::ALL {
            assert_eq!(worst.get(level), Status::Fail);
        }

        // Levels rate independently.
        let middling = Assessment::new(5.0);
        assert_eq!(middling.get(Level::AaLarge), Status::Pass);
        assert_eq!(middling.get(Level::Aa), Status::Pass);
        assert_eq!(middling.get(Level::AaaLarge), Status::Pass);
        assert_eq!(middling.get(Level::Aaa), Status::Fail);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Assessment::new(5.0).to_string(),
            "AA Large: Pass, AA: Pass, AAA Large: Pass, AAA: Fail"
        );
    }
}
