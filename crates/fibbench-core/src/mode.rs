//! Integer-coded run modes of the benchmarked executables.

use std::fmt;

use crate::algorithms::Algorithm;
use crate::error::BenchError;

/// Which algorithm(s) one invocation of a benchmarked executable runs.
///
/// The numeric codes are the second command-line argument of the
/// executable contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Iterative only, human-readable output.
    Iterative = 0,
    /// Recursive only, human-readable output.
    Recursive = 1,
    /// Dynamic programming only, human-readable output.
    DynamicProgramming = 2,
    /// All three algorithms as CSV pairs.
    All = 3,
    /// Iterative and dynamic programming as CSV pairs.
    IterativeAndDp = 4,
}

impl Mode {
    /// The numeric code passed on the command line.
    #[must_use]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Algorithms run by this mode, in table column order.
    #[must_use]
    pub fn algorithms(self) -> &'static [Algorithm] {
        match self {
            Self::Iterative => &[Algorithm::Iterative],
            Self::Recursive => &[Algorithm::Recursive],
            Self::DynamicProgramming => &[Algorithm::DynamicProgramming],
            Self::All => &Algorithm::ALL,
            Self::IterativeAndDp => &[Algorithm::Iterative, Algorithm::DynamicProgramming],
        }
    }

    /// Whether the mode emits a flat `time,ops,...` line.
    #[must_use]
    pub fn is_csv(self) -> bool {
        matches!(self, Self::All | Self::IterativeAndDp)
    }

    /// Whether the mode runs the naive recursive algorithm.
    #[must_use]
    pub fn includes_recursive(self) -> bool {
        self.algorithms().contains(&Algorithm::Recursive)
    }

    /// The mode to fall back to after a timeout, if any.
    #[must_use]
    pub fn degraded(self) -> Option<Mode> {
        match self {
            Self::All => Some(Self::IterativeAndDp),
            _ => None,
        }
    }
}

impl TryFrom<u8> for Mode {
    type Error = BenchError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Iterative),
            1 => Ok(Self::Recursive),
            2 => Ok(Self::DynamicProgramming),
            3 => Ok(Self::All),
            4 => Ok(Self::IterativeAndDp),
            other => Err(BenchError::Config(format!(
                "unknown mode {other} (expected 0-4)"
            ))),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for code in 0..=4u8 {
            assert_eq!(Mode::try_from(code).unwrap().code(), code);
        }
    }

    #[test]
    fn unknown_code_rejected() {
        assert!(matches!(Mode::try_from(5), Err(BenchError::Config(_))));
    }

    #[test]
    fn csv_modes() {
        assert!(Mode::All.is_csv());
        assert!(Mode::IterativeAndDp.is_csv());
        assert!(!Mode::Iterative.is_csv());
        assert!(!Mode::Recursive.is_csv());
    }

    #[test]
    fn only_all_degrades() {
        assert_eq!(Mode::All.degraded(), Some(Mode::IterativeAndDp));
        assert_eq!(Mode::IterativeAndDp.degraded(), None);
        assert!(!Mode::IterativeAndDp.includes_recursive());
        assert!(Mode::All.includes_recursive());
    }

    #[test]
    fn display_is_code() {
        assert_eq!(Mode::IterativeAndDp.to_string(), "4");
    }
}
