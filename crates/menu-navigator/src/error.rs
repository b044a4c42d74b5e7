//! Menu configuration errors.

use core::fmt;

/// Precondition violations caught while configuring a menu.
///
/// These are integration mistakes rather than runtime conditions; the panicking
/// builder entry points report them with this type's `Display` output.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// The menu has no options.
    EmptyItems,
    /// The second column does not have one entry per option.
    SecondaryColumnMismatch { primary: usize, secondary: usize },
    BgPriorityOutOfRange { priority: u8, max: u8 },
    ZeroMaxLines,
    /// More lines per page than the row-span table can track.
    TooManyLines { lines: usize, max: usize },
    InitialIndexOutOfRange { index: usize, count: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyItems => f.write_str("at least one menu option should exist"),
            Self::SecondaryColumnMismatch { primary, secondary } => write!(
                f,
                "second column size mismatch: {secondary} (expected {primary})"
            ),
            Self::BgPriorityOutOfRange { priority, max } => {
                write!(f, "too big bg priority: {priority} (max {max})")
            }
            Self::ZeroMaxLines => f.write_str("max lines can't be zero"),
            Self::TooManyLines { lines, max } => {
                write!(f, "too many max lines: {lines} (max {max})")
            }
            Self::InitialIndexOutOfRange { index, count } => {
                write!(f, "pointed index out of range: {index} (count {count})")
            }
        }
    }
}
