use thiserror::Error;

/// Exit status used when a leftover option is found (-1 as most shells see it).
pub const UNRECOGNIZED_OPTION_EXIT_CODE: u8 = 255;

/// An argument containing `--` was still present after every known flag was consumed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unrecognized command-line option: {option}")]
pub struct UnrecognizedOption {
    /// The offending token, verbatim.
    pub option: String,
    /// Index of the token in the argument vector at the time of the check.
    pub position: usize,
}
