// src/models/check_status.rs
use std::fmt;

/// Outcome of running the external spell checker.
///
/// The variants keep apart the cases a shell would fold into one integer,
/// while [`CheckStatus::code`] still reports that integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    /// The tool ran and exited with this code.
    Exited(i32),
    /// The tool was terminated by this signal.
    Signaled(i32),
    /// The program could not be found on `PATH`.
    ToolNotFound,
    /// The program exists but could not be executed.
    NotExecutable,
}

impl CheckStatus {
    /// Exit code as a POSIX shell would report it.
    #[inline]
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Exited(code) => code,
            Self::Signaled(signal) => 128_i32.saturating_add(signal),
            Self::ToolNotFound => 127,
            Self::NotExecutable => 126,
        }
    }
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
