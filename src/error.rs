//! Error kinds shared by build and dispatch errors.

/// Coarse classification of every error this crate returns.
///
/// Callers match on the kind rather than on message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The declared transition table failed validation.
    Build,

    /// No transition exists for the event, or the handler chose a state it
    /// did not declare as a destination.
    InvalidTransition,

    /// The transition handler itself failed.
    Handler,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Build => "build failed",
            Self::InvalidTransition => "invalid transition",
            Self::Handler => "handler error",
        };
        f.write_str(name)
    }
}
