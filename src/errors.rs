//! Error types with diagnostics using miette.
//!
//! This crate has no source text, so errors carry codes and help text but no
//! source spans.

use miette::Diagnostic;
use thiserror::Error;

/// Errors from constructing transformations out of placement options.
#[derive(Error, Diagnostic, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionsError {
    #[error("conflicting placement options: {first} and {second}")]
    #[diagnostic(
        code(croquis::options::conflict),
        help("pick one way to express the translation")
    )]
    Conflicting {
        first: &'static str,
        second: &'static str,
    },

    #[error("placement option {name} is NaN or infinite")]
    #[diagnostic(code(croquis::options::non_finite))]
    NonFinite { name: &'static str },
}

/// Errors from the turtle-graphics builders.
#[derive(Error, Diagnostic, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildError {
    #[error("no current point: the path is empty")]
    #[diagnostic(
        code(croquis::build::no_current_point),
        help("seed the path with start_at or vertex before relative commands")
    )]
    NoCurrentPoint,

    #[error("repeat count must be at least 1")]
    #[diagnostic(code(croquis::build::zero_count))]
    ZeroCount,

    #[error("cannot derive a direction from a zero-length vector")]
    #[diagnostic(
        code(croquis::build::degenerate_direction),
        help("forward needs a non-degenerate baseline; to and from coincide")
    )]
    DegenerateDirection,

    #[error("displacement is NaN or infinite")]
    #[diagnostic(code(croquis::build::non_finite))]
    NonFinite,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_render_a_message() {
        let e = BuildError::NoCurrentPoint;
        assert_eq!(e.to_string(), "no current point: the path is empty");

        let e = OptionsError::Conflicting {
            first: "origin",
            second: "x",
        };
        assert_eq!(
            e.to_string(),
            "conflicting placement options: origin and x"
        );
    }
}
