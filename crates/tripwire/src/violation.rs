use thiserror::Error;

use crate::{Handler, SourceLocation};

/// The one failure this library knows about: an assertion was violated.
///
/// Carried as the panic payload of [`PanicHandler`] and used by
/// [`DefaultHandler`](crate::DefaultHandler) to format its diagnostic line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    /// A checked condition evaluated to false.
    #[error("assertion `{expression}` failed at {location}{}", render_message(.message))]
    Check {
        location: SourceLocation,
        expression: String,
        message: Option<String>,
    },
    /// An `unreachable_checked!` marker was executed.
    #[error("unreachable code executed at {location}{}", render_message(.message))]
    Unreachable {
        location: SourceLocation,
        message: Option<String>,
    },
}

impl Violation {
    /// Location of the call site that raised the violation.
    pub fn location(&self) -> SourceLocation {
        match self {
            Violation::Check { location, .. } | Violation::Unreachable { location, .. } => {
                *location
            }
        }
    }
}

fn render_message(message: &Option<String>) -> String {
    match message {
        Some(message) => format!(": {message}"),
        None => String::new(),
    }
}

/// Handler that panics with a [`Violation`] payload instead of returning.
///
/// Because it diverges, the automatic abort never runs; the panic unwinds
/// into the surrounding program like any other. This is the built-in way to
/// opt out of process termination.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanicHandler;

impl PanicHandler {
    fn raise(location: SourceLocation, expression: &str, message: Option<String>) -> ! {
        let violation = if expression.is_empty() {
            Violation::Unreachable { location, message }
        } else {
            Violation::Check {
                location,
                expression: expression.to_owned(),
                message,
            }
        };
        std::panic::panic_any(violation)
    }
}

impl Handler<()> for PanicHandler {
    fn handle(&self, location: SourceLocation, expression: &str, _args: ()) {
        Self::raise(location, expression, None)
    }
}

impl Handler<(&str,)> for PanicHandler {
    fn handle(&self, location: SourceLocation, expression: &str, args: (&str,)) {
        Self::raise(location, expression, Some(args.0.to_owned()))
    }
}
