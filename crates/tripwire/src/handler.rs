use core::fmt;

use crate::SourceLocation;
#[cfg(feature = "diagnostics")]
use crate::Violation;

/// The capability a type needs in order to receive assertion failures.
///
/// `Args` is a tuple of whatever extra arguments the call site passed after
/// the handler; they are forwarded verbatim, so one handler type can accept
/// several different payload shapes by implementing the trait for several
/// `Args` tuples (error codes, captured values, formatted messages, ...).
///
/// # Level policy
///
/// `LEVEL` is the maximum assertion level this handler acts on. The default
/// is unbounded: a handler that does not override it accepts assertions of
/// every level. Overriding it to `0` statically disables every assertion
/// routed through the handler. The comparison is inclusive: an assertion at
/// level `N` is active for a handler with `LEVEL = N`.
///
/// # Return contract
///
/// If `handle` returns normally, [`dispatch`](crate::dispatch) terminates the
/// process immediately afterwards. A handler is never required to terminate
/// anything itself, but it may diverge (typically by panicking, like
/// [`PanicHandler`](crate::PanicHandler)) to make that divergence observable
/// instead of the abort.
pub trait Handler<Args = ()> {
    /// Maximum assertion level this handler acts on.
    const LEVEL: u32 = u32::MAX;

    fn handle(&self, location: SourceLocation, expression: &str, args: Args);
}

impl<Args, H: Handler<Args>> Handler<Args> for &H {
    const LEVEL: u32 = <H as Handler<Args>>::LEVEL;

    fn handle(&self, location: SourceLocation, expression: &str, args: Args) {
        <H as Handler<Args>>::handle(*self, location, expression, args)
    }
}

/// Handler that does nothing with any payload.
///
/// Accepts extra arguments of arbitrary number and type and never panics;
/// the only observable effect of a failed assertion is the abort that
/// follows.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHandler;

impl<Args> Handler<Args> for NoopHandler {
    fn handle(&self, _location: SourceLocation, _expression: &str, _args: Args) {}
}

/// Handler that writes one diagnostic line to stderr.
///
/// The line carries the source location, the stringified expression and, when
/// one was passed at the call site, a supplementary message. Write errors are
/// swallowed; this handler never panics. With the `diagnostics` feature
/// disabled it writes nothing and behaves exactly like [`NoopHandler`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultHandler;

impl DefaultHandler {
    #[cfg(feature = "diagnostics")]
    fn report(location: SourceLocation, expression: &str, message: Option<String>) {
        use std::io::Write;

        let violation = if expression.is_empty() {
            Violation::Unreachable { location, message }
        } else {
            Violation::Check {
                location,
                expression: expression.to_owned(),
                message,
            }
        };
        // Never propagate a failure out of a handler.
        let _ = writeln!(std::io::stderr().lock(), "[tripwire] {violation}");
    }

    #[cfg(not(feature = "diagnostics"))]
    fn report(_location: SourceLocation, _expression: &str, _message: Option<String>) {}
}

impl Handler<()> for DefaultHandler {
    fn handle(&self, location: SourceLocation, expression: &str, _args: ()) {
        Self::report(location, expression, None);
    }
}

impl Handler<(&str,)> for DefaultHandler {
    fn handle(&self, location: SourceLocation, expression: &str, args: (&str,)) {
        Self::report(location, expression, Some(args.0.to_owned()));
    }
}

impl Handler<(fmt::Arguments<'_>,)> for DefaultHandler {
    fn handle(&self, location: SourceLocation, expression: &str, args: (fmt::Arguments<'_>,)) {
        Self::report(location, expression, Some(args.0.to_string()));
    }
}

/// Handler that reports violations as `tracing` error events, then lets the
/// automatic abort proceed.
#[cfg(feature = "tracing")]
#[derive(Debug, Clone, Copy, Default)]
pub struct TraceHandler;

#[cfg(feature = "tracing")]
impl Handler<()> for TraceHandler {
    fn handle(&self, location: SourceLocation, expression: &str, _args: ()) {
        tracing::error!(target: "tripwire", %location, expression, "assertion failed");
    }
}

#[cfg(feature = "tracing")]
impl Handler<(&str,)> for TraceHandler {
    fn handle(&self, location: SourceLocation, expression: &str, args: (&str,)) {
        tracing::error!(target: "tripwire", %location, expression, "assertion failed: {}", args.0);
    }
}
