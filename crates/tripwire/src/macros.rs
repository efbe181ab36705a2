/// Checks a condition and routes the failure to a handler.
///
/// ```
/// use tripwire::{check, DefaultHandler, NoopHandler};
///
/// let x = 3;
/// check!(x > 0, NoopHandler);
/// check!(x > 0, DefaultHandler, "x went out of range");
/// check!(x > 0, DefaultHandler, level = 2);
/// ```
///
/// The condition is stringified and evaluated lazily: if the assertion's
/// level (`level = N`, default [`DEFAULT_LEVEL`](crate::DEFAULT_LEVEL))
/// exceeds the handler's [`LEVEL`](crate::Handler::LEVEL) threshold, the
/// whole invocation compiles to nothing and the condition is never run.
/// Extra arguments after the handler (and the optional `level =`) are packed
/// into a tuple and forwarded to the handler unchanged, so the handler must
/// implement `Handler<(A, B, ...)>` for the argument types used.
///
/// On failure the handler runs once and the process aborts, unless the
/// handler diverges first.
///
/// With the `disable-checks` feature this macro expands to `()` and none of
/// its arguments are evaluated.
#[cfg(not(feature = "disable-checks"))]
#[macro_export]
macro_rules! check {
    ($cond:expr, $handler:expr $(,)?) => {
        $crate::check!($cond, $handler, level = $crate::DEFAULT_LEVEL)
    };
    ($cond:expr, $handler:expr, level = $level:expr $(, $arg:expr)* $(,)?) => {
        $crate::dispatch(
            || $cond,
            $crate::source_location!(),
            ::core::stringify!($cond),
            &$handler,
            $crate::Level::<{ $level }>,
            ($($arg,)*),
        )
    };
    ($cond:expr, $handler:expr $(, $arg:expr)+ $(,)?) => {
        $crate::check!($cond, $handler, level = $crate::DEFAULT_LEVEL $(, $arg)+)
    };
}

/// Marks code that must never execute.
///
/// Behaves exactly like a [`check!`] whose condition is the constant `false`,
/// with an empty expression text: reaching the marker (at an active level)
/// invokes the handler and aborts.
///
/// ```
/// use tripwire::{unreachable_checked, DefaultHandler};
///
/// fn classify(n: u32) -> &'static str {
///     match n % 2 {
///         0 => "even",
///         1 => "odd",
///         _ => {
///             unreachable_checked!(DefaultHandler, "n % 2 escaped 0..=1");
///             ""
///         }
///     }
/// }
/// ```
///
/// With the `disable-checks` feature the marker no longer aborts; it degrades
/// to [`core::hint::unreachable_unchecked`], so reaching it is undefined
/// behavior but the optimizer keeps the unreachability information.
#[cfg(not(feature = "disable-checks"))]
#[macro_export]
macro_rules! unreachable_checked {
    ($handler:expr $(,)?) => {
        $crate::unreachable_checked!($handler, level = $crate::DEFAULT_LEVEL)
    };
    ($handler:expr, level = $level:expr $(, $arg:expr)* $(,)?) => {
        $crate::dispatch(
            || false,
            $crate::source_location!(),
            "",
            &$handler,
            $crate::Level::<{ $level }>,
            ($($arg,)*),
        )
    };
    ($handler:expr $(, $arg:expr)+ $(,)?) => {
        $crate::unreachable_checked!($handler, level = $crate::DEFAULT_LEVEL $(, $arg)+)
    };
}

#[cfg(feature = "disable-checks")]
#[macro_export]
macro_rules! check {
    ($($tt:tt)*) => {
        ()
    };
}

#[cfg(feature = "disable-checks")]
#[macro_export]
macro_rules! unreachable_checked {
    ($($tt:tt)*) => {
        unsafe { $crate::unreachable_hint() }
    };
}
