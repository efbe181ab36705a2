use crate::{Handler, Level, SourceLocation};

/// Evaluation core behind [`check!`](crate::check) and
/// [`unreachable_checked!`](crate::unreachable_checked).
///
/// `LEVEL` (carried by the [`Level`] tag) and the handler's
/// [`Handler::LEVEL`] threshold are both constants once this function is
/// monomorphized, so the gate below folds away: an assertion whose level
/// exceeds the threshold compiles to nothing, and its predicate is never
/// evaluated. The disabled path is still type-checked.
///
/// When the predicate reports a violation, the handler runs once with the
/// call-site location, the stringified expression (empty for the unreachable
/// form) and the forwarded extra arguments. If the handler returns instead of
/// diverging, the process is terminated abnormally, unconditionally.
#[inline(always)]
pub fn dispatch<const LEVEL: u32, H, Args, P>(
    predicate: P,
    location: SourceLocation,
    expression: &'static str,
    handler: &H,
    _level: Level<LEVEL>,
    args: Args,
) where
    H: Handler<Args>,
    P: FnOnce() -> bool,
{
    if LEVEL <= H::LEVEL && !predicate() {
        handler.handle(location, expression, args);
        std::process::abort();
    }
}

/// Backs the globally-disabled form of `unreachable_checked!`: the marker
/// stops aborting but keeps telling the optimizer the position cannot be
/// reached.
///
/// # Safety
///
/// Reaching this call is immediate undefined behavior.
#[doc(hidden)]
#[inline(always)]
pub unsafe fn unreachable_hint() -> ! {
    unsafe { core::hint::unreachable_unchecked() }
}
