/// Level assigned to an assertion when the call site does not name one.
pub const DEFAULT_LEVEL: u32 = 1;

/// Compile-time marker for the level of a single assertion invocation.
///
/// Carries no runtime state. Its only job is to flow `N` into the const
/// generic of [`dispatch`](crate::dispatch), so the comparison against the
/// handler's [`LEVEL`](crate::Handler::LEVEL) threshold is resolved at
/// monomorphization time rather than at runtime.
#[derive(Debug, Clone, Copy)]
pub struct Level<const N: u32>;
