//! Modular assertions with per-module failure handlers and compile-time
//! level filtering.
//!
//! Standard assertion facilities are all-or-nothing: one global switch for
//! the whole program. `tripwire` instead ties every assertion to a *handler*
//! type chosen by the calling module, and resolves "is this assertion
//! active" from the pair (assertion level, handler threshold) when the code
//! is monomorphized. A statically disabled assertion never evaluates its
//! condition and compiles to nothing, while still type-checking.
//!
//! ```
//! use tripwire::{check, Handler, SourceLocation};
//!
//! // One handler per logical module, each with its own threshold.
//! struct StorageAsserts;
//!
//! impl Handler<()> for StorageAsserts {
//!     const LEVEL: u32 = 1; // act on levels <= 1
//!     fn handle(&self, location: SourceLocation, expression: &str, _args: ()) {
//!         eprintln!("storage invariant broken at {location}: {expression}");
//!     }
//! }
//!
//! let free_blocks = 12u32;
//! check!(free_blocks > 0, StorageAsserts);
//! // Level 2 exceeds the threshold: never evaluated, zero runtime cost.
//! check!(expensive_consistency_scan(), StorageAsserts, level = 2);
//! # fn expensive_consistency_scan() -> bool { true }
//! ```
//!
//! When a checked condition fails, the handler runs once with the call-site
//! [`SourceLocation`], the stringified condition and any extra call-site
//! arguments, and then the process aborts. A handler opts out of the abort
//! only by diverging itself, as [`PanicHandler`] does.
//!
//! # Features
//!
//! - `diagnostics` (default): [`DefaultHandler`] writes its diagnostic line
//!   to stderr. Without it, [`DefaultHandler`] performs no I/O.
//! - `disable-checks`: global kill switch. [`check!`] expands to `()`;
//!   [`unreachable_checked!`] degrades to an unreachable-code optimizer hint.
//! - `tracing`: enables `TraceHandler`, which reports violations as
//!   `tracing` error events before the abort.

mod dispatch;
mod handler;
mod level;
mod location;
mod macros;
mod violation;

pub use dispatch::dispatch;
#[doc(hidden)]
pub use dispatch::unreachable_hint;
#[cfg(feature = "tracing")]
pub use handler::TraceHandler;
pub use handler::{DefaultHandler, Handler, NoopHandler};
pub use level::{DEFAULT_LEVEL, Level};
pub use location::SourceLocation;
pub use violation::{PanicHandler, Violation};
