// Every accepted form of the two entry points, in one compile-and-run pass.

use std::cell::Cell;

use tripwire::{DefaultHandler, Handler, NoopHandler, SourceLocation, check, unreachable_checked};

struct Muted;

impl<Args> Handler<Args> for Muted {
    const LEVEL: u32 = 0;

    fn handle(&self, _: SourceLocation, _: &str, _: Args) {}
}

fn main() {
    let x = 3;

    check!(x > 0, NoopHandler);
    check!(x > 0, NoopHandler,);
    check!(x > 0, DefaultHandler, "unexpected x");
    check!(x > 0, DefaultHandler, format_args!("x is {x}"));
    check!(x > 0, NoopHandler, level = 4);
    check!(x > 0, NoopHandler, level = 4, "payload", 7, true,);

    // Statically disabled: the failing condition and its side effect are
    // compiled against but never run.
    let touched = Cell::new(false);
    check!(
        {
            touched.set(true);
            false
        },
        Muted
    );
    check!(
        {
            touched.set(true);
            false
        },
        Muted,
        level = 9,
        "payload"
    );
    assert!(!touched.get());

    if false {
        unreachable_checked!(NoopHandler);
        unreachable_checked!(NoopHandler,);
        unreachable_checked!(DefaultHandler, "context");
        unreachable_checked!(NoopHandler, level = 3, "context", 1u8);
    }
    unreachable_checked!(Muted);
}
