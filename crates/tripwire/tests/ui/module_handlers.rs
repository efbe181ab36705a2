// Two unrelated handler types in one program, each with its own threshold,
// gated independently.

use std::cell::Cell;

use tripwire::{Handler, SourceLocation, check};

struct ParserAsserts;

impl<Args> Handler<Args> for ParserAsserts {
    const LEVEL: u32 = 2;

    fn handle(&self, _: SourceLocation, _: &str, _: Args) {
        std::process::exit(3);
    }
}

struct CodegenAsserts;

impl<Args> Handler<Args> for CodegenAsserts {
    const LEVEL: u32 = 0;

    fn handle(&self, _: SourceLocation, _: &str, _: Args) {
        std::process::exit(4);
    }
}

fn main() {
    let parser_ran = Cell::new(false);
    let codegen_ran = Cell::new(false);

    // Active for the parser module: condition runs and holds.
    check!(
        {
            parser_ran.set(true);
            true
        },
        ParserAsserts,
        level = 2
    );
    // Disabled for the codegen module at the same level.
    check!(
        {
            codegen_ran.set(true);
            true
        },
        CodegenAsserts,
        level = 2
    );

    assert!(parser_ran.get());
    assert!(!codegen_ran.get());
}
