use core::fmt;

/// The position of an assertion in the program source.
///
/// Built once per call site from `file!()`/`line!()` by [`source_location!`],
/// then only read. The fields are purely diagnostic; any file name and line
/// number are accepted.
///
/// [`source_location!`]: crate::source_location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    pub file_name: &'static str,
    pub line_number: u32,
}

impl SourceLocation {
    pub const fn new(file_name: &'static str, line_number: u32) -> Self {
        Self {
            file_name,
            line_number,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file_name, self.line_number)
    }
}

/// Captures the [`SourceLocation`] of the macro invocation itself.
///
/// The assertion macros use this internally; it is exported so callers that
/// route violations through [`dispatch`](crate::dispatch) by hand can capture
/// a location the same way.
#[macro_export]
macro_rules! source_location {
    () => {
        $crate::SourceLocation::new(::core::file!(), ::core::line!())
    };
}
