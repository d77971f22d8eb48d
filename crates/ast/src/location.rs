use std::fmt;

/// Range of source code an AST element was produced from
///
/// Offsets are expressed in bytes and are provided by the front-end.
/// An empty range means the element has no source (e.g. built programmatically).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CodeRange {
    pub start: usize,
    pub len: usize,
}

impl CodeRange {
    pub const fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// Range for elements that don't come from any source code
    pub const fn synthetic() -> Self {
        Self { start: 0, len: 0 }
    }

    pub const fn end(&self) -> usize {
        self.start + self.len
    }

    pub const fn is_synthetic(&self) -> bool {
        self.len == 0
    }
}

/// An AST element with its location
#[derive(Debug, Clone, PartialEq)]
pub struct Span<T> {
    pub at: CodeRange,
    pub data: T,
}

impl<T> Span<T> {
    pub fn new(at: CodeRange, data: T) -> Self {
        Self { at, data }
    }

    pub fn synthetic(data: T) -> Self {
        Self::new(CodeRange::synthetic(), data)
    }
}

/// Location of a runtime element
///
/// Values can either come from the program itself or be produced by the runtime
/// or native library (in which case a short description of the producer is kept)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuntimeCodeRange {
    Parsed(CodeRange),
    Internal(&'static str),
}

impl From<CodeRange> for RuntimeCodeRange {
    fn from(range: CodeRange) -> Self {
        Self::Parsed(range)
    }
}

impl fmt::Display for RuntimeCodeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeCodeRange::Parsed(range) => {
                if range.is_synthetic() {
                    write!(f, "<no source location>")
                } else {
                    write!(f, "offset {}..{}", range.start, range.end())
                }
            }

            RuntimeCodeRange::Internal(infos) => write!(f, "<native code: {infos}>"),
        }
    }
}
