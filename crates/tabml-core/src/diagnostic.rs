pub const W_ATTR_UNRESOLVED: &str = "W_ATTR_UNRESOLVED";
pub const W_ATTR_UNCLOSED: &str = "W_ATTR_UNCLOSED";
pub const W_DEPTH_JUMP: &str = "W_DEPTH_JUMP";

/// A non-fatal finding collected while parsing.
///
/// Diagnostics identify the offending line by its text rather than by
/// position; the compiler always produces output alongside them.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Diagnostic {
    pub severity: DiagnosticSeverity,
    pub code: &'static str,
    pub message: String,
}

impl Diagnostic {
    pub fn new(
        severity: DiagnosticSeverity,
        code: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            code,
            message: message.into(),
        }
    }

    pub fn warning(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(DiagnosticSeverity::Warning, code, message)
    }
}

/// Fatal problems are reported through [`crate::CompileError`] instead, so
/// every collected diagnostic is a warning.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DiagnosticSeverity {
    Warning,
}

impl DiagnosticSeverity {
    pub fn label(self) -> &'static str {
        match self {
            DiagnosticSeverity::Warning => "warning",
        }
    }
}
