//! Classification of raw parameter text and the escaping decision table for
//! runtime expression values.

use crate::Compiler;

/// Quote characters a compile-time literal may be wrapped in.
pub(crate) const QUOTES: &[char] = &['"', '\''];

/// Strips the first and last character, whatever they are.
pub(crate) fn strip_edges(s: &str) -> &str {
    let mut chars = s.chars();
    chars.next();
    chars.next_back();
    chars.as_str()
}

/// How the raw source text of a parameter value reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValueShape {
    /// Nothing left once surrounding quotes are stripped, or the `null`
    /// literal. Serialized as an always-present empty attribute.
    Empty,
    /// Wrapped in the active delimiter: a compile-time literal emitted
    /// verbatim.
    Literal,
    /// Anything else is an expression evaluated at runtime.
    Expr,
}

pub(crate) fn classify(value: &str, delim: char) -> ValueShape {
    if value.trim_matches(QUOTES).is_empty() || value == "null" {
        ValueShape::Empty
    } else if value.starts_with(delim) && value.ends_with(delim) {
        ValueShape::Literal
    } else {
        ValueShape::Expr
    }
}

/// Escape treatment chosen for a runtime expression value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeMode {
    /// Emit code that HTML-escapes the value if it is a string.
    ///
    /// With `double_encode` disabled the generated call leaves existing
    /// entities alone instead of encoding their ampersands again.
    Escape { double_encode: bool },
    /// Splice the expression in untouched.
    Raw,
}

/// Decides how a runtime expression value gets escaped.
///
/// Without a compile context nothing is known about the value's origin, so
/// the generated call must tolerate already-encoded input. With a context the
/// value escapes normally, unless auto-escaping is active and the expression
/// reads the variable scope, in which case scope handling has escaped it
/// already and it passes through raw.
pub fn escape_mode(compiler: Option<&Compiler>, value: &str) -> EscapeMode {
    match compiler {
        None => EscapeMode::Escape {
            double_encode: false,
        },
        Some(compiler) if !compiler.auto_escape() || !compiler.reads_scope(value) => {
            EscapeMode::Escape {
                double_encode: true,
            }
        }
        Some(_) => EscapeMode::Raw,
    }
}

/// The generated piece that yields the attribute's value at runtime.
///
/// Non-string values skip escaping, so numbers and booleans print as PHP
/// prints them.
pub(crate) fn escaped_value(value: &str, mode: EscapeMode) -> String {
    match mode {
        EscapeMode::Escape {
            double_encode: false,
        } => format!(
            ".(is_string($tmp2={value}) ? htmlspecialchars($tmp2, ENT_QUOTES, $this->charset, false) : $tmp2)."
        ),
        EscapeMode::Escape {
            double_encode: true,
        } => format!(
            ".(is_string($tmp2={value}) ? htmlspecialchars($tmp2, ENT_QUOTES, $this->charset) : $tmp2)."
        ),
        EscapeMode::Raw => format!(".{value}."),
    }
}
