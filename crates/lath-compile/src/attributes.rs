use crate::{Compiler, CompiledParams, escape};

/// Delimiter assumed when a call site does not override it: the quote of the
/// single-quoted target string every fragment is spliced into.
pub const DEFAULT_DELIMITER: char = '\'';

/// Serializes compiled parameters into the generated source of an XML/HTML
/// attribute list.
///
/// Each parameter becomes ` name="value"` with the leading space of the first
/// attribute trimmed off. Values wrapped in `delim` are baked in at compile
/// time, empty-ish values become an empty attribute, and anything else is
/// emitted as a runtime expression whose escaping follows
/// [`escape_mode`](crate::escape_mode). Occurrences of `delim` in the
/// emitted text are backslash-escaped so the fragment can sit inside a
/// `delim`-quoted string.
///
/// # Examples
///
/// ```
/// use lath_compile::{CompiledParams, serialize_attributes};
///
/// let params: CompiledParams =
///     [("id", "'5'"), ("title", "$title")].into_iter().collect();
///
/// assert_eq!(
///     serialize_attributes(&params, '\'', None),
///     r#"id="5" title="'.(is_string($tmp2=$title) ? htmlspecialchars($tmp2, ENT_QUOTES, $this->charset, false) : $tmp2).'""#
/// );
/// ```
pub fn serialize_attributes(
    params: &CompiledParams,
    delim: char,
    compiler: Option<&Compiler>,
) -> String {
    let entries = params.merged();
    let mut out = String::new();

    for (attr, value) in &entries {
        out.push(' ');
        out.push_str(attr);
        out.push('=');

        match escape::classify(value, delim) {
            escape::ValueShape::Empty => {
                out.push_str(&escape_delim("\"\"", delim));
            }
            escape::ValueShape::Literal => {
                let content = escape::strip_edges(value);
                out.push_str(&escape_delim(&format!("\"{content}\""), delim));
            }
            escape::ValueShape::Expr => {
                let mode = escape::escape_mode(compiler, value);
                out.push_str(&escape_delim("\"", delim));
                out.push(delim);
                out.push_str(&escape::escaped_value(value, mode));
                out.push(delim);
                out.push_str(&escape_delim("\"", delim));
            }
        }
    }

    tracing::debug!("Serialized {} attributes", entries.len());
    out.trim_start().to_string()
}

/// Backslash-escapes every occurrence of the delimiter.
fn escape_delim(s: &str, delim: char) -> String {
    s.replace(delim, &format!("\\{delim}"))
}
