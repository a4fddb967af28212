//! Compile functions: plugins that run while a template compiles and emit a
//! target-source fragment in place of a runtime call.

use crate::{Compiler, escape};

/// Compiled literal used for `by` when the call site omits it.
const DEFAULT_BY: &str = "4";
/// Compiled literal used for `chr` when the call site omits it, a quoted
/// single space.
const DEFAULT_CHR: &str = "' '";

/// Emits the expression that counts word-like tokens in `value` at runtime.
///
/// The charset choice is deferred to runtime: under UTF-8 the emitted pattern
/// also counts tokens made of Unicode letters, any other charset counts bare
/// word characters only.
pub fn count_words(_compiler: &Compiler, value: &str) -> String {
    format!(
        r"preg_match_all(strcasecmp($this->charset, 'utf-8')===0 ? '#[\w\pL]+#u' : '#\w+#', {value}, $tmp)"
    )
}

/// Emits the expression that prefixes every line of `value` at runtime.
///
/// The prefix is baked at compile time from `by` repetitions of the unit in
/// `chr`, so both must be compile-time literals. `chr` loses its surrounding
/// quotes, `by` is read as a leading integer after quote-trimming and falls
/// back to zero when nothing numeric is left.
pub fn indent(_compiler: &Compiler, value: &str, by: Option<&str>, chr: Option<&str>) -> String {
    let by = by.unwrap_or(DEFAULT_BY);
    let chr = chr.unwrap_or(DEFAULT_CHR);

    let unit = escape::strip_edges(chr);
    let count = leading_int(by.trim_matches(escape::QUOTES));
    let prefix = unit.repeat(count);
    tracing::trace!("Indent prefix is {:?} repeated {} times", unit, count);

    format!("preg_replace('#^#m', '{prefix}', {value})")
}

/// Leading-integer read: optional whitespace and sign, then digits. Anything
/// non-numeric, and any negative width, counts as zero.
fn leading_int(s: &str) -> usize {
    let s = s.trim_start();
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    if negative {
        return 0;
    }
    let digits: String = digits.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(0)
}
