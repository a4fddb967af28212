//! `lath-compile` is the parameter compilation layer of the lath template
//! compiler. It turns the parameters collected at a plugin call site into the
//! generated source that builds an XML/HTML attribute list at runtime, and it
//! hosts the compile functions that rewrite a value expression into a fixed
//! target-source fragment.
//!
//! Compiled templates are plain PHP, so every fragment produced here is PHP
//! source meant to be spliced into the single-quoted string the surrounding
//! compiler assembles.
//!
//! ## Examples
//!
//! Serializing literal parameters into attribute-list source:
//!
//! ```rust
//! use lath_compile::{CompiledParams, DEFAULT_DELIMITER, serialize_attributes};
//!
//! let params: CompiledParams =
//!     [("id", "'editor'"), ("class", "''")].into_iter().collect();
//!
//! assert_eq!(
//!     serialize_attributes(&params, DEFAULT_DELIMITER, None),
//!     r#"id="editor" class="""#
//! );
//! ```
//!
//! Compile functions bake their work into the emitted expression, so the
//! runtime only pays for a single call:
//!
//! ```rust
//! use std::rc::Rc;
//!
//! use lath_compile::{Compiler, Engine, indent};
//!
//! let compiler = Compiler::new(Rc::new(Engine::default()));
//!
//! assert_eq!(
//!     indent(&compiler, "$body", Some("2"), Some("'~'")),
//!     "preg_replace('#^#m', '~~', $body)"
//! );
//! ```

mod attributes;
mod compiler;
mod engine;
mod escape;
mod functions;
mod params;
mod plugin;

pub use attributes::{DEFAULT_DELIMITER, serialize_attributes};
pub use compiler::Compiler;
pub use engine::{Engine, Options};
pub use escape::{EscapeMode, escape_mode};
pub use functions::{count_words, indent};
pub use params::{CompiledParams, MissingParameter};
pub use plugin::Plugin;
