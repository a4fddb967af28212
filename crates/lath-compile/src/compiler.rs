use std::rc::Rc;

use crate::{Engine, Plugin};

/// Substring every compiled scope lookup contains.
pub(crate) const SCOPE_LOOKUP_MARKER: &str = "isset($this->scope";

/// Compile context handed to compile functions and the attribute serializer.
///
/// Carries the engine handle plus the auto-escaping state of the compile in
/// progress, which starts from the engine-wide default and can be overridden
/// per template.
#[derive(Debug, Clone)]
pub struct Compiler {
    engine: Rc<Engine>,
    auto_escape: bool,
}

impl Compiler {
    pub fn new(engine: Rc<Engine>) -> Self {
        let auto_escape = engine.auto_escape();
        Self {
            engine,
            auto_escape,
        }
    }

    pub fn auto_escape(&self) -> bool {
        self.auto_escape
    }

    pub fn set_auto_escape(&mut self, auto_escape: bool) {
        self.auto_escape = auto_escape;
    }

    /// Returns true if the expression source reads the runtime variable
    /// scope. Scope reads are compiled as guarded lookups, so a plain
    /// substring test is enough.
    pub fn reads_scope(&self, expr: &str) -> bool {
        expr.contains(SCOPE_LOOKUP_MARKER)
    }
}

impl Plugin for Compiler {
    fn new(engine: Rc<Engine>) -> Self {
        Compiler::new(engine)
    }

    fn engine(&self) -> &Engine {
        &self.engine
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::Options;

    #[test]
    fn test_auto_escape_starts_from_engine_default() {
        let engine = Rc::new(Engine::new(Options {
            auto_escape: true,
            ..Options::default()
        }));
        assert!(Compiler::new(engine).auto_escape());

        let engine = Rc::new(Engine::default());
        assert!(!Compiler::new(engine).auto_escape());
    }

    #[test]
    fn test_set_auto_escape_overrides_per_compile() {
        let engine = Rc::new(Engine::default());
        let mut compiler = Compiler::new(Rc::clone(&engine));
        compiler.set_auto_escape(true);

        assert!(compiler.auto_escape());
        assert!(!engine.auto_escape());
    }

    #[rstest]
    #[case::guarded_lookup(r#"(isset($this->scope["name"]) ? $this->scope["name"] : null)"#, true)]
    #[case::nested_lookup(r#"strtoupper((isset($this->scope["a"]) ? $this->scope["a"] : null))"#, true)]
    #[case::plain_call("strtoupper($foo)", false)]
    #[case::quoted_literal("'hello'", false)]
    #[case::unguarded_scope_var("$this->scope", false)]
    fn test_reads_scope(#[case] expr: &str, #[case] expected: bool) {
        let compiler = Compiler::new(Rc::new(Engine::default()));
        assert_eq!(compiler.reads_scope(expr), expected);
    }
}
