use std::rc::Rc;

use crate::Engine;

/// Construction contract shared by all compile-time and runtime plugins.
///
/// A plugin receives exactly one capability when it is built: a handle to the
/// engine that runs it. The handle is stored for the plugin's lifetime and
/// only ever read, so any number of plugins can share one engine.
pub trait Plugin {
    /// Builds the plugin for the given engine.
    fn new(engine: Rc<Engine>) -> Self
    where
        Self: Sized;

    /// The engine this plugin was built for.
    fn engine(&self) -> &Engine;
}
