/// Engine-wide settings shared by every compile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Character set the generated escaping code is told to use.
    pub charset: String,
    /// Default auto-escaping state new compiles start from.
    pub auto_escape: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            charset: "utf-8".to_string(),
            auto_escape: false,
        }
    }
}

/// The engine owns the configuration plugins and compiles read from.
///
/// It is handed out behind an `Rc` so every plugin built for one engine sees
/// the same settings.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    options: Options,
}

impl Engine {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn charset(&self) -> &str {
        &self.options.charset
    }

    pub fn auto_escape(&self) -> bool {
        self.options.auto_escape
    }

    pub fn set_charset(&mut self, charset: impl Into<String>) {
        self.options.charset = charset.into();
    }

    pub fn set_auto_escape(&mut self, auto_escape: bool) {
        self.options.auto_escape = auto_escape;
    }

    pub const fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}
