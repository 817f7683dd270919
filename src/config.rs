//! Run configuration shared by the CLI and the harness.

use termcolor::ColorChoice;

/// Environment variable holding the `tracing` filter directives.
pub const LOG_ENV: &str = "KOANS_LOG";

/// Filter used when [`LOG_ENV`] is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KoanConfig {
    pub color: ColorChoice,
    /// Print the episodes and their koans instead of running them.
    pub list_only: bool,
}

impl KoanConfig {
    /// Resolve a user-facing colour mode against the current terminal.
    pub fn with_color(mut self, mode: ColorMode) -> Self {
        self.color = mode.resolve();
        self
    }
}

impl Default for KoanConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto.resolve(),
            list_only: false,
        }
    }
}

/// Colour mode as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn resolve(self) -> ColorChoice {
        match self {
            ColorMode::Auto if atty::is(atty::Stream::Stdout) => ColorChoice::Auto,
            ColorMode::Auto => ColorChoice::Never,
            ColorMode::Always => ColorChoice::Always,
            ColorMode::Never => ColorChoice::Never,
        }
    }
}
