use std::io::IsTerminal;

use clap::Parser;

/// Runtime configuration for the exercise program.
///
/// Every field has a default, so the program runs with no arguments.
#[derive(Debug, Clone, Parser)]
#[command(name = "exercise-09", about = "Promisified legacy API demo")]
pub struct AppConfig {
    /// `tracing` filter directive for diagnostics written to stderr.
    #[arg(long, env = "RUST_LOG", default_value = "warn")]
    pub log_filter: String,
    /// Disable colored output. The `NO_COLOR` environment variable has the same effect.
    #[arg(long)]
    pub no_color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: "warn".to_string(),
            no_color: false,
        }
    }
}

impl AppConfig {
    /// Whether stdout output should carry color codes.
    #[must_use]
    pub fn color_enabled(&self) -> bool {
        !self.no_color
            && std::env::var_os("NO_COLOR").map_or(true, |v| v.is_empty())
            && std::io::stdout().is_terminal()
    }
}
