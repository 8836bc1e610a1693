//! Startup: configuration and command-line mode selection.
//!
//! `main` reads [`DashboardConfig::from_env`], then picks a [`LaunchMode`]
//! from the arguments before touching the terminal.
//!
//! ```ignore
//! use chemdash::startup::{parse_launch_mode, DashboardConfig, LaunchMode};
//!
//! let config = DashboardConfig::from_env();
//! match parse_launch_mode(std::env::args().skip(1)) {
//!     LaunchMode::Version => println!("chemdash {}", env!("CARGO_PKG_VERSION")),
//!     LaunchMode::Report => { /* print the plain-text report */ }
//!     LaunchMode::Dashboard => { /* run the TUI */ }
//! }
//! ```

pub mod config;

pub use config::DashboardConfig;

/// What the binary should do for this invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchMode {
    /// Interactive dashboard (no flags)
    Dashboard,
    /// Print the compliance report to stdout and exit
    Report,
    /// Print the version and exit
    Version,
}

/// Scan the arguments (program name excluded) for a mode flag.
///
/// `--version` wins over `--report`; unknown arguments are ignored.
pub fn parse_launch_mode<I, S>(args: I) -> LaunchMode
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut mode = LaunchMode::Dashboard;
    for arg in args {
        match arg.as_ref() {
            "--version" | "-V" => return LaunchMode::Version,
            "--report" => mode = LaunchMode::Report,
            _ => {}
        }
    }
    mode
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_runs_dashboard() {
        assert_eq!(parse_launch_mode(Vec::<String>::new()), LaunchMode::Dashboard);
        assert_eq!(parse_launch_mode(["--unknown"]), LaunchMode::Dashboard);
    }

    #[test]
    fn test_report_flag() {
        assert_eq!(parse_launch_mode(["--report"]), LaunchMode::Report);
    }

    #[test]
    fn test_version_wins() {
        assert_eq!(parse_launch_mode(["--report", "--version"]), LaunchMode::Version);
        assert_eq!(parse_launch_mode(["-V"]), LaunchMode::Version);
    }
}
