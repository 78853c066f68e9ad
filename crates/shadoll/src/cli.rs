//! Command line arguments.

use std::path::PathBuf;

use clap::Parser;

/// A decorative animated placeholder for the terminal.
#[derive(Parser, Debug, Default)]
#[command(version, about)]
pub struct Args {
    /// Display options as a query string, e.g. `logoAnim=mixed&speed=2`
    pub query: Option<String>,

    /// Settings file path
    #[arg(short, long, env = "SHADOLL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Orientation sensor feed: a file or FIFO of `beta gamma` lines
    #[arg(short, long, env = "SHADOLL_SENSOR")]
    pub sensor: Option<PathBuf>,

    /// Log filter directive (overrides the settings file)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Directory for log files (overrides the settings file)
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Write logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,

    /// Do not restore the configuration saved by the previous run
    #[arg(long)]
    pub no_restore: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_query_and_flags() {
        let args = Args::try_parse_from([
            "shadoll",
            "logoAnim=mixed&speed=2",
            "--sensor",
            "/tmp/tilt",
            "--no-restore",
        ])
        .unwrap();
        assert_eq!(args.query.as_deref(), Some("logoAnim=mixed&speed=2"));
        assert_eq!(args.sensor, Some(PathBuf::from("/tmp/tilt")));
        assert!(args.no_restore);
        assert!(!args.json_logs);
    }

    #[test]
    fn test_everything_is_optional() {
        let args = Args::try_parse_from(["shadoll"]).unwrap();
        assert!(args.query.is_none());
        assert!(args.log_level.is_none());
    }

    #[test]
    fn test_command_is_well_formed() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
