//! CLI command definitions for the `chatapi` binary.
//!
//! Uses clap derive macros for argument parsing.

use clap::{Parser, Subcommand};

/// Chat and message REST service.
#[derive(Parser)]
#[command(name = "chatapi", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Also export spans to stdout through OpenTelemetry.
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Default log filter for the chosen verbosity. `RUST_LOG` overrides it.
    pub fn log_directive(&self) -> &'static str {
        match self.verbose {
            0 if self.quiet => "error",
            0 => "info,sqlx=warn",
            1 => "debug,sqlx=info",
            _ => "trace",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the REST API server.
    Serve {
        /// Port to listen on [default: from config.toml, else 8080].
        #[arg(short, long, env = "CHATAPI_PORT")]
        port: Option<u16>,

        /// Host to bind to [default: from config.toml, else 0.0.0.0].
        #[arg(long, env = "CHATAPI_HOST")]
        host: Option<String>,

        /// SQLite database URL [default: from config.toml, else the data directory].
        #[arg(long, env = "CHATAPI_DATABASE_URL")]
        database_url: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_serve_flags() {
        let cli = Cli::try_parse_from([
            "chatapi",
            "-v",
            "serve",
            "--port",
            "9000",
            "--host",
            "127.0.0.1",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 1);
        assert_eq!(cli.log_directive(), "debug,sqlx=info");
        let Commands::Serve { port, host, .. } = cli.command;
        assert_eq!(port, Some(9000));
        assert_eq!(host.as_deref(), Some("127.0.0.1"));
    }

    #[test]
    fn test_quiet_directive() {
        let cli = Cli::try_parse_from(["chatapi", "--quiet", "serve"]).unwrap();
        assert_eq!(cli.log_directive(), "error");
    }

    #[test]
    fn test_verbosity_selects_filter_level() {
        use chatapi_observe::tracing_setup::build_env_filter;
        use tracing::level_filters::LevelFilter;

        if std::env::var("RUST_LOG").is_ok() {
            return;
        }

        let cases = [
            (vec!["chatapi", "--quiet", "serve"], LevelFilter::ERROR),
            (vec!["chatapi", "serve"], LevelFilter::INFO),
            (vec!["chatapi", "-v", "serve"], LevelFilter::DEBUG),
            (vec!["chatapi", "-vv", "serve"], LevelFilter::TRACE),
        ];
        for (args, level) in cases {
            let cli = Cli::try_parse_from(args.iter().copied()).unwrap();
            let filter = build_env_filter(cli.log_directive());
            assert_eq!(filter.max_level_hint(), Some(level), "{args:?}");
        }
    }
}
