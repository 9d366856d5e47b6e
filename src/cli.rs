//! CLI argument definitions.
//!
//! Discovery runs unconditionally; flags only tune presentation and
//! the per-probe deadline.

use clap::Parser;

/// jdk-scout - best-effort JVM installation discovery.
#[derive(Debug, Parser)]
#[command(name = "jdk-scout")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit the inventory as JSON instead of the human summary
    #[arg(long)]
    pub json: bool,

    /// Per-probe timeout in seconds
    #[arg(long, default_value_t = 10, env = "JDK_SCOUT_PROBE_TIMEOUT")]
    pub probe_timeout: u64,

    /// Minimal output (summary line only)
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let cli = Cli::parse_from(["jdk-scout"]);
        assert!(!cli.json);
        assert!(!cli.quiet);
        assert!(!cli.debug);
        assert_eq!(cli.probe_timeout, 10);
    }

    #[test]
    fn json_flag_parses() {
        let cli = Cli::parse_from(["jdk-scout", "--json"]);
        assert!(cli.json);
    }

    #[test]
    fn probe_timeout_parses() {
        let cli = Cli::parse_from(["jdk-scout", "--probe-timeout", "3"]);
        assert_eq!(cli.probe_timeout, 3);
    }

    #[test]
    fn quiet_short_flag_parses() {
        let cli = Cli::parse_from(["jdk-scout", "-q"]);
        assert!(cli.quiet);
    }
}
