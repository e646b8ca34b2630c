//! CLI argument definitions for cloudstocks.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `chart` | Synthesize the chart payload for a symbol |
//! | `search` | Search the reference catalog |
//! | `stocks` | Print the full reference catalog |
//!
//! # Examples
//!
//! ```bash
//! cloudstocks chart AAPL --range 1y --pretty
//! cloudstocks search micro
//! cloudstocks stocks
//! ```

use clap::{Args, Parser, Subcommand};

/// Stock dashboard data CLI.
///
/// Serves the same payloads as the cloudstocks HTTP API, from the built-in
/// sample catalog, for piping into scripts or eyeballing chart data.
#[derive(Debug, Parser)]
#[command(name = "cloudstocks", author, version, about = "Stock dashboard data CLI")]
pub struct Cli {
    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Synthesize the historical chart payload for a symbol.
    ///
    /// The output is the same `{t,o,h,l,c,v,...}` object the dashboard
    /// chart endpoint serves.
    Chart(ChartArgs),

    /// Search the catalog by symbol or company-name substring.
    Search(SearchArgs),

    /// Print the full reference catalog.
    Stocks,
}

/// Arguments for the `chart` command.
#[derive(Debug, Args)]
pub struct ChartArgs {
    /// Market symbol (e.g. AAPL).
    pub symbol: String,

    /// Chart range: 1d, 5d, 1m, 1y, 5y, 10y, or max.
    ///
    /// Unknown values fall back to the 1m shape, mirroring the HTTP
    /// endpoint's lenient handling.
    #[arg(long, default_value = "1m")]
    pub range: String,
}

/// Arguments for the `search` command.
#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Free-form search keyword (symbol or company name).
    pub query: String,

    /// Maximum number of results to return.
    #[arg(long, default_value_t = 20)]
    pub limit: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_chart_command() {
        let cli = Cli::parse_from(["cloudstocks", "chart", "AAPL", "--range", "5y", "--pretty"]);
        assert!(cli.pretty);
        match cli.command {
            Command::Chart(args) => {
                assert_eq!(args.symbol, "AAPL");
                assert_eq!(args.range, "5y");
            }
            other => panic!("expected chart command, got {other:?}"),
        }
    }

    #[test]
    fn search_defaults_to_twenty_results() {
        let cli = Cli::parse_from(["cloudstocks", "search", "apple"]);
        match cli.command {
            Command::Search(args) => assert_eq!(args.limit, 20),
            other => panic!("expected search command, got {other:?}"),
        }
    }
}
