//! CLI tests

use clap::Parser;

use crate::cli::{Cli, Commands};
use crate::commands::format_inr;

#[test]
fn test_cli_definition_is_consistent() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}

#[test]
fn test_parse_analyze() {
    let cli = Cli::parse_from([
        "bachat", "analyze", "--age", "28", "--income", "75000", "--risk", "high",
    ]);
    match cli.command {
        Commands::Analyze {
            age, income, risk, ..
        } => {
            assert_eq!(age, 28);
            assert_eq!(income, 75_000.0);
            assert_eq!(risk.as_deref(), Some("high"));
        }
        _ => panic!("expected analyze command"),
    }
}

#[test]
fn test_parse_serve_defaults() {
    let cli = Cli::parse_from(["bachat", "serve"]);
    match cli.command {
        Commands::Serve { port, host, .. } => {
            assert_eq!(port, 3000);
            assert_eq!(host, "127.0.0.1");
        }
        _ => panic!("expected serve command"),
    }
}

#[test]
fn test_format_inr() {
    assert_eq!(format_inr(0.0), "₹0");
    assert_eq!(format_inr(999.0), "₹999");
    assert_eq!(format_inr(15_000.0), "₹15,000");
    assert_eq!(format_inr(1_234_567.4), "₹1,234,567");
    assert_eq!(format_inr(-2_500.0), "-₹2,500");
}
