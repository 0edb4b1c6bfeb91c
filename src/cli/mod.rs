//! CLI module for the user & order service

pub mod serve;

use clap::{Parser, Subcommand};

/// User & Order Service - In-memory users and orders over HTTP
#[derive(Parser)]
#[command(name = "user-order-service")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve(serve::ServeArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_with_overrides() {
        let cli = Cli::try_parse_from(["user-order-service", "serve", "--port", "9000"]).unwrap();

        let Command::Serve(args) = cli.command;
        assert_eq!(args.port, Some(9000));
        assert!(args.host.is_none());
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["user-order-service"]).is_err());
    }
}
