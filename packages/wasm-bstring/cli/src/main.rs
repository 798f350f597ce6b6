use anyhow::Result;
use clap::{Parser, Subcommand};

mod base58;
mod bech32;
mod cashaddr;
mod input;

#[derive(Parser)]
#[command(name = "bstring-cli")]
#[command(about = "CLI tool for base58, bech32 and cashaddr encoding", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Plain base58 encoding and decoding
    Base58 {
        #[command(subcommand)]
        command: base58::Base58Command,
    },
    /// Bech32 witness address encoding and decoding
    Bech32 {
        #[command(subcommand)]
        command: bech32::Bech32Command,
    },
    /// Cashaddr encoding and decoding
    Cashaddr {
        #[command(subcommand)]
        command: cashaddr::CashAddrCommand,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let output = match cli.command {
        Commands::Base58 { command } => base58::handle_command(command)?,
        Commands::Bech32 { command } => bech32::handle_command(command)?,
        Commands::Cashaddr { command } => cashaddr::handle_command(command)?,
    };
    println!("{}", output);
    Ok(())
}
