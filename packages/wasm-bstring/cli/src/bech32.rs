use anyhow::{Context, Result};
use clap::Subcommand;
use wasm_bstring::address::bech32;

use crate::input::{decode_hex, read_arg};

#[derive(Subcommand)]
pub enum Bech32Command {
    /// Encode a witness program as a bech32 address
    Encode {
        /// Human-readable part, e.g. "bc" or "tb"
        #[arg(long)]
        hrp: String,
        /// Witness version (0-16)
        #[arg(long, short = 'w', default_value_t = 0)]
        witness_version: u8,
        /// Witness program as hex (use '-' to read from stdin)
        program: String,
    },
    /// Decode a bech32 address into hrp, version and program
    Decode {
        /// The address (use '-' to read from stdin)
        address: String,
    },
    /// Check whether a string is a valid bech32 address
    Test {
        /// The address (use '-' to read from stdin)
        address: String,
    },
}

pub fn handle_command(command: Bech32Command) -> Result<String> {
    match command {
        Bech32Command::Encode {
            hrp,
            witness_version,
            program,
        } => {
            let program = decode_hex(&read_arg(program)?, "program")?;
            log::debug!(
                "bech32 encoding hrp={} version={} program_len={}",
                hrp,
                witness_version,
                program.len()
            );
            bech32::encode(&hrp, witness_version, &program)
                .context("Failed to encode bech32 address")
        }
        Bech32Command::Decode { address } => {
            let address = read_arg(address)?;
            let decoded = bech32::decode(&address).context("Failed to decode bech32 address")?;
            Ok(format!(
                "hrp: {}\nversion: {}\nprogram: {}",
                decoded.hrp,
                decoded.version,
                hex::encode(decoded.program)
            ))
        }
        Bech32Command::Test { address } => {
            let address = read_arg(address)?;
            Ok(bech32::test(&address).to_string())
        }
    }
}
