use anyhow::{Context, Result};
use clap::Subcommand;
use wasm_bstring::address::base58;

use crate::input::{decode_hex, read_arg};

#[derive(Subcommand)]
pub enum Base58Command {
    /// Encode bytes (hex) as base58
    Encode {
        /// Data as hex (use '-' to read from stdin)
        data: String,
    },
    /// Decode a base58 string to bytes (hex)
    Decode {
        /// The base58 string (use '-' to read from stdin)
        text: String,
    },
    /// Check whether a string is valid base58
    Test {
        /// The string to check (use '-' to read from stdin)
        text: String,
    },
}

pub fn handle_command(command: Base58Command) -> Result<String> {
    match command {
        Base58Command::Encode { data } => {
            let data = decode_hex(&read_arg(data)?, "data")?;
            log::debug!("base58 encoding {} bytes", data.len());
            Ok(base58::encode(&data))
        }
        Base58Command::Decode { text } => {
            let text = read_arg(text)?;
            log::debug!("base58 decoding {:?}", text);
            let data = base58::decode(&text).context("Failed to decode base58 string")?;
            Ok(hex::encode(data))
        }
        Base58Command::Test { text } => {
            let text = read_arg(text)?;
            Ok(base58::test(&text).to_string())
        }
    }
}
