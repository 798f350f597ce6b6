use anyhow::{Context, Result};
use clap::Subcommand;
use wasm_bstring::address::cashaddr;

use crate::input::{decode_hex, read_arg};

const DEFAULT_PREFIX: &str = "bitcoincash";

#[derive(Subcommand)]
pub enum CashAddrCommand {
    /// Encode a hash as a cashaddr address
    Encode {
        /// Address prefix
        #[arg(long, default_value = DEFAULT_PREFIX)]
        prefix: String,
        /// Address type (0 = P2PKH, 1 = P2SH)
        #[arg(long = "type", short = 't', default_value_t = 0)]
        address_type: u8,
        /// Hash as hex (use '-' to read from stdin)
        hash: String,
    },
    /// Decode a cashaddr address into prefix, type and hash
    Decode {
        /// Prefix assumed when the address has none
        #[arg(long, default_value = DEFAULT_PREFIX)]
        prefix: String,
        /// The address (use '-' to read from stdin)
        address: String,
    },
    /// Check whether a string is a valid cashaddr address
    Test {
        /// Prefix assumed when the address has none
        #[arg(long, default_value = DEFAULT_PREFIX)]
        prefix: String,
        /// The address (use '-' to read from stdin)
        address: String,
    },
}

pub fn handle_command(command: CashAddrCommand) -> Result<String> {
    match command {
        CashAddrCommand::Encode {
            prefix,
            address_type,
            hash,
        } => {
            let hash = decode_hex(&read_arg(hash)?, "hash")?;
            log::debug!(
                "cashaddr encoding prefix={} type={} hash_len={}",
                prefix,
                address_type,
                hash.len()
            );
            cashaddr::encode(&prefix, address_type, &hash)
                .context("Failed to encode cashaddr address")
        }
        CashAddrCommand::Decode { prefix, address } => {
            let address = read_arg(address)?;
            log::debug!("cashaddr decoding {:?} (default prefix {})", address, prefix);
            let decoded =
                cashaddr::decode(&address, &prefix).context("Failed to decode cashaddr address")?;
            Ok(format!(
                "prefix: {}\ntype: {}\nhash: {}",
                decoded.prefix,
                decoded.address_type,
                hex::encode(decoded.hash)
            ))
        }
        CashAddrCommand::Test { prefix, address } => {
            let address = read_arg(address)?;
            Ok(cashaddr::test(&address, &prefix).to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDRESS: &str = "bitcoincash:qpm2qsznhks23z7629mms6s4cwef74vcwvy22gdx6a";
    const HASH: &str = "76a04053bda0a88bda5177b86a15c3b29f559873";

    #[test]
    fn test_encode() {
        let encoded = handle_command(CashAddrCommand::Encode {
            prefix: DEFAULT_PREFIX.to_string(),
            address_type: 0,
            hash: HASH.to_string(),
        })
        .unwrap();
        assert_eq!(encoded, ADDRESS);
    }

    #[test]
    fn test_decode_without_prefix() {
        let decoded = handle_command(CashAddrCommand::Decode {
            prefix: DEFAULT_PREFIX.to_string(),
            address: "qpm2qsznhks23z7629mms6s4cwef74vcwvy22gdx6a".to_string(),
        })
        .unwrap();
        assert_eq!(decoded, format!("prefix: bitcoincash\ntype: 0\nhash: {}", HASH));
    }

    #[test]
    fn test_decode_error_context() {
        let err = handle_command(CashAddrCommand::Decode {
            prefix: DEFAULT_PREFIX.to_string(),
            address: "bitcoincash:qpm2qsznhks23z7629mms6s4cwef74vcwvy22gdx6c".to_string(),
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "Failed to decode cashaddr address");
        assert_eq!(err.root_cause().to_string(), "Invalid cashaddr checksum.");
    }

    #[test]
    fn test_test_command() {
        let result = handle_command(CashAddrCommand::Test {
            prefix: DEFAULT_PREFIX.to_string(),
            address: ADDRESS.to_string(),
        })
        .unwrap();
        assert_eq!(result, "true");
    }
}
