use anyhow::{Context, Result};
use std::io::{self, Read};

/// Resolve a positional argument, reading it from stdin if it is "-"
pub fn read_arg(value: String) -> Result<String> {
    if value != "-" {
        return Ok(value);
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read from stdin")?;
    Ok(buffer.trim().to_string())
}

/// Decode a hex argument into bytes
pub fn decode_hex(value: &str, name: &str) -> Result<Vec<u8>> {
    let trimmed = value.trim();
    let trimmed = trimmed.strip_prefix("0x").unwrap_or(trimmed);
    hex::decode(trimmed).with_context(|| format!("Invalid hex string for {}", name))
}
