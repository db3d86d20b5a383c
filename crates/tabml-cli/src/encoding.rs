use anyhow::{Result, anyhow, bail};
use clap::ValueEnum;

/// Text encoding of template sources and HTML output.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum Encoding {
    #[default]
    Ascii,
    #[value(name = "utf-8")]
    Utf8,
    Latin1,
}

impl Encoding {
    pub fn decode(self, bytes: &[u8]) -> Result<String> {
        match self {
            Encoding::Ascii => {
                if let Some(pos) = bytes.iter().position(|byte| !byte.is_ascii()) {
                    bail!("byte 0x{:02x} at offset {} is not ASCII", bytes[pos], pos);
                }
                Ok(bytes.iter().map(|&byte| char::from(byte)).collect())
            }
            Encoding::Utf8 => Ok(std::str::from_utf8(bytes)?.to_owned()),
            Encoding::Latin1 => Ok(bytes.iter().map(|&byte| char::from(byte)).collect()),
        }
    }

    pub fn encode(self, text: &str) -> Result<Vec<u8>> {
        match self {
            Encoding::Ascii => {
                if let Some(ch) = text.chars().find(|ch| !ch.is_ascii()) {
                    bail!("character {:?} cannot be written as ASCII", ch);
                }
                Ok(text.as_bytes().to_vec())
            }
            Encoding::Utf8 => Ok(text.as_bytes().to_vec()),
            Encoding::Latin1 => text
                .chars()
                .map(|ch| {
                    u8::try_from(ch)
                        .map_err(|_| anyhow!("character {:?} cannot be written as Latin-1", ch))
                })
                .collect(),
        }
    }
}
