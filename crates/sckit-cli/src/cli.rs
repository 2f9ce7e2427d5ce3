use std::str::FromStr;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "sckit",
    about = "Contract value encodings, name-hashes and key paths",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the 4-byte name-hash of a name
    Hname(HnameArgs),
    /// Print the canonical bytes of a value as hex
    Encode(EncodeArgs),
    /// Print the text form of canonical bytes
    Decode(DecodeArgs),
    /// Print the key path composed from a root and a list of steps
    Key(KeyArgs),
    /// List the pairs of an encoded call payload
    Payload(PayloadArgs),
}

#[derive(Args)]
pub struct HnameArgs {
    pub name: String,
}

#[derive(Args)]
pub struct EncodeArgs {
    pub ty: TypeName,
    pub text: String,
}

#[derive(Args)]
pub struct DecodeArgs {
    pub ty: TypeName,
    /// Canonical bytes as hex; empty decodes to the default value
    #[arg(default_value = "")]
    pub hex: String,
}

#[derive(Args)]
pub struct KeyArgs {
    pub root: String,
    /// `key:<hex>` or `index:<n>`, applied in order
    #[arg(long = "step")]
    pub steps: Vec<KeyStep>,
}

#[derive(Args)]
pub struct PayloadArgs {
    pub hex: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum TypeName {
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    BigInt,
    Bytes,
    String,
    Hash,
    Hname,
    Address,
    ChainId,
    AgentId,
    RequestId,
    TokenId,
    NftId,
}

/// One path step of the `key` command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyStep {
    Key(Vec<u8>),
    Index(u32),
}

impl FromStr for KeyStep {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(rest) = s.strip_prefix("key:") {
            let rest = rest.strip_prefix("0x").unwrap_or(rest);
            return hex::decode(rest)
                .map(KeyStep::Key)
                .map_err(|e| format!("invalid key hex {rest:?}: {e}"));
        }
        if let Some(rest) = s.strip_prefix("index:") {
            return rest
                .parse()
                .map(KeyStep::Index)
                .map_err(|e| format!("invalid index {rest:?}: {e}"));
        }
        Err(format!("expected key:<hex> or index:<n>, got {s:?}"))
    }
}
