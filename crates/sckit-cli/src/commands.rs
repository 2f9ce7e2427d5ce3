use std::sync::Arc;

use anyhow::Context;
use colored::Colorize;
use sckit_dispatch::CallPayload;
use sckit_store::{InMemoryHostStore, Proxy};
use sckit_types::{
    CodecResult, ScAddress, ScAgentId, ScBigInt, ScChainId, ScHash, ScHname, ScNftId,
    ScRequestId, ScTokenId, ScType,
};
use serde_json::json;
use tracing::debug;

use crate::cli::*;

/// Run `$f::<T>(args..)` with `T` the Rust type behind a [`TypeName`].
macro_rules! with_type {
    ($ty:expr, $f:ident ( $($arg:expr),* )) => {
        match $ty {
            TypeName::Bool => $f::<bool>($($arg),*),
            TypeName::Int8 => $f::<i8>($($arg),*),
            TypeName::Int16 => $f::<i16>($($arg),*),
            TypeName::Int32 => $f::<i32>($($arg),*),
            TypeName::Int64 => $f::<i64>($($arg),*),
            TypeName::Uint8 => $f::<u8>($($arg),*),
            TypeName::Uint16 => $f::<u16>($($arg),*),
            TypeName::Uint32 => $f::<u32>($($arg),*),
            TypeName::Uint64 => $f::<u64>($($arg),*),
            TypeName::BigInt => $f::<ScBigInt>($($arg),*),
            TypeName::Bytes => $f::<Vec<u8>>($($arg),*),
            TypeName::String => $f::<String>($($arg),*),
            TypeName::Hash => $f::<ScHash>($($arg),*),
            TypeName::Hname => $f::<ScHname>($($arg),*),
            TypeName::Address => $f::<ScAddress>($($arg),*),
            TypeName::ChainId => $f::<ScChainId>($($arg),*),
            TypeName::AgentId => $f::<ScAgentId>($($arg),*),
            TypeName::RequestId => $f::<ScRequestId>($($arg),*),
            TypeName::TokenId => $f::<ScTokenId>($($arg),*),
            TypeName::NftId => $f::<ScNftId>($($arg),*),
        }
    };
}

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let format = cli.format;
    match cli.command {
        Command::Hname(args) => cmd_hname(args, format),
        Command::Encode(args) => cmd_encode(args, format),
        Command::Decode(args) => cmd_decode(args, format),
        Command::Key(args) => cmd_key(args, format),
        Command::Payload(args) => cmd_payload(args, format),
    }
}

fn cmd_hname(args: HnameArgs, format: OutputFormat) -> anyhow::Result<()> {
    let hname = ScHname::from_name(&args.name);
    match format {
        OutputFormat::Text => println!("{}  {}", hname.to_string().yellow().bold(), args.name),
        OutputFormat::Json => println!(
            "{}",
            json!({ "name": args.name, "hname": hname.to_string(), "value": hname.value() })
        ),
    }
    Ok(())
}

fn cmd_encode(args: EncodeArgs, format: OutputFormat) -> anyhow::Result<()> {
    let (type_name, bytes) = encode_text(args.ty, &args.text)?;
    let encoded = hex::encode(&bytes);
    match format {
        OutputFormat::Text => println!("{}", encoded.green()),
        OutputFormat::Json => println!(
            "{}",
            json!({ "type": type_name, "text": args.text, "hex": encoded, "length": bytes.len() })
        ),
    }
    Ok(())
}

fn cmd_decode(args: DecodeArgs, format: OutputFormat) -> anyhow::Result<()> {
    let bytes = parse_hex(&args.hex)?;
    let (type_name, text) = decode_bytes(args.ty, &bytes)?;
    match format {
        OutputFormat::Text => println!("{}", text.green()),
        OutputFormat::Json => println!(
            "{}",
            json!({ "type": type_name, "hex": hex::encode(&bytes), "text": text })
        ),
    }
    Ok(())
}

fn cmd_key(args: KeyArgs, format: OutputFormat) -> anyhow::Result<()> {
    let key = compose_key(&args.root, &args.steps);
    match format {
        OutputFormat::Text => println!("{}  {}", hex::encode(&key).yellow(), escape(&key).dimmed()),
        OutputFormat::Json => println!(
            "{}",
            json!({ "root": args.root, "hex": hex::encode(&key), "escaped": escape(&key) })
        ),
    }
    Ok(())
}

fn cmd_payload(args: PayloadArgs, format: OutputFormat) -> anyhow::Result<()> {
    let bytes = parse_hex(&args.hex)?;
    let payload = CallPayload::decode(&bytes).context("decoding call payload")?;
    match format {
        OutputFormat::Text => {
            if payload.is_empty() {
                println!("(empty payload)");
            }
            for (key, value) in payload.iter() {
                println!("  {} = {}", escape(key).bold(), hex::encode(value).green());
            }
        }
        OutputFormat::Json => {
            let pairs: Vec<_> = payload
                .iter()
                .map(|(key, value)| json!({ "key": escape(key), "value": hex::encode(value) }))
                .collect();
            println!("{}", json!({ "entries": pairs }));
        }
    }
    Ok(())
}

/// Canonical bytes of `text` parsed as `ty`, with the codec's type name.
pub fn encode_text(ty: TypeName, text: &str) -> anyhow::Result<(&'static str, Vec<u8>)> {
    fn run<T: ScType>(text: &str) -> CodecResult<(&'static str, Vec<u8>)> {
        Ok((T::TYPE_NAME, T::from_text(text)?.to_bytes()))
    }
    with_type!(ty, run(text)).with_context(|| format!("parsing {text:?} as {ty:?}"))
}

/// Text form of canonical `bytes` read as `ty`, with the codec's type name.
pub fn decode_bytes(ty: TypeName, bytes: &[u8]) -> anyhow::Result<(&'static str, String)> {
    fn run<T: ScType>(bytes: &[u8]) -> CodecResult<(&'static str, String)> {
        Ok((T::TYPE_NAME, T::from_bytes(bytes)?.to_text()))
    }
    with_type!(ty, run(bytes)).with_context(|| format!("decoding {} bytes as {ty:?}", bytes.len()))
}

/// Key path after rooting at `root` and applying `steps` in order.
pub fn compose_key(root: &str, steps: &[KeyStep]) -> Vec<u8> {
    let store = Arc::new(InMemoryHostStore::new());
    let mut proxy = Proxy::new(store).root(root);
    for step in steps {
        proxy = match step {
            KeyStep::Key(key) => proxy.key(key),
            KeyStep::Index(index) => proxy.index(*index),
        };
        debug!(step = ?step, key = %hex::encode(proxy.key_path()), "applied key step");
    }
    proxy.key_path().to_vec()
}

fn parse_hex(text: &str) -> anyhow::Result<Vec<u8>> {
    let text = text.trim();
    let text = text.strip_prefix("0x").unwrap_or(text);
    hex::decode(text).with_context(|| format!("invalid hex {text:?}"))
}

fn escape(bytes: &[u8]) -> String {
    bytes
        .iter()
        .flat_map(|&b| std::ascii::escape_default(b))
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_and_decode_scalars() {
        assert_eq!(encode_text(TypeName::Uint16, "258").unwrap(), ("Uint16", vec![2, 1]));
        assert_eq!(encode_text(TypeName::Bool, "true").unwrap().1, vec![1]);
        assert_eq!(
            decode_bytes(TypeName::Int32, &[0xfe, 0xff, 0xff, 0xff]).unwrap(),
            ("Int32", "-2".to_string())
        );
        assert_eq!(decode_bytes(TypeName::Uint64, &[]).unwrap().1, "0");
    }

    #[test]
    fn hname_text_roundtrip() {
        let hname = ScHname::from_name("setOwnerMargin");
        let (_, bytes) = encode_text(TypeName::Hname, &hname.to_string()).unwrap();
        assert_eq!(bytes, hname.value().to_le_bytes().to_vec());
        assert_eq!(decode_bytes(TypeName::Hname, &bytes).unwrap().1, hname.to_string());
    }

    #[test]
    fn big_int_is_decimal() {
        let (name, bytes) = encode_text(TypeName::BigInt, "65536").unwrap();
        assert_eq!((name, bytes.clone()), ("BigInt", vec![1, 0, 0]));
        assert_eq!(decode_bytes(TypeName::BigInt, &bytes).unwrap().1, "65536");
        assert_eq!(decode_bytes(TypeName::BigInt, &[]).unwrap().1, "0");
    }

    #[test]
    fn request_id_text() {
        let mut bytes = vec![0xab; 32];
        bytes.extend_from_slice(&[0, 0]);
        let (_, text) = decode_bytes(TypeName::RequestId, &bytes).unwrap();
        assert_eq!(text, format!("0-{}", "ab".repeat(32)));
        assert_eq!(encode_text(TypeName::RequestId, &text).unwrap().1, bytes);
    }

    #[test]
    fn bad_input_is_reported() {
        assert!(encode_text(TypeName::Uint8, "256").is_err());
        assert!(decode_bytes(TypeName::Hash, &[1, 2, 3]).is_err());
        assert!(decode_bytes(TypeName::TokenId, &[0; 32]).is_err());
        assert!(parse_hex("xyz").is_err());
        assert_eq!(parse_hex("0x0a0b").unwrap(), vec![10, 11]);
    }

    #[test]
    fn key_composition() {
        let key = compose_key("bets", &[KeyStep::Index(2), KeyStep::Key(b"x".to_vec())]);
        assert_eq!(key, b"bets#\x02\x00\x00\x00|x".to_vec());
        assert_eq!(compose_key("owner", &[]), b"owner".to_vec());
    }

    #[test]
    fn escape_is_printable() {
        assert_eq!(escape(b"a|b#\x01"), "a|b#\\x01");
    }
}
