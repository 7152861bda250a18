//! Canonical CBOR encoding of the block header, the preimage of a block hash.
//!
//! This module implements the subset of RFC 8949 Core Deterministic Encoding
//! the header needs:
//! - Map keys sorted by encoded byte comparison
//! - Integers use smallest valid encoding
//! - Definite lengths only
//! - No floats (time is i64 seconds)
//!
//! The same header always produces identical bytes, and therefore the same
//! hash, on every platform.

use ciborium::value::Value;

use crate::error::CoreError;
use crate::types::BlockHash;

/// Domain prefix for block hashing.
pub const HASH_DOMAIN: &[u8] = b"star-registry-block-v0:";

/// Header field keys (integer keys for compact encoding).
///
/// Keys 0-23 encode as single bytes in CBOR.
mod keys {
    pub const HEIGHT: u64 = 0;
    pub const TIME: u64 = 1;
    pub const PREVIOUS_BLOCK_HASH: u64 = 2;
    pub const BODY: u64 = 3;
}

/// Encode the hashed fields of a block to canonical CBOR bytes.
pub fn canonical_header_bytes(
    height: u64,
    time: i64,
    previous_block_hash: Option<&BlockHash>,
    body: &str,
) -> Result<Vec<u8>, CoreError> {
    let value = header_to_cbor_value(height, time, previous_block_hash, body);
    let mut buf = Vec::new();
    encode_value_to(&mut buf, &value)?;
    Ok(buf)
}

/// Compute the block hash: Blake3(HASH_DOMAIN || canonical header).
pub fn compute_block_hash(
    height: u64,
    time: i64,
    previous_block_hash: Option<&BlockHash>,
    body: &str,
) -> Result<BlockHash, CoreError> {
    let header = canonical_header_bytes(height, time, previous_block_hash, body)?;
    let mut hasher = blake3::Hasher::new();
    hasher.update(HASH_DOMAIN);
    hasher.update(&header);
    Ok(BlockHash(*hasher.finalize().as_bytes()))
}

/// Build the header map (integer keys, already in key order).
fn header_to_cbor_value(
    height: u64,
    time: i64,
    previous_block_hash: Option<&BlockHash>,
    body: &str,
) -> Value {
    let previous = match previous_block_hash {
        Some(hash) => Value::Bytes(hash.0.to_vec()),
        None => Value::Null,
    };

    Value::Map(vec![
        (Value::Integer(keys::HEIGHT.into()), Value::Integer(height.into())),
        (Value::Integer(keys::TIME.into()), Value::Integer(time.into())),
        (Value::Integer(keys::PREVIOUS_BLOCK_HASH.into()), previous),
        (Value::Integer(keys::BODY.into()), Value::Text(body.to_owned())),
    ])
}

/// Recursively encode a CBOR value.
fn encode_value_to(buf: &mut Vec<u8>, value: &Value) -> Result<(), CoreError> {
    match value {
        Value::Integer(i) => encode_integer(buf, *i),
        Value::Bytes(b) => encode_bytes(buf, b),
        Value::Text(s) => encode_text(buf, s),
        Value::Map(entries) => encode_map_canonical(buf, entries)?,
        Value::Null => buf.push(0xf6),
        other => {
            return Err(CoreError::EncodingError(format!(
                "unsupported CBOR value in header: {:?}",
                other
            )))
        }
    }
    Ok(())
}

/// Encode a CBOR integer (major types 0 and 1).
fn encode_integer(buf: &mut Vec<u8>, i: ciborium::value::Integer) {
    let n: i128 = i.into();

    if n >= 0 {
        encode_uint(buf, 0, n as u64);
    } else {
        // CBOR encodes -1 as 0, -2 as 1, etc.
        let abs = (-1 - n) as u64;
        encode_uint(buf, 1, abs);
    }
}

/// Encode an unsigned integer with the given major type.
fn encode_uint(buf: &mut Vec<u8>, major: u8, n: u64) {
    let mt = major << 5;
    if n < 24 {
        buf.push(mt | (n as u8));
    } else if n <= 0xff {
        buf.push(mt | 24);
        buf.push(n as u8);
    } else if n <= 0xffff {
        buf.push(mt | 25);
        buf.extend_from_slice(&(n as u16).to_be_bytes());
    } else if n <= 0xffffffff {
        buf.push(mt | 26);
        buf.extend_from_slice(&(n as u32).to_be_bytes());
    } else {
        buf.push(mt | 27);
        buf.extend_from_slice(&n.to_be_bytes());
    }
}

/// Encode a byte string (major type 2).
fn encode_bytes(buf: &mut Vec<u8>, bytes: &[u8]) {
    encode_uint(buf, 2, bytes.len() as u64);
    buf.extend_from_slice(bytes);
}

/// Encode a text string (major type 3).
fn encode_text(buf: &mut Vec<u8>, s: &str) {
    encode_uint(buf, 3, s.len() as u64);
    buf.extend_from_slice(s.as_bytes());
}

/// Encode a map canonically (major type 5).
///
/// Keys are sorted by their encoded byte comparison.
fn encode_map_canonical(buf: &mut Vec<u8>, entries: &[(Value, Value)]) -> Result<(), CoreError> {
    let mut key_value_pairs = Vec::with_capacity(entries.len());
    for (k, v) in entries {
        let mut key_buf = Vec::new();
        encode_value_to(&mut key_buf, k)?;
        key_value_pairs.push((key_buf, v));
    }

    key_value_pairs.sort_by(|a, b| a.0.cmp(&b.0));

    encode_uint(buf, 5, key_value_pairs.len() as u64);

    for (key_bytes, value) in key_value_pairs {
        buf.extend_from_slice(&key_bytes);
        encode_value_to(buf, value)?;
    }
    Ok(())
}
