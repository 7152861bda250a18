//! Golden test vectors for the wire format.
//!
//! These vectors pin the stored body encoding and the canonical header bytes
//! that block hashes are computed over, so every implementation reading or
//! writing this chain agrees byte for byte.

use star_registry_core::{canonical_header_bytes, BlockHash, BlockPayload, Star, DEFAULT_GENESIS_MARKER};

/// A golden test vector.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// The payload sealed into the block.
    pub payload: BlockPayload,
    /// Block height.
    pub height: u64,
    /// Seal time (Unix seconds).
    pub time: i64,
    /// Previous block hash, if any.
    pub previous: Option<BlockHash>,
    /// Expected block body (hex of JSON).
    pub expected_body: &'static str,
    /// Expected canonical header bytes (hex).
    pub expected_header: &'static str,
}

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "genesis with default marker",
            payload: BlockPayload::genesis(DEFAULT_GENESIS_MARKER),
            height: 0,
            time: 1_736_870_400,
            previous: None,
            expected_body: "22466972737420626c6f636b20696e2074686520636861696e202d2047656e6573697320626c6f636b22",
            expected_header: "a40000011a67868a0002f6037854323234363639373237333734323036323663366636333662323036393665323037343638363532303633363836313639366532303264323034373635366536353733363937333230363236633666363336623232",
        },
        GoldenVector {
            name: "claim by A1 ten seconds later",
            payload: BlockPayload::claim("A1", Star::new("2", "1", "test")),
            height: 1,
            time: 1_736_870_410,
            previous: Some(BlockHash::from_bytes([0xab; 32])),
            expected_body: "7b226f776e6572223a224131222c2273746172223a7b227261223a2232222c22646563223a2231222c2273746f7279223a2274657374227d7d",
            expected_header: "a40001011a67868a0a025820abababababababababababababababababababababababababababababababab037872376232323666373736653635373232323361323234313331323232633232373337343631373232323361376232323732363132323361323233323232326332323634363536333232336132323331323232633232373337343666373237393232336132323734363537333734323237643764",
        },
        GoldenVector {
            name: "empty marker before the epoch",
            payload: BlockPayload::genesis(""),
            height: 0,
            time: -5,
            previous: None,
            expected_body: "2222",
            expected_header: "a40000012402f6036432323232",
        },
    ]
}

/// Check every vector, returning the names of those that fail.
pub fn verify_all_vectors() -> Vec<&'static str> {
    all_vectors()
        .into_iter()
        .filter(|v| !vector_matches(v))
        .map(|v| v.name)
        .collect()
}

fn vector_matches(vector: &GoldenVector) -> bool {
    let Ok(body) = vector.payload.encode() else {
        return false;
    };
    if body != vector.expected_body {
        return false;
    }
    match canonical_header_bytes(vector.height, vector.time, vector.previous.as_ref(), &body) {
        Ok(header) => hex::encode(header) == vector.expected_header,
        Err(_) => false,
    }
}
