//! Block payloads: the semantic records sealed into the chain.
//!
//! A payload is stored in a block as the lowercase hex of its UTF-8 JSON
//! encoding. The genesis block carries a plain marker string; every other
//! block carries a [`StarClaim`].

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Marker record carried by the genesis block unless configured otherwise.
pub const DEFAULT_GENESIS_MARKER: &str = "First block in the chain - Genesis block";

/// Description of a claimed star.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Star {
    /// Right ascension.
    pub ra: String,
    /// Declination.
    pub dec: String,
    /// Free-form story attached by the claimant.
    pub story: String,
    /// Apparent magnitude.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mag: Option<String>,
    /// Constellation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cen: Option<String>,
}

impl Star {
    pub fn new(ra: impl Into<String>, dec: impl Into<String>, story: impl Into<String>) -> Self {
        Self {
            ra: ra.into(),
            dec: dec.into(),
            story: story.into(),
            mag: None,
            cen: None,
        }
    }

    pub fn with_magnitude(mut self, mag: impl Into<String>) -> Self {
        self.mag = Some(mag.into());
        self
    }

    pub fn with_constellation(mut self, cen: impl Into<String>) -> Self {
        self.cen = Some(cen.into());
        self
    }
}

/// An ownership record: `owner` claims `star`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StarClaim {
    pub owner: String,
    pub star: Star,
}

/// The semantic record carried by a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BlockPayload {
    /// An ownership claim.
    Claim(StarClaim),
    /// The genesis marker.
    Marker(String),
}

impl BlockPayload {
    /// Create the genesis marker payload.
    pub fn genesis(marker: impl Into<String>) -> Self {
        BlockPayload::Marker(marker.into())
    }

    /// Create an ownership claim payload.
    pub fn claim(owner: impl Into<String>, star: Star) -> Self {
        BlockPayload::Claim(StarClaim {
            owner: owner.into(),
            star,
        })
    }

    /// The claim, if this payload is one.
    pub fn as_claim(&self) -> Option<&StarClaim> {
        match self {
            BlockPayload::Claim(claim) => Some(claim),
            BlockPayload::Marker(_) => None,
        }
    }

    /// Encode into the stored block body (hex of JSON).
    pub fn encode(&self) -> Result<String, CoreError> {
        let json = serde_json::to_vec(self).map_err(|e| CoreError::EncodingError(e.to_string()))?;
        Ok(hex::encode(json))
    }

    /// Decode a stored block body.
    pub fn decode(body: &str) -> Result<Self, CoreError> {
        let json = hex::decode(body).map_err(|e| CoreError::DecodingError(e.to_string()))?;
        serde_json::from_slice(&json).map_err(|e| CoreError::DecodingError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_claim_roundtrip() {
        let payload = BlockPayload::claim("A1", Star::new("2", "1", "test"));
        let body = payload.encode().unwrap();
        assert_eq!(BlockPayload::decode(&body).unwrap(), payload);
    }

    #[test]
    fn test_genesis_roundtrip() {
        let payload = BlockPayload::genesis(DEFAULT_GENESIS_MARKER);
        let body = payload.encode().unwrap();
        let decoded = BlockPayload::decode(&body).unwrap();
        assert_eq!(decoded, payload);
        assert!(decoded.as_claim().is_none());
    }

    #[test]
    fn test_body_is_lowercase_hex_of_json() {
        let payload = BlockPayload::genesis("x");
        assert_eq!(payload.encode().unwrap(), hex::encode("\"x\""));
    }

    #[test]
    fn test_optional_star_fields_omitted() {
        let star = Star::new("16h 29m 1.0s", "-26° 29' 24.9", "found it");
        let json = serde_json::to_string(&star).unwrap();
        assert!(!json.contains("mag"));
        assert!(!json.contains("cen"));

        let full = star.with_magnitude("1.06").with_constellation("Scorpius");
        let payload = BlockPayload::claim("owner", full.clone());
        let decoded = BlockPayload::decode(&payload.encode().unwrap()).unwrap();
        assert_eq!(decoded.as_claim().unwrap().star, full);
    }

    #[test]
    fn test_decode_rejects_non_hex() {
        assert!(matches!(
            BlockPayload::decode("not-hex!"),
            Err(CoreError::DecodingError(_))
        ));
    }

    #[test]
    fn test_decode_rejects_unknown_record() {
        let body = hex::encode(br#"{"owner":"a"}"#);
        assert!(matches!(
            BlockPayload::decode(&body),
            Err(CoreError::DecodingError(_))
        ));

        let body = hex::encode(b"[1,2,3]");
        assert!(BlockPayload::decode(&body).is_err());
    }

    proptest! {
        #[test]
        fn test_any_claim_roundtrips(
            owner in "[0-9a-f]{1,64}",
            ra in ".{0,32}",
            dec in ".{0,32}",
            story in ".{0,256}",
            mag in proptest::option::of("[0-9.]{1,6}"),
        ) {
            let mut star = Star::new(ra, dec, story);
            star.mag = mag;
            let payload = BlockPayload::claim(owner, star);
            let decoded = BlockPayload::decode(&payload.encode().unwrap()).unwrap();
            prop_assert_eq!(decoded, payload);
        }

        #[test]
        fn test_any_marker_roundtrips(marker in ".{0,128}") {
            let payload = BlockPayload::genesis(marker);
            let decoded = BlockPayload::decode(&payload.encode().unwrap()).unwrap();
            prop_assert_eq!(decoded, payload);
        }
    }
}
