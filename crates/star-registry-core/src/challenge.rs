//! Ownership challenges.
//!
//! A challenge binds an address to the second it was issued:
//! `<address>:<unixSeconds>:starRegistry`. Wallet signing apps depend on this
//! literal format.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Literal tag closing every challenge message.
pub const CHALLENGE_TAG: &str = "starRegistry";

/// A parsed ownership challenge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Challenge {
    /// The address the challenge was issued to.
    pub address: String,
    /// Issue time (Unix seconds).
    pub issued_at: i64,
}

impl Challenge {
    pub fn new(address: impl Into<String>, issued_at: i64) -> Self {
        Self {
            address: address.into(),
            issued_at,
        }
    }

    /// Seconds between issue and `now` (negative if issued in the future).
    pub fn elapsed(&self, now: i64) -> i64 {
        now.saturating_sub(self.issued_at)
    }
}

impl fmt::Display for Challenge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.address, self.issued_at, CHALLENGE_TAG)
    }
}

impl FromStr for Challenge {
    type Err = CoreError;

    fn from_str(message: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = message.split(':').collect();
        let [address, issued_at, tag] = parts.as_slice() else {
            return Err(CoreError::MalformedChallenge(format!(
                "expected 3 ':'-separated parts, got {}",
                parts.len()
            )));
        };

        if address.is_empty() {
            return Err(CoreError::MalformedChallenge("empty address".into()));
        }

        let issued_at = issued_at
            .parse::<i64>()
            .map_err(|e| CoreError::MalformedChallenge(format!("bad timestamp: {}", e)))?;

        if *tag != CHALLENGE_TAG {
            return Err(CoreError::MalformedChallenge(format!(
                "expected tag {:?}, got {:?}",
                CHALLENGE_TAG, tag
            )));
        }

        Ok(Challenge::new(*address, issued_at))
    }
}
