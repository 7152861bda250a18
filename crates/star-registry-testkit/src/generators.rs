//! Proptest generators for property-based testing.

use proptest::prelude::*;

use star_registry_core::{BlockPayload, Keypair, Star, StarClaim};

/// Generate a random keypair.
pub fn keypair() -> impl Strategy<Value = Keypair> {
    any::<[u8; 32]>().prop_map(|seed| Keypair::from_seed(&seed))
}

/// Generate a hex wallet address.
pub fn address() -> impl Strategy<Value = String> {
    keypair().prop_map(|kp| kp.address().to_hex())
}

/// Generate a coordinate-like string.
pub fn coordinate() -> impl Strategy<Value = String> {
    "-?[0-9]{1,3}(\\.[0-9]{1,4})?".prop_map(String::from)
}

/// Generate a star story, including non-ASCII text.
pub fn story() -> impl Strategy<Value = String> {
    "\\PC{0,64}".prop_map(String::from)
}

/// Generate a star with optional magnitude and constellation.
pub fn star() -> impl Strategy<Value = Star> {
    (
        coordinate(),
        coordinate(),
        story(),
        proptest::option::of("[0-9]\\.[0-9]{1,2}"),
        proptest::option::of("[A-Z][a-z]{2,12}"),
    )
        .prop_map(|(ra, dec, story, mag, cen)| Star {
            ra,
            dec,
            story,
            mag,
            cen,
        })
}

/// Generate an ownership claim.
pub fn star_claim() -> impl Strategy<Value = StarClaim> {
    (address(), star()).prop_map(|(owner, star)| StarClaim { owner, star })
}

/// Generate any block payload.
pub fn payload() -> impl Strategy<Value = BlockPayload> {
    prop_oneof![
        star_claim().prop_map(BlockPayload::Claim),
        story().prop_map(BlockPayload::Marker),
    ]
}

/// Parameters for one submission: who signs, what they claim, and how long
/// after the challenge they submit.
#[derive(Debug, Clone)]
pub struct ClaimParams {
    pub seed: [u8; 32],
    pub star: Star,
    pub delay: i64,
}

impl Arbitrary for ClaimParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (any::<[u8; 4]>(), star(), 0i64..600)
            .prop_map(|(seed_prefix, star, delay)| {
                let mut seed = [0u8; 32];
                seed[..4].copy_from_slice(&seed_prefix);
                ClaimParams { seed, star, delay }
            })
            .boxed()
    }
}
