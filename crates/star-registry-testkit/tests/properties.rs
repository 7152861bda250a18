//! Property tests over ledgers built from random submissions.

use proptest::prelude::*;

use star_registry::{LedgerError, ValidationError};
use star_registry_testkit::fixtures::{test_ledger, TestWallet};
use star_registry_testkit::generators::ClaimParams;

const T: i64 = 1_736_870_400;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn test_chain_links_hold_after_random_submissions(
        claims in prop::collection::vec(any::<ClaimParams>(), 1..12)
    ) {
        let (ledger, clock) = test_ledger(T);
        let mut accepted = 0i64;

        for params in claims {
            let wallet = TestWallet::with_seed(params.seed);
            let address = wallet.address();
            let message = ledger.request_ownership_challenge(&address);
            let signature = wallet.sign(&message);

            clock.advance(params.delay);
            let result = ledger.submit_star(&address, &message, &signature, params.star.clone());

            if params.delay < 300 {
                let block = result.unwrap();
                prop_assert_eq!(block.star_claim().unwrap().star, params.star);
                accepted += 1;
            } else {
                let expired = matches!(result, Err(LedgerError::ChallengeExpired { .. }));
                prop_assert!(expired);
            }
            prop_assert_eq!(ledger.height(), accepted);
        }

        let blocks = ledger.blocks();
        prop_assert_eq!(blocks[0].previous_block_hash, None);
        for (i, pair) in blocks.windows(2).enumerate() {
            prop_assert_eq!(pair[1].height, i as u64 + 1);
            prop_assert_eq!(pair[1].previous_block_hash, Some(pair[0].hash));
            prop_assert!(pair[1].time >= pair[0].time);
        }
        prop_assert!(ledger.validate_chain().is_valid());
    }

    #[test]
    fn test_stars_by_owner_partition_the_claims(
        claims in prop::collection::vec(any::<ClaimParams>(), 1..10)
    ) {
        let (ledger, _clock) = test_ledger(T);
        let mut owners = Vec::new();

        for params in &claims {
            let wallet = TestWallet::with_seed(params.seed);
            wallet.claim(&ledger, params.star.clone()).unwrap();
            owners.push(wallet.address());
        }
        owners.sort();
        owners.dedup();

        let total: usize = owners.iter().map(|o| ledger.get_stars_by_owner(o).len()).sum();
        prop_assert_eq!(total, claims.len());
    }

    #[test]
    fn test_any_single_field_tamper_is_detected(
        claims in prop::collection::vec(any::<ClaimParams>(), 2..6),
        pick in any::<prop::sample::Index>(),
    ) {
        let (ledger, _clock) = test_ledger(T);
        for params in &claims {
            TestWallet::with_seed(params.seed).claim(&ledger, params.star.clone()).unwrap();
        }

        let mut blocks = ledger.blocks();
        let k = pick.index(blocks.len());
        blocks[k].time += 1;

        prop_assert!(!blocks[k].validate());
        let recomputed = blocks[k].compute_hash().unwrap();
        prop_assert_ne!(recomputed, blocks[k].hash);
        let fault = star_registry::core::validate_block(&blocks[k]);
        let is_mismatch = matches!(fault, Err(ValidationError::HashMismatch { .. }));
        prop_assert!(is_mismatch);
    }
}
