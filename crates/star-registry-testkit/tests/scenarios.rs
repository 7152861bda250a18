//! End-to-end scenarios across the ledger and its wallets.

use std::sync::Arc;

use star_registry::{Block, LedgerError, Star};
use star_registry_testkit::{init_tracing, multi_wallet_fixtures, test_ledger, TestWallet};

const T: i64 = 1_736_870_400;

#[test]
fn test_claim_within_window_is_registered() {
    init_tracing();
    let (ledger, clock) = test_ledger(T);
    let genesis = ledger.get_block_by_height(0).unwrap();
    let wallet = TestWallet::with_seed([0xa1; 32]);
    let address = wallet.address();

    let message = ledger.request_ownership_challenge(&address);
    assert_eq!(message, format!("{}:{}:starRegistry", address, T));

    clock.set(T + 10);
    let signature = wallet.sign(&message);
    let block = ledger
        .submit_star(&address, &message, &signature, Star::new("2", "1", "test"))
        .unwrap();

    assert_eq!(block.height, 1);
    assert_eq!(block.time, T + 10);
    assert_eq!(block.previous_block_hash, Some(genesis.hash));
    assert_eq!(ledger.height(), 1);
    assert_eq!(ledger.get_block_by_height(1).unwrap(), block);

    let stars = ledger.get_stars_by_owner(&address);
    assert_eq!(stars.len(), 1);
    assert_eq!(stars[0].owner, address);
    assert_eq!(stars[0].star, Star::new("2", "1", "test"));

    assert!(ledger.validate_chain().is_valid());
}

#[test]
fn test_late_claim_is_refused_and_chain_unchanged() {
    init_tracing();
    let (ledger, clock) = test_ledger(T);
    let wallet = TestWallet::with_seed([0xa2; 32]);
    let address = wallet.address();

    let message = ledger.request_ownership_challenge(&address);
    let signature = wallet.sign(&message);

    clock.set(T + 301);
    let result = ledger.submit_star(&address, &message, &signature, Star::new("2", "1", "late"));

    assert!(matches!(result, Err(LedgerError::ChallengeExpired { .. })));
    assert_eq!(ledger.height(), 0);
    assert!(ledger.get_stars_by_owner(&address).is_empty());
}

#[test]
fn test_lookups_agree_with_each_other() {
    let (ledger, clock) = test_ledger(T);
    let wallets = multi_wallet_fixtures(3);

    let mut sealed: Vec<Block> = Vec::new();
    for (i, wallet) in wallets.iter().enumerate() {
        clock.advance(7);
        let star = Star::new(i.to_string(), "0", format!("star {}", i)).with_constellation("Lyra");
        sealed.push(wallet.claim(&ledger, star).unwrap());
    }

    for block in &sealed {
        assert_eq!(&ledger.get_block_by_height(block.height).unwrap(), block);
        assert_eq!(
            ledger.get_block_by_hash(&block.hash.to_hex()).unwrap(),
            vec![block.clone()]
        );
    }

    let tip = ledger.latest_block().unwrap();
    assert_eq!(tip, sealed[2]);
    assert_eq!(ledger.blocks().len(), 4);
}

#[test]
fn test_blocks_serialize_to_the_wire_shape() {
    let (ledger, clock) = test_ledger(T);
    let wallet = TestWallet::with_seed([0xa3; 32]);
    clock.advance(1);
    let block = wallet.claim(&ledger, Star::new("2", "1", "test")).unwrap();

    let json = serde_json::to_value(&block).unwrap();
    assert_eq!(json["height"], 1);
    assert_eq!(json["time"], T + 1);
    assert_eq!(
        json["previousBlockHash"],
        ledger.get_block_by_height(0).unwrap().hash.to_hex()
    );
    assert_eq!(json["hash"], block.hash.to_hex());

    let back: Block = serde_json::from_value(json).unwrap();
    assert_eq!(back, block);
    assert!(back.validate());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_submissions_keep_heights_dense() {
    init_tracing();
    let (ledger, _clock) = test_ledger(T);
    let ledger = Arc::new(ledger);

    let handles: Vec<_> = multi_wallet_fixtures(16)
        .into_iter()
        .enumerate()
        .map(|(i, wallet)| {
            let ledger = Arc::clone(&ledger);
            tokio::task::spawn_blocking(move || {
                wallet.claim(&ledger, Star::new("0", "0", format!("concurrent {}", i)))
            })
        })
        .collect();

    let mut heights = Vec::new();
    for handle in handles {
        let block = handle.await.unwrap().unwrap();
        heights.push(block.height);
    }
    heights.sort_unstable();

    assert_eq!(heights, (1..=16).collect::<Vec<u64>>());
    assert_eq!(ledger.height(), 16);

    let report = ledger.validate_chain();
    assert!(report.is_valid());
    assert_eq!(report.blocks_checked, 17);
}
