use std::{
    sync::{Arc, Barrier},
    thread,
};

use lucid_chain_types::MintRecord;
use lucid_db_types::{traits::BridgeDatabase, types::MintCommit};
use lucid_identifiers::SourceTxId;
use lucid_test_utils::fixtures;

pub fn test_mint_marks_processed(db: &impl BridgeDatabase) {
    let tx = SourceTxId::from("tx-42");
    let rec = MintRecord::new(fixtures::identity(1), 100);

    assert!(!db.is_processed(&tx).unwrap());
    let res = db.record_mint(&tx, rec.clone(), 1_000).unwrap();
    assert_eq!(res, MintCommit::Committed { total_minted: 100 });

    assert!(db.is_processed(&tx).unwrap());
    assert_eq!(db.get_mint_record(&tx).unwrap(), Some(rec));
    assert_eq!(db.get_totals().unwrap().total_minted, 100);
    assert_eq!(db.processed_count().unwrap(), 1);
}

pub fn test_replay_rejected(db: &impl BridgeDatabase) {
    let tx = SourceTxId::from("tx-1");
    let rec = MintRecord::new(fixtures::identity(1), 10);

    assert!(db.record_mint(&tx, rec.clone(), 1_000).unwrap().is_committed());
    let again = db
        .record_mint(&tx, MintRecord::new(fixtures::identity(2), 20), 1_000)
        .unwrap();
    assert_eq!(again, MintCommit::AlreadyProcessed);

    assert_eq!(db.get_mint_record(&tx).unwrap(), Some(rec));
    assert_eq!(db.get_totals().unwrap().total_minted, 10);
    assert_eq!(db.processed_count().unwrap(), 1);
}

pub fn test_cap_enforced(db: &impl BridgeDatabase) {
    let alice = fixtures::identity(1);
    let bob = fixtures::identity(2);
    db.record_mint(&SourceTxId::from("tx-0"), MintRecord::new(alice, 950), 1_000)
        .unwrap();

    let tx = SourceTxId::from("tx-9");
    let res = db.record_mint(&tx, MintRecord::new(bob, 100), 1_000).unwrap();
    assert_eq!(res, MintCommit::CapExceeded { total_minted: 950 });

    // The rejected id was not consumed.
    assert!(!db.is_processed(&tx).unwrap());
    assert_eq!(db.get_totals().unwrap().total_minted, 950);

    let res = db.record_mint(&tx, MintRecord::new(bob, 50), 1_000).unwrap();
    assert_eq!(res, MintCommit::Committed { total_minted: 1_000 });
}

pub fn test_cap_overflow_is_rejected(db: &impl BridgeDatabase) {
    let alice = fixtures::identity(1);
    db.record_mint(&SourceTxId::from("a"), MintRecord::new(alice, u128::MAX - 1), u128::MAX)
        .unwrap();

    let res = db
        .record_mint(&SourceTxId::from("b"), MintRecord::new(alice, 5), u128::MAX)
        .unwrap();
    assert!(matches!(res, MintCommit::CapExceeded { .. }));
}

pub fn test_burn_accounting(db: &impl BridgeDatabase) {
    let alice = fixtures::identity(1);
    let bob = fixtures::identity(2);

    assert_eq!(db.get_bridged_balance(&alice).unwrap(), 0);
    assert_eq!(db.record_burn(&alice, 30).unwrap(), 30);
    assert_eq!(db.record_burn(&alice, 12).unwrap(), 42);
    assert_eq!(db.record_burn(&bob, 8).unwrap(), 8);

    assert_eq!(db.get_bridged_balance(&alice).unwrap(), 42);
    let totals = db.get_totals().unwrap();
    assert_eq!(totals.total_bridged_out, 50);
    assert_eq!(totals.total_minted, 0);
}

pub fn test_concurrent_same_source_tx<D: BridgeDatabase>(db: D) {
    const THREADS: usize = 8;

    let db = Arc::new(db);
    let barrier = Arc::new(Barrier::new(THREADS));
    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let db = db.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                let rec = MintRecord::new(fixtures::identity(i as u8), 100);
                barrier.wait();
                db.record_mint(&SourceTxId::from("tx-42"), rec, 10_000)
                    .unwrap()
            })
        })
        .collect();

    let committed = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(MintCommit::is_committed)
        .count();
    assert_eq!(committed, 1);
    assert_eq!(db.get_totals().unwrap().total_minted, 100);
}

pub fn test_concurrent_distinct_mints_respect_cap<D: BridgeDatabase>(db: D) {
    const THREADS: usize = 10;

    let db = Arc::new(db);
    let barrier = Arc::new(Barrier::new(THREADS));
    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let db = db.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                let tx = SourceTxId::from(format!("tx-{i}").as_str());
                let rec = MintRecord::new(fixtures::identity(1), 100);
                barrier.wait();
                db.record_mint(&tx, rec, 550).unwrap()
            })
        })
        .collect();

    let committed = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(MintCommit::is_committed)
        .count();
    assert_eq!(committed, 5);
    assert_eq!(db.get_totals().unwrap().total_minted, 500);
    assert_eq!(db.processed_count().unwrap(), 5);
}

#[macro_export]
macro_rules! bridge_db_tests {
    ($setup_expr:expr) => {
        #[test]
        fn test_mint_marks_processed() {
            let db = $setup_expr;
            $crate::bridge_tests::test_mint_marks_processed(&db);
        }

        #[test]
        fn test_replay_rejected() {
            let db = $setup_expr;
            $crate::bridge_tests::test_replay_rejected(&db);
        }

        #[test]
        fn test_cap_enforced() {
            let db = $setup_expr;
            $crate::bridge_tests::test_cap_enforced(&db);
        }

        #[test]
        fn test_cap_overflow_is_rejected() {
            let db = $setup_expr;
            $crate::bridge_tests::test_cap_overflow_is_rejected(&db);
        }

        #[test]
        fn test_burn_accounting() {
            let db = $setup_expr;
            $crate::bridge_tests::test_burn_accounting(&db);
        }

        #[test]
        fn test_concurrent_same_source_tx() {
            let db = $setup_expr;
            $crate::bridge_tests::test_concurrent_same_source_tx(db);
        }

        #[test]
        fn test_concurrent_distinct_mints_respect_cap() {
            let db = $setup_expr;
            $crate::bridge_tests::test_concurrent_distinct_mints_respect_cap(db);
        }
    };
}
