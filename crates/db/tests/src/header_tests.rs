use std::{
    sync::{Arc, Barrier},
    thread,
};

use lucid_db_types::traits::HeaderDatabase;
use lucid_test_utils::{fixtures, ArbitraryGenerator};

pub fn test_put_and_get_header(db: &impl HeaderDatabase) {
    let mut arb = ArbitraryGenerator::new();
    let header = fixtures::random_header(&mut arb, 7);

    assert!(db.try_put_header(&header).unwrap());
    assert_eq!(db.get_header(7).unwrap(), Some(header));
    assert_eq!(db.get_header(8).unwrap(), None);
    assert_eq!(db.get_header_count().unwrap(), 1);
}

pub fn test_duplicate_sequence_rejected(db: &impl HeaderDatabase) {
    let first = fixtures::header(5, 1);
    let second = fixtures::header(5, 2);

    assert!(db.try_put_header(&first).unwrap());
    assert!(!db.try_put_header(&second).unwrap());
    assert!(!db.try_put_header(&first).unwrap());

    // The original stays in place verbatim.
    assert_eq!(db.get_header(5).unwrap(), Some(first));
    assert_eq!(db.get_header_count().unwrap(), 1);
}

pub fn test_latest_sequence_out_of_order(db: &impl HeaderDatabase) {
    assert_eq!(db.get_latest_sequence().unwrap(), None);

    for seq in [5u64, 3, 260, 1, 256] {
        db.try_put_header(&fixtures::header(seq, seq as u8)).unwrap();
    }
    assert_eq!(db.get_latest_sequence().unwrap(), Some(260));

    // A rejected duplicate doesn't move it.
    assert!(!db.try_put_header(&fixtures::header(3, 0)).unwrap());
    assert_eq!(db.get_latest_sequence().unwrap(), Some(260));
}

pub fn test_headers_range(db: &impl HeaderDatabase) {
    for seq in [1u64, 2, 4, 8] {
        db.try_put_header(&fixtures::header(seq, seq as u8)).unwrap();
    }

    let seqs: Vec<u64> = db
        .get_headers_range(2, 8)
        .unwrap()
        .iter()
        .map(|h| h.sequence_id())
        .collect();
    assert_eq!(seqs, vec![2, 4]);

    assert!(db.get_headers_range(8, 2).unwrap().is_empty());
    assert!(db.get_headers_range(5, 5).unwrap().is_empty());
}

pub fn test_concurrent_same_sequence<D: HeaderDatabase>(db: D) {
    const THREADS: usize = 8;

    let db = Arc::new(db);
    let barrier = Arc::new(Barrier::new(THREADS));
    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let db = db.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                db.try_put_header(&fixtures::header(42, i as u8)).unwrap()
            })
        })
        .collect();

    let wins = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|won| *won)
        .count();
    assert_eq!(wins, 1);
    assert_eq!(db.get_header_count().unwrap(), 1);
}

#[macro_export]
macro_rules! header_db_tests {
    ($setup_expr:expr) => {
        #[test]
        fn test_put_and_get_header() {
            let db = $setup_expr;
            $crate::header_tests::test_put_and_get_header(&db);
        }

        #[test]
        fn test_duplicate_sequence_rejected() {
            let db = $setup_expr;
            $crate::header_tests::test_duplicate_sequence_rejected(&db);
        }

        #[test]
        fn test_latest_sequence_out_of_order() {
            let db = $setup_expr;
            $crate::header_tests::test_latest_sequence_out_of_order(&db);
        }

        #[test]
        fn test_headers_range() {
            let db = $setup_expr;
            $crate::header_tests::test_headers_range(&db);
        }

        #[test]
        fn test_concurrent_same_sequence() {
            let db = $setup_expr;
            $crate::header_tests::test_concurrent_same_sequence(db);
        }
    };
}
