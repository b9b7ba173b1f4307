//! Database utilities for benchmarking.

use std::sync::Arc;

use lucid_chain_types::Header;
use lucid_db_store_sled::{open_sled_backend, SledBackend, SledDbConfig};
use lucid_db_types::{
    stubs::StubBackend,
    traits::{BridgeDatabase, DatabaseBackend, HeaderDatabase},
};
use lucid_test_utils::ArbitraryGenerator;
use tempfile::TempDir;

/// Different database backends for benchmarking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BenchBackend {
    Stub,
    Sled,
}

impl BenchBackend {
    pub fn available_backends() -> [BenchBackend; 2] {
        [BenchBackend::Stub, BenchBackend::Sled]
    }

    pub fn name(&self) -> &'static str {
        match self {
            BenchBackend::Stub => "stub",
            BenchBackend::Sled => "sled",
        }
    }
}

/// Fresh stores for one benchmark iteration.
#[derive(Debug)]
pub struct BenchSetup {
    pub header_db: Arc<dyn HeaderDatabase>,
    pub bridge_db: Arc<dyn BridgeDatabase>,
    _sled: Option<(Arc<SledBackend>, TempDir)>,
}

impl BenchSetup {
    pub fn new(backend: BenchBackend) -> Self {
        match backend {
            BenchBackend::Stub => {
                let db = StubBackend::new();
                Self {
                    header_db: db.header_db(),
                    bridge_db: db.bridge_db(),
                    _sled: None,
                }
            }
            BenchBackend::Sled => {
                let temp_dir = TempDir::new().expect("bench: create temp directory");
                let db = open_sled_backend(temp_dir.path(), "benchmark_db", SledDbConfig::test())
                    .expect("bench: open sled backend");
                Self {
                    header_db: db.header_db(),
                    bridge_db: db.bridge_db(),
                    _sled: Some((db, temp_dir)),
                }
            }
        }
    }
}

/// `count` random headers with sequence ids `0..count`.
pub fn generate_headers(count: usize) -> Vec<Header> {
    let mut arb = ArbitraryGenerator::new();
    (0..count as u64)
        .map(|seq| lucid_test_utils::fixtures::random_header(&mut arb, seq))
        .collect()
}
