//! In-memory implementations of the storage traits, for tests and tooling.

mod bridge;
mod header;

use std::sync::Arc;

pub use bridge::StubBridgeDb;
pub use header::StubHeaderDb;

use crate::traits::{BridgeDatabase, DatabaseBackend, HeaderDatabase};

#[derive(Debug, Default)]
pub struct StubBackend {
    header_db: Arc<StubHeaderDb>,
    bridge_db: Arc<StubBridgeDb>,
}

impl StubBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DatabaseBackend for StubBackend {
    fn header_db(&self) -> Arc<impl HeaderDatabase> {
        self.header_db.clone()
    }

    fn bridge_db(&self) -> Arc<impl BridgeDatabase> {
        self.bridge_db.clone()
    }
}
