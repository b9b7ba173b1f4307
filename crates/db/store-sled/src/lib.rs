//! Sled store for the finality log and bridge state.

#[macro_use]
mod macros;

mod bridge;
mod config;
mod header;
mod init;
mod schema;
mod schemas;
mod tree;
mod utils;
mod version;

use std::{path::Path, sync::Arc};

use lucid_db_types::{
    traits::{BridgeDatabase, DatabaseBackend, HeaderDatabase},
    DbResult,
};

pub use crate::{
    bridge::BridgeDBSled,
    config::{Backoff, ConstantBackoff, SledDbConfig},
    header::HeaderDBSled,
    init::{init_core_dbs, open_sled_database},
    version::SCHEMA_VERSION,
};

pub const SLED_NAME: &str = "lucid";

/// Opens a complete Sled backend from datadir.
pub fn open_sled_backend(
    datadir: &Path,
    dbname: &str,
    ops_config: SledDbConfig,
) -> anyhow::Result<Arc<SledBackend>> {
    let sled_db = open_sled_database(datadir, dbname)?;
    SledBackend::new(&sled_db, ops_config)
        .map_err(|e| anyhow::anyhow!("failed to initialize sled backend: {e}"))
        .map(Arc::new)
}

/// Complete Sled backend with all database types
#[derive(Debug)]
pub struct SledBackend {
    db: sled::Db,
    header_db: Arc<HeaderDBSled>,
    bridge_db: Arc<BridgeDBSled>,
}

impl SledBackend {
    /// Checks the schema version, then opens every tree.
    pub fn new(sled_db: &sled::Db, config: SledDbConfig) -> DbResult<Self> {
        version::check_schema_version(sled_db)?;

        let header_db = Arc::new(HeaderDBSled::new(sled_db, config.clone())?);
        let bridge_db = Arc::new(BridgeDBSled::new(sled_db, config)?);
        Ok(Self {
            db: sled_db.clone(),
            header_db,
            bridge_db,
        })
    }

    /// Flushes every dirty buffer to disk.
    pub fn flush(&self) -> DbResult<()> {
        self.db.flush().map_err(utils::to_db_error)?;
        Ok(())
    }

    pub fn header_db_sled(&self) -> Arc<HeaderDBSled> {
        self.header_db.clone()
    }

    pub fn bridge_db_sled(&self) -> Arc<BridgeDBSled> {
        self.bridge_db.clone()
    }
}

impl DatabaseBackend for SledBackend {
    fn header_db(&self) -> Arc<impl HeaderDatabase> {
        self.header_db.clone()
    }

    fn bridge_db(&self) -> Arc<impl BridgeDatabase> {
        self.bridge_db.clone()
    }
}
