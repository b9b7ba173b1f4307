use std::{fs, path::Path, sync::Arc};

use anyhow::Context;
use lucid_db_types::DbResult;

use crate::{SledBackend, SledDbConfig};

/// Opens the sled instance at `<datadir>/sled/<dbname>`, creating it if needed.
pub fn open_sled_database(datadir: &Path, dbname: &str) -> anyhow::Result<sled::Db> {
    let mut database_dir = datadir.to_path_buf();
    database_dir.push("sled");
    database_dir.push(dbname);

    if !database_dir.exists() {
        fs::create_dir_all(&database_dir)
            .with_context(|| format!("creating {}", database_dir.display()))?;
    }

    sled::open(&database_dir).context("opening sled database")
}

pub fn init_core_dbs(sled_db: &sled::Db, config: SledDbConfig) -> DbResult<Arc<SledBackend>> {
    SledBackend::new(sled_db, config).map(Arc::new)
}
