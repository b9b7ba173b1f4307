use std::{path::Path, sync::Arc};

use lucid_db_store_sled::{open_sled_backend, SledBackend, SledDbConfig, SLED_NAME};

use crate::errors::{DisplayableError, DisplayedError};

/// Opens the sled store under `datadir`, refusing to create a fresh one.
pub(crate) fn open_database(datadir: &Path) -> Result<Arc<SledBackend>, DisplayedError> {
    let path = datadir.join("sled").join(SLED_NAME);
    if !path.is_dir() {
        return Err(DisplayedError::UserError(
            "no lucid database found in datadir".to_owned(),
            Box::new(path),
        ));
    }
    open_sled_backend(datadir, SLED_NAME, SledDbConfig::production())
        .map_err(|e| format!("{e:#}"))
        .internal_error("Failed to open sled database")
}
