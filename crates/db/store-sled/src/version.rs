use lucid_db_types::{DbError, DbResult};
use tracing::*;

use crate::{schemas::MetaSchema, tree::SledTree};

/// Layout version written by this build.
pub const SCHEMA_VERSION: u32 = 1;

const SCHEMA_VERSION_KEY: &str = "schema_version";

/// Stamps a fresh database with [`SCHEMA_VERSION`], or checks that an existing
/// one carries it.
pub(crate) fn check_schema_version(db: &sled::Db) -> DbResult<()> {
    let meta = SledTree::<MetaSchema>::open(db)?;
    let key = SCHEMA_VERSION_KEY.to_owned();

    if meta.insert_if_absent(&key, &SCHEMA_VERSION)? {
        info!(version = SCHEMA_VERSION, "initialized fresh database");
        return Ok(());
    }

    let found = meta
        .get(&key)?
        .ok_or_else(|| DbError::Other("schema version vanished".to_owned()))?;
    if found != SCHEMA_VERSION {
        return Err(DbError::SchemaVersionMismatch {
            expected: SCHEMA_VERSION,
            found,
        });
    }
    Ok(())
}
