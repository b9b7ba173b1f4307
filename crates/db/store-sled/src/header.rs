use lucid_chain_types::Header;
use lucid_db_types::{traits::HeaderDatabase, DbResult};
use lucid_identifiers::SequenceId;

use crate::schemas::HeaderSchema;

define_sled_database!(
    pub struct HeaderDBSled {
        header_tree: HeaderSchema,
    }
);

impl HeaderDatabase for HeaderDBSled {
    fn try_put_header(&self, header: &Header) -> DbResult<bool> {
        self.header_tree
            .insert_if_absent(&header.sequence_id(), header)
    }

    fn get_header(&self, sequence_id: SequenceId) -> DbResult<Option<Header>> {
        self.header_tree.get(&sequence_id)
    }

    fn get_latest_sequence(&self) -> DbResult<Option<SequenceId>> {
        self.header_tree.last_key()
    }

    fn get_headers_range(&self, start: SequenceId, end: SequenceId) -> DbResult<Vec<Header>> {
        Ok(self
            .header_tree
            .range(start..end)?
            .into_iter()
            .map(|(_, h)| h)
            .collect())
    }

    fn get_header_count(&self) -> DbResult<u64> {
        Ok(self.header_tree.len() as u64)
    }
}
