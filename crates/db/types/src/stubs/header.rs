use std::collections::BTreeMap;

use lucid_chain_types::Header;
use lucid_identifiers::SequenceId;
use parking_lot::Mutex;

use crate::{traits::HeaderDatabase, DbResult};

#[derive(Debug, Default)]
pub struct StubHeaderDb {
    headers: Mutex<BTreeMap<SequenceId, Header>>,
}

impl StubHeaderDb {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HeaderDatabase for StubHeaderDb {
    fn try_put_header(&self, header: &Header) -> DbResult<bool> {
        let mut tbl = self.headers.lock();
        if tbl.contains_key(&header.sequence_id()) {
            return Ok(false);
        }
        tbl.insert(header.sequence_id(), header.clone());
        Ok(true)
    }

    fn get_header(&self, sequence_id: SequenceId) -> DbResult<Option<Header>> {
        Ok(self.headers.lock().get(&sequence_id).cloned())
    }

    fn get_latest_sequence(&self) -> DbResult<Option<SequenceId>> {
        Ok(self.headers.lock().keys().next_back().copied())
    }

    fn get_headers_range(&self, start: SequenceId, end: SequenceId) -> DbResult<Vec<Header>> {
        if start >= end {
            return Ok(Vec::new());
        }
        Ok(self
            .headers
            .lock()
            .range(start..end)
            .map(|(_, h)| h.clone())
            .collect())
    }

    fn get_header_count(&self) -> DbResult<u64> {
        Ok(self.headers.lock().len() as u64)
    }
}
