use std::{fmt, marker::PhantomData, ops::Range};

use lucid_db_types::{DbError, DbResult};
use sled::{
    transaction::{
        ConflictableTransactionError, ConflictableTransactionResult, TransactionResult,
        TransactionalTree,
    },
    IVec, Transactional, Tree,
};
use tracing::*;

use crate::{
    schema::{KeyCodec, Schema, ValueCodec},
    utils::to_db_error,
};

fn decode_pair<S: Schema>((k, v): (IVec, IVec)) -> DbResult<(S::Key, S::Value)> {
    Ok((S::Key::decode_key(&k)?, S::Value::decode_value(&v)?))
}

/// Sled tree bound to a schema.
#[derive(Debug)]
pub(crate) struct SledTree<S: Schema> {
    inner: Tree,
    _phantom: PhantomData<S>,
}

impl<S: Schema> SledTree<S> {
    pub(crate) fn open(db: &sled::Db) -> DbResult<Self> {
        let inner = db.open_tree(S::TREE_NAME).map_err(to_db_error)?;
        Ok(Self {
            inner,
            _phantom: PhantomData,
        })
    }

    pub(crate) fn get(&self, key: &S::Key) -> DbResult<Option<S::Value>> {
        let val = self.inner.get(key.encode_key()).map_err(to_db_error)?;
        val.as_deref().map(S::Value::decode_value).transpose()
    }

    pub(crate) fn contains_key(&self, key: &S::Key) -> DbResult<bool> {
        self.inner
            .contains_key(key.encode_key())
            .map_err(to_db_error)
    }

    /// Writes the entry only if the key is vacant, as one compare-and-swap.
    /// Returns whether the write happened. A flush failure after a successful
    /// swap is logged, not returned, since the entry is already visible.
    pub(crate) fn insert_if_absent(&self, key: &S::Key, value: &S::Value) -> DbResult<bool> {
        let res = self
            .inner
            .compare_and_swap(key.encode_key(), None::<&[u8]>, Some(value.encode_value()?))
            .map_err(to_db_error)?;
        if res.is_ok() {
            if let Err(e) = self.inner.flush() {
                error!(%e, tree = S::TREE_NAME, "flush failed after committed insert");
            }
        }
        Ok(res.is_ok())
    }

    pub(crate) fn last_key(&self) -> DbResult<Option<S::Key>> {
        self.inner
            .last()
            .map_err(to_db_error)?
            .map(|(k, _)| S::Key::decode_key(&k))
            .transpose()
    }

    /// Entries in `range`, in key order.
    pub(crate) fn range(&self, range: Range<S::Key>) -> DbResult<Vec<(S::Key, S::Value)>> {
        let start = range.start.encode_key();
        let end = range.end.encode_key();
        if start >= end {
            return Ok(Vec::new());
        }
        self.inner
            .range(start..end)
            .map(|kv| kv.map_err(to_db_error).and_then(decode_pair::<S>))
            .collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.inner.len()
    }

    pub(crate) fn flush(&self) -> DbResult<()> {
        self.inner.flush().map_err(to_db_error)?;
        Ok(())
    }
}

/// Schema-bound view of a tree inside a sled transaction.
///
/// Codec failures abort the transaction with the [`DbError`]; sled's own
/// conflicts propagate so sled can rerun the closure.
pub(crate) struct SledTransactionalTree<S: Schema> {
    inner: TransactionalTree,
    _phantom: PhantomData<S>,
}

impl<S: Schema> fmt::Debug for SledTransactionalTree<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SledTransactionalTree")
            .field("tree", &S::TREE_NAME)
            .finish_non_exhaustive()
    }
}

impl<S: Schema> SledTransactionalTree<S> {
    fn new(inner: TransactionalTree) -> Self {
        Self {
            inner,
            _phantom: PhantomData,
        }
    }

    pub(crate) fn get(
        &self,
        key: &S::Key,
    ) -> ConflictableTransactionResult<Option<S::Value>, DbError> {
        let val = self.inner.get(key.encode_key())?;
        val.as_deref()
            .map(S::Value::decode_value)
            .transpose()
            .map_err(ConflictableTransactionError::Abort)
    }

    pub(crate) fn insert(
        &self,
        key: &S::Key,
        value: &S::Value,
    ) -> ConflictableTransactionResult<(), DbError> {
        let value = value
            .encode_value()
            .map_err(ConflictableTransactionError::Abort)?;
        self.inner.insert(key.encode_key(), value)?;
        Ok(())
    }
}

/// Groups of trees that can be updated in one sled transaction.
pub(crate) trait SledTransactional {
    type View;

    fn transaction<F, R>(&self, func: F) -> TransactionResult<R, DbError>
    where
        F: Fn(Self::View) -> ConflictableTransactionResult<R, DbError>;

    fn flush(&self) -> DbResult<()>;
}

macro_rules! impl_sled_transactional {
    ($(($idx:tt, $schema:ident, $var:ident)),+) => {
        impl<'a, $($schema: Schema),+> SledTransactional for ($(&'a SledTree<$schema>),+,) {
            type View = ($(SledTransactionalTree<$schema>),+,);

            fn transaction<F, R>(&self, func: F) -> TransactionResult<R, DbError>
            where
                F: Fn(Self::View) -> ConflictableTransactionResult<R, DbError>,
            {
                ($(&self.$idx.inner),+,).transaction(|($($var),+,)| {
                    func(($(SledTransactionalTree::<$schema>::new($var.clone())),+,))
                })
            }

            fn flush(&self) -> DbResult<()> {
                $(self.$idx.flush()?;)+
                Ok(())
            }
        }
    };
}

impl_sled_transactional!((0, S0, t0), (1, S1, t1));
impl_sled_transactional!((0, S0, t0), (1, S1, t1), (2, S2, t2));
