//! Fixed-size byte buffers.

use crate::macros::internal::{
    impl_buf_arbitrary, impl_buf_borsh, impl_buf_core, impl_buf_fmt, impl_buf_serde,
};

/// A 20-byte buffer, sized for account addresses.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Buf20(pub [u8; 20]);

impl_buf_core!(Buf20, 20);
impl_buf_fmt!(Buf20, 20);
impl_buf_borsh!(Buf20, 20);
impl_buf_arbitrary!(Buf20, 20);
impl_buf_serde!(Buf20, 20);

/// A 32-byte buffer, used for digests.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Buf32(pub [u8; 32]);

impl_buf_core!(Buf32, 32);
impl_buf_fmt!(Buf32, 32);
impl_buf_borsh!(Buf32, 32);
impl_buf_arbitrary!(Buf32, 32);
impl_buf_serde!(Buf32, 32);
