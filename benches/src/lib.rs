//! Benchmarks for the lucid storage backends.

#[allow(
    unused_imports,
    clippy::allow_attributes,
    reason = "used by the bench targets"
)]
use criterion as _;
#[allow(
    unused_imports,
    clippy::allow_attributes,
    reason = "used by the bench targets"
)]
use lucid_identifiers as _;

pub mod db;
