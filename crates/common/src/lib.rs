//! Shared runtime plumbing for lucid binaries and services.

pub mod logging;
