//! Backend-agnostic conformance tests for the storage traits.
//!
//! Each backend instantiates the `*_db_tests!` macros with an expression
//! that builds a fresh, empty database.

pub mod bridge_tests;
pub mod header_tests;

#[cfg(test)]
mod stub_tests {
    mod header {
        use lucid_db_types::stubs::StubHeaderDb;

        crate::header_db_tests!(StubHeaderDb::new());
    }

    mod bridge {
        use lucid_db_types::stubs::StubBridgeDb;

        crate::bridge_db_tests!(StubBridgeDb::new());
    }
}
