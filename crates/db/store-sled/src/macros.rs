/// Declares a schema type for a tree whose name is the type name.
macro_rules! define_table {
    ($(#[$docs:meta])+ ( $table_name:ident ) $key:ty => $value:ty) => {
        $(#[$docs])+
        ///
        #[doc = concat!("Takes [`", stringify!($key), "`] as a key and returns [`", stringify!($value), "`]")]
        #[derive(Clone, Copy, Debug, Default)]
        pub(crate) struct $table_name;

        impl $crate::schema::Schema for $table_name {
            const TREE_NAME: &'static str = ::core::stringify!($table_name);
            type Key = $key;
            type Value = $value;
        }
    };
}

/// Declares a database struct holding one typed tree per field plus the
/// retry config, with a constructor that opens every tree.
macro_rules! define_sled_database {
    (
        $(#[$meta:meta])*
        pub struct $db_name:ident {
            $($field:ident: $schema:ty),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub struct $db_name {
            $(
                $field: $crate::tree::SledTree<$schema>,
            )*
            #[allow(
                dead_code,
                clippy::allow_attributes,
                reason = "not every database runs transactions"
            )]
            config: $crate::SledDbConfig,
        }

        impl $db_name {
            pub fn new(
                db: &::sled::Db,
                config: $crate::SledDbConfig,
            ) -> ::lucid_db_types::DbResult<Self> {
                Ok(Self {
                    $(
                        $field: $crate::tree::SledTree::open(db)?,
                    )*
                    config,
                })
            }
        }
    };
}

/// Instantiates a conformance test macro against a fresh temporary database.
#[cfg(test)]
macro_rules! sled_db_test_setup {
    ($db_type:ty, $test_macro:ident) => {
        fn setup_db() -> $db_type {
            let db = ::sled::Config::new().temporary(true).open().unwrap();
            <$db_type>::new(&db, $crate::SledDbConfig::test()).unwrap()
        }

        $test_macro!(setup_db());
    };
}
