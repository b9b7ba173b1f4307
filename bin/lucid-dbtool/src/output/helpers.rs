use std::fmt::Display;

/// One `key: value` porcelain line.
pub(crate) fn porcelain_field(key: &str, value: impl Display) -> String {
    format!("{key}: {value}")
}

pub(crate) fn porcelain_optional<T: Display>(value: Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "none".to_owned(),
    }
}
