//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

pub fn r#true() -> bool {
    true
}

pub mod paths {
    use std::path::PathBuf;

    pub fn input() -> PathBuf {
        ".".into()
    }

    pub fn fragments() -> PathBuf {
        "_fragments".into()
    }
}
