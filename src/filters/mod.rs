//! Template filters.
//!
//! Data filters work on `serde_json::Value` so they can be bridged to any
//! template engine; text filters work on `&str`.
//!
//! | Filter          | Function                      |
//! |-----------------|-------------------------------|
//! | `attr_set`      | [`attr_set`]                  |
//! | `attr_concat`   | [`attr_concat`]               |
//! | `attr_includes` | [`attr_includes`]             |
//! | `where_in`      | [`where_in`]                  |
//! | `merge`         | [`merge`]                     |
//! | `if`            | [`iff`]                       |
//! | `section`       | [`section`]                   |
//! | `strip_tag`     | [`strip_tag`]                 |
//! | `remove_tag`    | [`remove_tag`]                |
//! | `unindent`      | [`unindent`]                  |

mod attr;
mod iff;
mod merge;
mod section;
mod tags;
mod unindent;

pub use attr::{attr_concat, attr_includes, attr_set, resolve_path, where_in};
pub use iff::{iff, is_truthy};
pub use merge::merge;
pub use section::section;
pub use tags::{remove_tag, strip_tag};
pub use unindent::unindent;

use serde_json::Value;
use thiserror::Error;

/// Errors raised by filters that reject their input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("`{filter}` expects an array, got {found}")]
    NotACollection {
        filter: &'static str,
        found: &'static str,
    },
}

/// JSON type name, for error messages.
pub(crate) fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
