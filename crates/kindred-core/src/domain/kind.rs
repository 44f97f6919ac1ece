//! KindId - hierarchy に登録された kind の識別子
//!
//! kind は名前で識別します。同じ名前は同じ kind を指し、
//! hierarchy から削除された後に同じ名前で再登録することもできます。

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::typed::Strategy;

/// Stable identifier of a kind in a type hierarchy.
///
/// Serialized transparently as its name, e.g. `"shape.circle"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KindId(String);

impl KindId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The kind a typed [`Strategy`] is registered under.
    pub fn of<T: Strategy>() -> Self {
        Self(T::KIND.to_string())
    }

    /// True if this is the kind `T` is registered under.
    pub fn is<T: Strategy>(&self) -> bool {
        self.0 == T::KIND
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for KindId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for KindId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for KindId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
