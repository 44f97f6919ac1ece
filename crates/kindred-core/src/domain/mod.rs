//! Domain model (kind identifiers, errors).

pub mod kind;
pub mod errors;

pub use self::kind::KindId;
pub use self::errors::{ConfigError, HierarchyError, ResolveError};
