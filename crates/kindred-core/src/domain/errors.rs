//! Errors - resolve / hierarchy / config のエラー型
//!
//! # 分類
//! - **ResolveError**: `Resolver::resolve` の失敗（呼び出し側に即座に返す、リトライなし）
//! - **HierarchyError**: kind の登録・削除の失敗
//! - **ConfigError**: `ResolverConfig` の読み込み失敗

use thiserror::Error;

use super::kind::KindId;

/// Failure of a single resolve call.
///
/// `args` is the `Debug` rendering of the arguments the call was made with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("no concrete kind under '{root}' can handle {args}")]
    NoMatch { root: KindId, args: String },

    #[error("many concrete kinds under '{root}' can handle {args}: {matches:?}")]
    AmbiguousMatch {
        root: KindId,
        args: String,
        /// Every matching kind, in traversal order.
        matches: Vec<KindId>,
    },

    /// The candidate neither defines nor inherits the predicate.
    #[error("kind '{kind}' has no capability predicate named '{predicate}'")]
    MissingCapability { kind: KindId, predicate: String },

    #[error("root kind '{0}' is not part of the hierarchy")]
    UnknownRoot(KindId),
}

impl ResolveError {
    /// The argument rendering for `NoMatch` / `AmbiguousMatch`.
    pub fn args(&self) -> Option<&str> {
        match self {
            Self::NoMatch { args, .. } | Self::AmbiguousMatch { args, .. } => Some(args),
            Self::MissingCapability { .. } | Self::UnknownRoot(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HierarchyError {
    #[error("kind '{0}' is already declared")]
    DuplicateKind(KindId),

    #[error("parent kind '{0}' is not declared")]
    UnknownParent(KindId),

    #[error("kind '{0}' is not declared")]
    UnknownKind(KindId),

    #[error("kind '{kind}' still has {count} direct descendant(s)")]
    HasDescendants { kind: KindId, count: usize },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid resolver config: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_match_message_includes_args() {
        let err = ResolveError::NoMatch {
            root: KindId::new("shape"),
            args: "\"5-sided\"".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("shape"));
        assert!(msg.contains("5-sided"));
        assert_eq!(err.args(), Some("\"5-sided\""));
    }

    #[test]
    fn ambiguous_message_lists_matches() {
        let err = ResolveError::AmbiguousMatch {
            root: KindId::new("shape"),
            args: "x".to_string(),
            matches: vec![KindId::new("square"), KindId::new("triangle")],
        };
        let msg = err.to_string();
        assert!(msg.contains("square"));
        assert!(msg.contains("triangle"));
    }

    #[test]
    fn unknown_root_carries_no_args() {
        let err = ResolveError::UnknownRoot(KindId::new("ghost"));
        assert_eq!(err.args(), None);
    }
}
