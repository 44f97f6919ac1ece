//! Resolver - root kind 以下から引数を処理できる concrete kind を一つ選ぶ
//!
//! # 判定フロー
//! 1. walker で root 以下の concrete kind を列挙（traversal order）
//! 2. 各 candidate の capability predicate を引数で評価（全件、短絡しない）
//! 3. 一致数で判定
//!    - 0 件 + default あり → default をそのまま返す
//!    - 1 件 → その kind
//!    - 2 件以上 → AmbiguousMatch
//!    - 0 件 + default なし → NoMatch

use std::fmt::Debug;

use tracing::{debug, trace};

use super::config::ResolverConfig;
use super::walker::concrete_kinds;
use crate::domain::{KindId, ResolveError};
use crate::ports::TypeHierarchy;

/// Predicate name used when none is configured.
pub const DEFAULT_PREDICATE: &str = "can_handle";

/// A root kind bound together with a predicate name and an optional default.
///
/// The binding never changes after construction. Each resolve call reads
/// the hierarchy it is given afresh.
///
/// # 使用例
/// ```ignore
/// let resolver = Resolver::bind("shape");
/// let kind = resolver.resolve(&hierarchy, "round")?;
/// assert_eq!(kind, KindId::new("circle"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolver {
    root: KindId,
    predicate: String,
    default: Option<KindId>,
}

/// Per-call overrides of the resolver binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Returned when no candidate matches.
    pub default: Option<KindId>,
    /// Predicate to evaluate instead of the bound one.
    pub predicate: Option<String>,
}

impl ResolveOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default(mut self, kind: impl Into<KindId>) -> Self {
        self.default = Some(kind.into());
        self
    }

    pub fn with_predicate(mut self, name: impl Into<String>) -> Self {
        self.predicate = Some(name.into());
        self
    }
}

impl Resolver {
    /// Bind a resolver to `root`. The root is not checked until resolve time.
    pub fn bind(root: impl Into<KindId>) -> Self {
        Self {
            root: root.into(),
            predicate: DEFAULT_PREDICATE.to_string(),
            default: None,
        }
    }

    pub fn from_config(config: ResolverConfig) -> Self {
        Self {
            root: config.root,
            predicate: config.predicate,
            default: config.default,
        }
    }

    pub fn with_predicate(mut self, name: impl Into<String>) -> Self {
        self.predicate = name.into();
        self
    }

    pub fn with_default(mut self, kind: impl Into<KindId>) -> Self {
        self.default = Some(kind.into());
        self
    }

    pub fn root(&self) -> &KindId {
        &self.root
    }

    pub fn predicate(&self) -> &str {
        &self.predicate
    }

    pub fn default_kind(&self) -> Option<&KindId> {
        self.default.as_ref()
    }

    pub fn config(&self) -> ResolverConfig {
        ResolverConfig {
            root: self.root.clone(),
            predicate: self.predicate.clone(),
            default: self.default.clone(),
        }
    }

    /// Resolve `args` using the binding as configured.
    pub fn resolve<A, H>(&self, hierarchy: &H, args: &A) -> Result<KindId, ResolveError>
    where
        A: Debug + ?Sized,
        H: TypeHierarchy<A> + ?Sized,
    {
        self.resolve_with(hierarchy, args, &ResolveOptions::default())
    }

    /// Resolve `args`, letting `options` override the bound default and
    /// predicate for this call only.
    ///
    /// Every candidate's predicate is evaluated, in traversal order, before
    /// the outcome is decided. A default is returned as given: it does not
    /// have to be concrete, or even declared.
    pub fn resolve_with<A, H>(
        &self,
        hierarchy: &H,
        args: &A,
        options: &ResolveOptions,
    ) -> Result<KindId, ResolveError>
    where
        A: Debug + ?Sized,
        H: TypeHierarchy<A> + ?Sized,
    {
        if !hierarchy.contains(&self.root) {
            return Err(ResolveError::UnknownRoot(self.root.clone()));
        }

        let predicate = options.predicate.as_deref().unwrap_or(&self.predicate);
        let default = options.default.as_ref().or(self.default.as_ref());

        let candidates = concrete_kinds(hierarchy, &self.root);
        let candidate_count = candidates.len();

        let mut matches = Vec::new();
        for candidate in candidates {
            let capability = hierarchy.capability(&candidate, predicate).ok_or_else(|| {
                ResolveError::MissingCapability {
                    kind: candidate.clone(),
                    predicate: predicate.to_string(),
                }
            })?;
            if capability(args) {
                matches.push(candidate);
            }
        }

        trace!(
            root = %self.root,
            predicate,
            candidates = candidate_count,
            matches = matches.len(),
            "Resolved candidates"
        );

        match (matches.len(), default) {
            (0, Some(default)) => {
                debug!(root = %self.root, default = %default, "No candidate matched, using default");
                Ok(default.clone())
            }
            (0, None) => Err(ResolveError::NoMatch {
                root: self.root.clone(),
                args: format!("{args:?}"),
            }),
            (1, _) => Ok(matches.swap_remove(0)),
            _ => Err(ResolveError::AmbiguousMatch {
                root: self.root.clone(),
                args: format!("{args:?}"),
                matches,
            }),
        }
    }
}

impl From<ResolverConfig> for Resolver {
    fn from(config: ResolverConfig) -> Self {
        Self::from_config(config)
    }
}
