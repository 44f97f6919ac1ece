//! TypeHierarchy port - kind の木構造と capability predicate の読み取り
//!
//! # 設計原則
//! - 読み取り専用（resolver は hierarchy を変更しない）
//! - キャッシュしない（呼び出しごとに現在の構造を読む）

use std::sync::Arc;

use crate::domain::KindId;

/// A named capability predicate: decides whether a kind can handle `A`.
///
/// Predicates are expected to be pure. They are shared, so they must be
/// `Send + Sync`.
pub type Capability<A> = Arc<dyn Fn(&A) -> bool + Send + Sync>;

/// Read access to an open-ended hierarchy of kinds.
///
/// `A` is the argument type every capability predicate receives.
pub trait TypeHierarchy<A: ?Sized> {
    fn contains(&self, kind: &KindId) -> bool;

    /// Direct descendants of `kind`, in declaration order.
    ///
    /// An undeclared kind has no descendants.
    fn direct_descendants(&self, kind: &KindId) -> Vec<KindId>;

    /// The predicate called `name` on `kind`, or inherited from its nearest
    /// ancestor that defines it.
    fn capability(&self, kind: &KindId, name: &str) -> Option<Capability<A>>;
}
