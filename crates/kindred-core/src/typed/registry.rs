//! 型付き登録 - Strategy を InMemoryHierarchy に登録する
//!
//! # 学習ポイント
//! - Generic methods での登録と型安全性
//! - 関数アイテム（`T::can_handle`）をそのまま predicate として渡す

use super::strategy::Strategy;
use crate::app::DEFAULT_PREDICATE;
use crate::domain::{HierarchyError, KindId};
use crate::impls::InMemoryHierarchy;

impl<A: ?Sized> InMemoryHierarchy<A> {
    /// Declare `T::KIND` under `parent` and attach `T::can_handle` as its
    /// default predicate.
    ///
    /// # Example
    /// ```ignore
    /// hierarchy.register::<Circle>("shape")?;
    /// ```
    pub fn register<T>(&mut self, parent: impl Into<KindId>) -> Result<(), HierarchyError>
    where
        T: Strategy<Args = A>,
    {
        let kind = KindId::of::<T>();
        self.declare(kind.clone(), parent)?;
        self.define(kind, DEFAULT_PREDICATE, T::can_handle)
    }

    /// Remove a registered strategy.
    pub fn unregister<T>(&mut self) -> Result<(), HierarchyError>
    where
        T: Strategy<Args = A>,
    {
        self.remove(&KindId::of::<T>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{Resolver, concrete_kinds};
    use crate::domain::ResolveError;
    use crate::typed::strategy::fixtures::{
        AnyPolygon, Circle, POLYGON, SHAPE, Square, Triangle,
    };

    fn shapes() -> InMemoryHierarchy<str> {
        let mut h = InMemoryHierarchy::new();
        h.declare_root(SHAPE).unwrap();
        h.register::<Circle>(SHAPE).unwrap();
        h.declare(POLYGON, SHAPE).unwrap();
        h.register::<Square>(POLYGON).unwrap();
        h.register::<Triangle>(POLYGON).unwrap();
        h
    }

    #[test]
    fn test_register_declares_leaves() {
        let h = shapes();
        let leaves = concrete_kinds(&h, &KindId::new(SHAPE));
        assert_eq!(
            leaves,
            vec![
                KindId::of::<Circle>(),
                KindId::of::<Square>(),
                KindId::of::<Triangle>(),
            ]
        );
    }

    #[test]
    fn test_double_registration() {
        let mut h = shapes();
        let result = h.register::<Circle>(POLYGON);
        assert!(matches!(result, Err(HierarchyError::DuplicateKind(_))));
    }

    #[test]
    fn test_register_under_unknown_parent() {
        let mut h = InMemoryHierarchy::<str>::new();
        let result = h.register::<Circle>(SHAPE);
        assert!(matches!(result, Err(HierarchyError::UnknownParent(_))));
        assert!(h.is_empty());
    }

    #[test]
    fn test_resolve_typed_strategies() {
        let h = shapes();
        let resolver = Resolver::bind(SHAPE);

        assert!(resolver.resolve(&h, "round").unwrap().is::<Circle>());
        assert!(resolver.resolve(&h, "4-sided").unwrap().is::<Square>());
        assert!(resolver.resolve(&h, "3-sided").unwrap().is::<Triangle>());
        assert_eq!(
            resolver
                .with_default(POLYGON)
                .resolve(&h, "5-sided")
                .unwrap(),
            KindId::new(POLYGON)
        );
    }

    #[test]
    fn test_clashing_strategies_are_ambiguous() {
        let mut h = shapes();
        h.register::<AnyPolygon>(POLYGON).unwrap();

        let err = Resolver::bind(SHAPE).resolve(&h, "3-sided").unwrap_err();
        assert!(matches!(
            err,
            ResolveError::AmbiguousMatch { ref matches, .. }
                if *matches == vec![KindId::of::<Triangle>(), KindId::of::<AnyPolygon>()]
        ));

        h.unregister::<AnyPolygon>().unwrap();
        assert!(
            Resolver::bind(SHAPE)
                .resolve(&h, "3-sided")
                .unwrap()
                .is::<Triangle>()
        );
    }
}
