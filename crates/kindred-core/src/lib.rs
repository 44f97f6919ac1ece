//! kindred-core
//!
//! Deterministic strategy selection over a hierarchy of kinds.
//!
//! Given a root kind, the resolver walks every concrete (leaf) kind below it,
//! asks each one's capability predicate whether it can handle the arguments,
//! and returns exactly one kind, a caller supplied default, or an error.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（KindId, errors）
//! - **ports**: 抽象化レイヤー（TypeHierarchy, Capability）
//! - **impls**: 実装（InMemoryHierarchy）
//! - **app**: アプリケーションロジック（walker, resolver, config）
//! - **typed**: 型付き Strategy API（Strategy trait, register）

pub mod domain;
pub mod ports;
pub mod impls;
pub mod app;
pub mod typed;

pub use self::app::{
    DEFAULT_PREDICATE, ResolveOptions, Resolver, ResolverConfig, concrete_descendants,
    concrete_kinds, is_concrete,
};
pub use self::domain::{ConfigError, HierarchyError, KindId, ResolveError};
pub use self::impls::InMemoryHierarchy;
pub use self::ports::{Capability, TypeHierarchy};
pub use self::typed::Strategy;
