//! Impls - ports の実装
//!
//! # 含まれる実装
//! - **InMemoryHierarchy**: 明示的な登録で構築する hierarchy

pub mod inmem_hierarchy;

pub use self::inmem_hierarchy::InMemoryHierarchy;
