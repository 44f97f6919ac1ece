//! Typed - 型付き Strategy API
//!
//! kind 名と capability predicate を型に結び付け、
//! 登録時の typo や predicate の付け忘れを型で排除します。
//!
//! # 二層構造
//! - **表層（Typed）**: `Strategy` trait - `KIND` と `can_handle` を型レベルで定義
//! - **内部（Dyn）**: `InMemoryHierarchy` - KindId と `Capability` で管理

pub mod strategy;
pub mod registry;

pub use self::strategy::Strategy;
