//! Ports - 抽象化レイヤー
//!
//! resolver は hierarchy の実装を知りません。
//! `TypeHierarchy` を通して構造（direct descendants）と capability predicate を読むだけです。

pub mod hierarchy;

pub use self::hierarchy::{Capability, TypeHierarchy};
