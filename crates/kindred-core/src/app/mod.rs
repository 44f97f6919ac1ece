//! App - アプリケーション層
//!
//! ports を組み合わせて strategy selection を実装します。
//!
//! # 主要コンポーネント
//! - **walker**: concrete kind の列挙（is_concrete, concrete_descendants）
//! - **Resolver**: predicate による絞り込みと default / error の判定
//! - **ResolverConfig**: binding の設定（JSON から読み込み可能）

pub mod walker;
pub mod resolver;
pub mod config;

pub use self::config::ResolverConfig;
pub use self::resolver::{DEFAULT_PREDICATE, ResolveOptions, Resolver};
pub use self::walker::{concrete_descendants, concrete_kinds, is_concrete};
