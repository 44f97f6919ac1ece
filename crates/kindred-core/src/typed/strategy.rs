//! Strategy trait - 型レベルの capability predicate
//!
//! # 学習ポイント
//! - Associated Constants (`const KIND`)
//! - Associated Types (`type Args`)
//! - receiver を持たない関数（インスタンスを作らずに型に問い合わせる）

/// A concrete strategy that can be registered as a leaf kind.
///
/// # 使用例
/// ```ignore
/// struct Circle;
///
/// impl Strategy for Circle {
///     type Args = str;
///     const KIND: &'static str = "shape.circle";
///
///     fn can_handle(shape: &str) -> bool {
///         shape == "round"
///     }
/// }
/// ```
///
/// `can_handle` takes no `self`: the resolver asks the type, never an
/// instance. Instantiating the resolved kind is left to the caller.
pub trait Strategy: 'static {
    /// Argument type shared by every strategy under the same root.
    type Args: ?Sized;

    /// Kind name, unique within a hierarchy.
    ///
    /// # 命名規約
    /// - `{family}.{variant}`
    /// - 例: `shape.circle`
    const KIND: &'static str;

    fn can_handle(args: &Self::Args) -> bool;
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::Strategy;

    pub const SHAPE: &str = "shape";
    pub const POLYGON: &str = "shape.polygon";

    pub struct Circle;

    impl Strategy for Circle {
        type Args = str;
        const KIND: &'static str = "shape.circle";

        fn can_handle(shape: &str) -> bool {
            shape == "round"
        }
    }

    pub struct Square;

    impl Strategy for Square {
        type Args = str;
        const KIND: &'static str = "shape.square";

        fn can_handle(shape: &str) -> bool {
            shape == "4-sided"
        }
    }

    pub struct Triangle;

    impl Strategy for Triangle {
        type Args = str;
        const KIND: &'static str = "shape.triangle";

        fn can_handle(shape: &str) -> bool {
            shape == "3-sided"
        }
    }

    /// Claims every polygon, clashing with `Square` and `Triangle`.
    pub struct AnyPolygon;

    impl Strategy for AnyPolygon {
        type Args = str;
        const KIND: &'static str = "shape.any_polygon";

        fn can_handle(shape: &str) -> bool {
            shape.ends_with("-sided")
        }
    }
}
