//! Hierarchy walker: enumerates the concrete kinds below a kind.
//!
//! A kind is concrete when it has no direct descendants *right now*. The
//! walker never caches; every call reads the live hierarchy.

use crate::domain::KindId;
use crate::ports::TypeHierarchy;

/// True iff `kind` currently has no direct descendants.
pub fn is_concrete<A, H>(hierarchy: &H, kind: &KindId) -> bool
where
    A: ?Sized,
    H: TypeHierarchy<A> + ?Sized,
{
    hierarchy.direct_descendants(kind).is_empty()
}

/// Append every concrete kind below `kind` to `accumulator`.
///
/// Descendants are visited in the order the hierarchy reports them. A
/// concrete descendant is appended; any other descendant is recursed into
/// instead, so intermediate kinds never appear. `kind` itself is never
/// appended.
pub fn concrete_descendants<A, H>(
    hierarchy: &H,
    kind: &KindId,
    mut accumulator: Vec<KindId>,
) -> Vec<KindId>
where
    A: ?Sized,
    H: TypeHierarchy<A> + ?Sized,
{
    for descendant in hierarchy.direct_descendants(kind) {
        if is_concrete(hierarchy, &descendant) {
            accumulator.push(descendant);
        } else {
            accumulator = concrete_descendants(hierarchy, &descendant, accumulator);
        }
    }
    accumulator
}

/// [`concrete_descendants`] starting from an empty accumulator.
pub fn concrete_kinds<A, H>(hierarchy: &H, kind: &KindId) -> Vec<KindId>
where
    A: ?Sized,
    H: TypeHierarchy<A> + ?Sized,
{
    concrete_descendants(hierarchy, kind, Vec::new())
}
