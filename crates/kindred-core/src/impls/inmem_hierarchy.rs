//! InMemoryHierarchy - 明示的な登録で構築する kind の木
//!
//! # 実装詳細
//! - HashMap<KindId, Node> で kind を管理
//! - 各 Node は parent と direct descendants（宣言順の Vec）を持つ
//! - capability predicate は名前ごとに Node に保持し、参照時は祖先へ辿る

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::{HierarchyError, KindId};
use crate::ports::{Capability, TypeHierarchy};

struct Node<A: ?Sized> {
    parent: Option<KindId>,
    /// Direct descendants in declaration order.
    children: Vec<KindId>,
    capabilities: HashMap<String, Capability<A>>,
}

impl<A: ?Sized> Node<A> {
    fn new(parent: Option<KindId>) -> Self {
        Self {
            parent,
            children: Vec::new(),
            capabilities: HashMap::new(),
        }
    }
}

/// Hierarchy of kinds built by explicit registration calls.
///
/// Kinds may be declared and removed at any time; readers always see the
/// current structure. Mutation needs `&mut self`, so it can never overlap
/// with a resolve running against `&self`.
///
/// # 使用例
/// ```ignore
/// let mut h = InMemoryHierarchy::<str>::new();
/// h.declare_root("shape")?;
/// h.declare("circle", "shape")?;
/// h.define("circle", "can_handle", |s: &str| s == "round")?;
/// ```
pub struct InMemoryHierarchy<A: ?Sized> {
    nodes: HashMap<KindId, Node<A>>,
}

impl<A: ?Sized> InMemoryHierarchy<A> {
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
        }
    }

    /// Declare a kind with no parent.
    pub fn declare_root(&mut self, kind: impl Into<KindId>) -> Result<(), HierarchyError> {
        let kind = kind.into();
        if self.nodes.contains_key(&kind) {
            return Err(HierarchyError::DuplicateKind(kind));
        }
        self.nodes.insert(kind, Node::new(None));
        Ok(())
    }

    /// Declare `kind` as a direct descendant of `parent`.
    ///
    /// The new kind is ordered after the parent's existing descendants.
    pub fn declare(
        &mut self,
        kind: impl Into<KindId>,
        parent: impl Into<KindId>,
    ) -> Result<(), HierarchyError> {
        let kind = kind.into();
        let parent = parent.into();
        if self.nodes.contains_key(&kind) {
            return Err(HierarchyError::DuplicateKind(kind));
        }
        let parent_node = self
            .nodes
            .get_mut(&parent)
            .ok_or_else(|| HierarchyError::UnknownParent(parent.clone()))?;
        parent_node.children.push(kind.clone());
        self.nodes.insert(kind, Node::new(Some(parent)));
        Ok(())
    }

    /// Attach the predicate `name` to `kind`, replacing any previous one.
    ///
    /// Descendants that do not define `name` themselves inherit it.
    pub fn define<F>(
        &mut self,
        kind: impl Into<KindId>,
        name: impl Into<String>,
        predicate: F,
    ) -> Result<(), HierarchyError>
    where
        F: Fn(&A) -> bool + Send + Sync + 'static,
    {
        let kind = kind.into();
        let node = self
            .nodes
            .get_mut(&kind)
            .ok_or(HierarchyError::UnknownKind(kind))?;
        node.capabilities.insert(name.into(), Arc::new(predicate));
        Ok(())
    }

    /// Remove a kind that has no direct descendants.
    ///
    /// If it was the last descendant of its parent, the parent becomes
    /// concrete.
    pub fn remove(&mut self, kind: &KindId) -> Result<(), HierarchyError> {
        let node = self
            .nodes
            .get(kind)
            .ok_or_else(|| HierarchyError::UnknownKind(kind.clone()))?;
        if !node.children.is_empty() {
            return Err(HierarchyError::HasDescendants {
                kind: kind.clone(),
                count: node.children.len(),
            });
        }
        if let Some(node) = self.nodes.remove(kind) {
            if let Some(parent) = node.parent.and_then(|p| self.nodes.get_mut(&p)) {
                parent.children.retain(|child| child != kind);
            }
        }
        Ok(())
    }

    pub fn parent(&self, kind: &KindId) -> Option<&KindId> {
        self.nodes.get(kind).and_then(|node| node.parent.as_ref())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<A: ?Sized> Default for InMemoryHierarchy<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: ?Sized> TypeHierarchy<A> for InMemoryHierarchy<A> {
    fn contains(&self, kind: &KindId) -> bool {
        self.nodes.contains_key(kind)
    }

    fn direct_descendants(&self, kind: &KindId) -> Vec<KindId> {
        self.nodes
            .get(kind)
            .map(|node| node.children.clone())
            .unwrap_or_default()
    }

    fn capability(&self, kind: &KindId, name: &str) -> Option<Capability<A>> {
        let mut current = self.nodes.get(kind);
        while let Some(node) = current {
            if let Some(capability) = node.capabilities.get(name) {
                return Some(Arc::clone(capability));
            }
            current = node.parent.as_ref().and_then(|p| self.nodes.get(p));
        }
        None
    }
}
