//! Arena-backed scene graph.
//!
//! Every widget lives in one flat arena and is addressed by a [`WidgetId`].
//! Parent → children links are id lists, so a widget has at most one parent
//! and the tree cannot alias a node under two parents.
//!
//! - **Generational ids**: a freed slot bumps its generation, so an id that
//!   outlived its widget is reported as [`TreeError::StaleId`] instead of
//!   silently addressing whatever reused the slot.
//! - **Ordered children**: a parent's child list is its paint order,
//!   back-to-front.
//! - **Ownership**: erasing a child destroys its whole subtree. To keep a
//!   subtree alive outside the tree, [`WidgetTree::detach`] it and re-attach
//!   it later with [`WidgetTree::insert`] / [`WidgetTree::push_back`].

use std::ops::Range;

use hawtk_engine::coords::{Rect, Vec2f};

use crate::error::TreeError;
use crate::widget::{UpdateCtx, Widget};

/// Stable handle to a widget in a [`WidgetTree`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct WidgetId {
    index: u32,
    generation: u32,
}

/// A widget plus its scene-graph metadata.
pub(crate) struct Node {
    pub(crate) widget: Box<dyn Widget>,
    pub(crate) parent: Option<WidgetId>,
    pub(crate) children: Vec<WidgetId>,
    /// Extent of the widget.
    pub(crate) bounds: Vec2f,
    /// Position relative to the parent's origin.
    pub(crate) offset: Vec2f,
    /// Absolute origin as of the last update.
    pub(crate) origin: Vec2f,
    pub(crate) dirty: bool,
}

impl Node {
    fn new(widget: Box<dyn Widget>, bounds: Vec2f) -> Self {
        Self {
            widget,
            parent: None,
            children: Vec::new(),
            bounds,
            offset: Vec2f::ZERO,
            origin: Vec2f::ZERO,
            // Every widget is drawn at least once before it counts as clean.
            dirty: true,
        }
    }
}

struct Slot {
    generation: u32,
    node: Option<Node>,
}

/// Arena of widgets rooted at a single, permanent root node.
pub struct WidgetTree {
    slots: Vec<Slot>,
    free: Vec<u32>,
    root: WidgetId,
    live: usize,
}

impl WidgetTree {
    pub fn new(root: impl Widget, bounds: Vec2f) -> Self {
        Self::with_boxed_root(Box::new(root), bounds)
    }

    pub(crate) fn with_boxed_root(root: Box<dyn Widget>, bounds: Vec2f) -> Self {
        Self {
            slots: vec![Slot { generation: 0, node: Some(Node::new(root, bounds)) }],
            free: Vec::new(),
            root: WidgetId { index: 0, generation: 0 },
            live: 1,
        }
    }

    #[inline]
    pub fn root(&self) -> WidgetId {
        self.root
    }

    /// Live widgets, including detached subtrees.
    #[inline]
    pub fn widget_count(&self) -> usize {
        self.live
    }

    #[inline]
    pub fn contains(&self, id: WidgetId) -> bool {
        self.node(id).is_ok()
    }

    // ── arena internals ───────────────────────────────────────────────────

    pub(crate) fn node(&self, id: WidgetId) -> Result<&Node, TreeError> {
        self.slots
            .get(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_ref())
            .ok_or(TreeError::StaleId(id))
    }

    fn node_mut(&mut self, id: WidgetId) -> Result<&mut Node, TreeError> {
        self.slots
            .get_mut(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_mut())
            .ok_or(TreeError::StaleId(id))
    }

    fn alloc(&mut self, node: Node) -> WidgetId {
        self.live += 1;
        match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index as usize];
                slot.node = Some(node);
                WidgetId { index, generation: slot.generation }
            }
            None => {
                let index = self.slots.len() as u32;
                self.slots.push(Slot { generation: 0, node: Some(node) });
                WidgetId { index, generation: 0 }
            }
        }
    }

    /// Frees `id` and all of its descendants. The caller has already removed
    /// `id` from its parent's child list.
    fn destroy(&mut self, id: WidgetId) -> usize {
        let mut destroyed = 0;
        let mut pending = vec![id];
        while let Some(id) = pending.pop() {
            let Some(slot) = self.slots.get_mut(id.index as usize) else {
                continue;
            };
            if slot.generation != id.generation {
                continue;
            }
            let Some(node) = slot.node.take() else {
                continue;
            };
            slot.generation = slot.generation.wrapping_add(1);
            self.free.push(id.index);
            self.live -= 1;
            destroyed += 1;
            pending.extend(node.children);
        }
        destroyed
    }

    /// Removes `id` from its parent's child list, leaving it parentless.
    fn unlink(&mut self, id: WidgetId) -> Result<(), TreeError> {
        let parent = self.node(id)?.parent;
        if let Some(p) = parent.and_then(|parent| self.node_mut(parent).ok()) {
            p.children.retain(|&c| c != id);
            p.dirty = true;
        }
        self.node_mut(id)?.parent = None;
        Ok(())
    }

    // ── widget access ─────────────────────────────────────────────────────

    pub fn get(&self, id: WidgetId) -> Option<&dyn Widget> {
        self.node(id).ok().map(|n| &*n.widget)
    }

    /// Mutable access to a widget. Marks it dirty.
    pub fn get_mut(&mut self, id: WidgetId) -> Option<&mut dyn Widget> {
        let node = self.node_mut(id).ok()?;
        node.dirty = true;
        Some(&mut *node.widget)
    }

    pub fn downcast_ref<W: Widget>(&self, id: WidgetId) -> Option<&W> {
        self.get(id)?.as_any().downcast_ref()
    }

    /// Typed mutable access. Marks the widget dirty when the type matches.
    pub fn downcast_mut<W: Widget>(&mut self, id: WidgetId) -> Option<&mut W> {
        let node = self.node_mut(id).ok()?;
        let widget: &mut dyn Widget = &mut *node.widget;
        let widget = widget.as_any_mut().downcast_mut::<W>()?;
        node.dirty = true;
        Some(widget)
    }

    // ── node metadata ─────────────────────────────────────────────────────

    pub fn parent(&self, id: WidgetId) -> Option<WidgetId> {
        self.node(id).ok().and_then(|n| n.parent)
    }

    /// `true` if `ancestor` is a strict ancestor of `id`.
    pub fn is_ancestor(&self, ancestor: WidgetId, id: WidgetId) -> bool {
        let mut current = self.parent(id);
        while let Some(p) = current {
            if p == ancestor {
                return true;
            }
            current = self.parent(p);
        }
        false
    }

    pub fn bounds(&self, id: WidgetId) -> Result<Vec2f, TreeError> {
        Ok(self.node(id)?.bounds)
    }

    pub fn set_bounds(&mut self, id: WidgetId, bounds: Vec2f) -> Result<(), TreeError> {
        let node = self.node_mut(id)?;
        if node.bounds != bounds {
            node.bounds = bounds;
            node.dirty = true;
        }
        Ok(())
    }

    /// Position relative to the parent's origin.
    pub fn offset(&self, id: WidgetId) -> Result<Vec2f, TreeError> {
        Ok(self.node(id)?.offset)
    }

    pub fn set_offset(&mut self, id: WidgetId, offset: Vec2f) -> Result<(), TreeError> {
        let node = self.node_mut(id)?;
        if node.offset != offset {
            node.offset = offset;
            node.dirty = true;
        }
        Ok(())
    }

    /// Absolute origin computed by the last [`Context::update`](crate::Context::update).
    pub fn origin(&self, id: WidgetId) -> Result<Vec2f, TreeError> {
        Ok(self.node(id)?.origin)
    }

    /// Absolute rect (`origin` + `bounds`) as of the last update.
    pub fn rect(&self, id: WidgetId) -> Result<Rect, TreeError> {
        let node = self.node(id)?;
        Ok(Rect::from_origin_size(node.origin, node.bounds))
    }

    pub fn is_dirty(&self, id: WidgetId) -> Result<bool, TreeError> {
        Ok(self.node(id)?.dirty)
    }

    pub fn mark_dirty(&mut self, id: WidgetId) -> Result<(), TreeError> {
        self.node_mut(id)?.dirty = true;
        Ok(())
    }

    // ── child sequence: read ──────────────────────────────────────────────

    pub fn child_count(&self, parent: WidgetId) -> Result<usize, TreeError> {
        Ok(self.node(parent)?.children.len())
    }

    /// Children of `parent` in paint order.
    pub fn children(&self, parent: WidgetId) -> Result<&[WidgetId], TreeError> {
        Ok(&self.node(parent)?.children)
    }

    pub fn iter_children(
        &self,
        parent: WidgetId,
    ) -> Result<impl Iterator<Item = (WidgetId, &dyn Widget)> + '_, TreeError> {
        let children = &self.node(parent)?.children;
        Ok(children.iter().filter_map(move |&id| self.get(id).map(|w| (id, w))))
    }

    /// Calls `f` on every child of `parent` in paint order. Each visited
    /// child is marked dirty, as with [`get_mut`](Self::get_mut).
    pub fn for_each_child_mut(
        &mut self,
        parent: WidgetId,
        mut f: impl FnMut(WidgetId, &mut dyn Widget),
    ) -> Result<(), TreeError> {
        let children = self.node(parent)?.children.clone();
        for id in children {
            if let Some(widget) = self.get_mut(id) {
                f(id, widget);
            }
        }
        Ok(())
    }

    /// Checked positional access.
    pub fn child_at(&self, parent: WidgetId, pos: usize) -> Result<WidgetId, TreeError> {
        let children = &self.node(parent)?.children;
        children
            .get(pos)
            .copied()
            .ok_or(TreeError::OutOfRange { index: pos, len: children.len() })
    }

    /// Unchecked positional access.
    ///
    /// # Panics
    /// Panics if `parent` is stale or `pos >= child_count(parent)`.
    pub fn child(&self, parent: WidgetId, pos: usize) -> WidgetId {
        match self.node(parent) {
            Ok(node) => node.children[pos],
            Err(err) => panic!("{err}"),
        }
    }

    /// First (back-most) child; `None` when there are no children.
    pub fn front(&self, parent: WidgetId) -> Option<WidgetId> {
        self.node(parent).ok()?.children.first().copied()
    }

    /// Last (top-most) child; `None` when there are no children.
    pub fn back(&self, parent: WidgetId) -> Option<WidgetId> {
        self.node(parent).ok()?.children.last().copied()
    }

    /// Pre-order (parent before children, children in order) walk from `from`.
    pub fn depth_first(&self, from: WidgetId) -> Vec<WidgetId> {
        let mut order = Vec::new();
        let mut pending = vec![from];
        while let Some(id) = pending.pop() {
            let Ok(node) = self.node(id) else {
                continue;
            };
            order.push(id);
            pending.extend(node.children.iter().rev());
        }
        order
    }

    // ── child sequence: build ─────────────────────────────────────────────

    /// Constructs `widget` as the last child of `parent`.
    pub fn emplace<W: Widget>(
        &mut self,
        parent: WidgetId,
        widget: W,
        bounds: Vec2f,
    ) -> Result<WidgetId, TreeError> {
        let pos = self.child_count(parent)?;
        self.emplace_at(parent, pos, widget, bounds)
    }

    /// Constructs `widget` at `pos` in `parent`'s child list (`pos <= len`).
    pub fn emplace_at<W: Widget>(
        &mut self,
        parent: WidgetId,
        pos: usize,
        widget: W,
        bounds: Vec2f,
    ) -> Result<WidgetId, TreeError> {
        let len = self.child_count(parent)?;
        if pos > len {
            return Err(TreeError::OutOfRange { index: pos, len });
        }

        let mut node = Node::new(Box::new(widget), bounds);
        node.parent = Some(parent);
        let id = self.alloc(node);

        let p = self.node_mut(parent)?;
        p.children.insert(pos, id);
        p.dirty = true;
        log::debug!("emplaced {id:?} under {parent:?} at {pos}");
        Ok(id)
    }

    /// Constructs a widget with no parent, to be attached later.
    pub fn create_detached<W: Widget>(&mut self, widget: W, bounds: Vec2f) -> WidgetId {
        self.alloc(Node::new(Box::new(widget), bounds))
    }

    /// Attaches the detached widget `child` at `pos` in `parent`'s child list.
    pub fn insert(
        &mut self,
        parent: WidgetId,
        pos: usize,
        child: WidgetId,
    ) -> Result<(), TreeError> {
        if child == self.root {
            return Err(TreeError::RootImmutable);
        }
        if self.node(child)?.parent.is_some() {
            return Err(TreeError::AlreadyAttached(child));
        }
        let len = self.child_count(parent)?;
        if child == parent || self.is_ancestor(child, parent) {
            return Err(TreeError::WouldCycle { parent, child });
        }
        if pos > len {
            return Err(TreeError::OutOfRange { index: pos, len });
        }

        let c = self.node_mut(child)?;
        c.parent = Some(parent);
        c.dirty = true;

        let p = self.node_mut(parent)?;
        p.children.insert(pos, child);
        p.dirty = true;
        log::debug!("attached {child:?} under {parent:?} at {pos}");
        Ok(())
    }

    /// Attaches the detached widget `child` as the last child of `parent`.
    pub fn push_back(&mut self, parent: WidgetId, child: WidgetId) -> Result<(), TreeError> {
        let pos = self.child_count(parent)?;
        self.insert(parent, pos, child)
    }

    // ── child sequence: remove ────────────────────────────────────────────

    /// Destroys the child at `pos` and its subtree.
    pub fn erase(&mut self, parent: WidgetId, pos: usize) -> Result<(), TreeError> {
        let p = self.node_mut(parent)?;
        let len = p.children.len();
        if pos >= len {
            return Err(TreeError::OutOfRange { index: pos, len });
        }
        let child = p.children.remove(pos);
        p.dirty = true;

        let destroyed = self.destroy(child);
        log::debug!("erased {child:?} from {parent:?} ({destroyed} widgets destroyed)");
        Ok(())
    }

    /// Destroys the children in `range` and their subtrees. Returns how many
    /// direct children were erased.
    pub fn erase_range(
        &mut self,
        parent: WidgetId,
        range: Range<usize>,
    ) -> Result<usize, TreeError> {
        let Range { start, end } = range;
        let p = self.node_mut(parent)?;
        let len = p.children.len();
        if start > end || end > len {
            return Err(TreeError::InvalidRange { start, end, len });
        }

        let erased: Vec<WidgetId> = p.children.drain(start..end).collect();
        if !erased.is_empty() {
            p.dirty = true;
        }
        let destroyed: usize = erased.iter().map(|&id| self.destroy(id)).sum();
        log::debug!(
            "erased {} children of {parent:?} ({destroyed} widgets destroyed)",
            erased.len()
        );
        Ok(erased.len())
    }

    /// Destroys every child of `parent`. Returns how many were erased.
    pub fn clear(&mut self, parent: WidgetId) -> Result<usize, TreeError> {
        let len = self.child_count(parent)?;
        self.erase_range(parent, 0..len)
    }

    /// Destroys `id` and its subtree, wherever it is.
    pub fn remove(&mut self, id: WidgetId) -> Result<(), TreeError> {
        if id == self.root {
            return Err(TreeError::RootImmutable);
        }
        self.unlink(id)?;
        let destroyed = self.destroy(id);
        log::debug!("removed {id:?} ({destroyed} widgets destroyed)");
        Ok(())
    }

    /// Unlinks `id` from its parent without destroying it. The subtree stays
    /// alive (and is neither updated nor drawn) until re-attached or removed.
    pub fn detach(&mut self, id: WidgetId) -> Result<(), TreeError> {
        if id == self.root {
            return Err(TreeError::RootImmutable);
        }
        self.unlink(id)?;
        log::debug!("detached {id:?}");
        Ok(())
    }

    // ── update pass ───────────────────────────────────────────────────────

    /// Recomputes absolute origins, runs every attached widget's
    /// [`Widget::update`] and clears dirty flags. Returns how many widgets
    /// went from dirty to clean.
    pub(crate) fn update(&mut self) -> usize {
        let mut cleaned = 0;
        let mut pending = vec![(self.root, Vec2f::ZERO)];
        while let Some((id, parent_origin)) = pending.pop() {
            let Ok(node) = self.node_mut(id) else {
                continue;
            };
            node.origin = parent_origin + node.offset;

            let mut cx = UpdateCtx::new(id, Rect::from_origin_size(node.origin, node.bounds));
            node.widget.update(&mut cx);

            let was_dirty = node.dirty;
            node.dirty = cx.is_invalidated();
            if was_dirty && !node.dirty {
                cleaned += 1;
            }

            let origin = node.origin;
            pending.extend(node.children.iter().rev().map(|&child| (child, origin)));
        }
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WidgetError;
    use crate::widget::DrawCtx;

    struct Leaf(u32);

    impl Widget for Leaf {
        fn draw(&self, _cx: &mut DrawCtx<'_>) -> Result<(), WidgetError> {
            Ok(())
        }
    }

    fn v(x: f32, y: f32) -> Vec2f {
        Vec2f::new([x, y])
    }

    fn tree() -> WidgetTree {
        WidgetTree::new(Leaf(0), v(100.0, 100.0))
    }

    fn tag(tree: &WidgetTree, id: WidgetId) -> u32 {
        tree.downcast_ref::<Leaf>(id).map(|l| l.0).unwrap()
    }

    // ── building ──────────────────────────────────────────────────────────

    #[test]
    fn emplace_appends_in_order() {
        let mut t = tree();
        let root = t.root();
        let a = t.emplace(root, Leaf(1), v(10.0, 10.0)).unwrap();
        let b = t.emplace(root, Leaf(2), v(10.0, 10.0)).unwrap();
        let c = t.emplace_at(root, 0, Leaf(3), v(10.0, 10.0)).unwrap();

        assert_eq!(t.children(root).unwrap(), &[c, a, b]);
        assert_eq!(t.front(root), Some(c));
        assert_eq!(t.back(root), Some(b));
        assert_eq!(t.parent(a), Some(root));
        assert_eq!(t.widget_count(), 4);
        assert_eq!(tag(&t, t.child(root, 1)), 1);
    }

    #[test]
    fn emplace_at_past_end_is_rejected() {
        let mut t = tree();
        let root = t.root();
        assert_eq!(
            t.emplace_at(root, 1, Leaf(1), v(1.0, 1.0)),
            Err(TreeError::OutOfRange { index: 1, len: 0 })
        );
        assert_eq!(t.widget_count(), 1);
    }

    #[test]
    fn iter_children_yields_widgets_in_order() {
        let mut t = tree();
        let root = t.root();
        for i in 1..=3 {
            t.emplace(root, Leaf(i), v(1.0, 1.0)).unwrap();
        }
        let tags: Vec<u32> = t
            .iter_children(root)
            .unwrap()
            .map(|(_, w)| w.as_any().downcast_ref::<Leaf>().unwrap().0)
            .collect();
        assert_eq!(tags, [1, 2, 3]);
    }

    #[test]
    fn for_each_child_mut_edits_and_marks_dirty() {
        let mut t = tree();
        let root = t.root();
        let a = t.emplace(root, Leaf(1), v(1.0, 1.0)).unwrap();
        let b = t.emplace(root, Leaf(2), v(1.0, 1.0)).unwrap();
        let grandchild = t.emplace(a, Leaf(3), v(1.0, 1.0)).unwrap();
        t.update();

        t.for_each_child_mut(root, |_, w| {
            if let Some(leaf) = w.as_any_mut().downcast_mut::<Leaf>() {
                leaf.0 *= 10;
            }
        })
        .unwrap();

        assert_eq!((tag(&t, a), tag(&t, b)), (10, 20));
        assert_eq!(t.is_dirty(a), Ok(true));
        assert_eq!(t.is_dirty(b), Ok(true));
        assert_eq!(t.is_dirty(grandchild), Ok(false));
        assert_eq!(t.is_dirty(root), Ok(false));
    }

    // ── access on empty / out of range ────────────────────────────────────

    #[test]
    fn checked_access_reports_out_of_range() {
        let t = tree();
        assert_eq!(t.child_at(t.root(), 0), Err(TreeError::OutOfRange { index: 0, len: 0 }));
        assert_eq!(t.front(t.root()), None);
        assert_eq!(t.back(t.root()), None);
    }

    #[test]
    #[should_panic]
    fn unchecked_access_panics() {
        let t = tree();
        let _ = t.child(t.root(), 0);
    }

    // ── removal ───────────────────────────────────────────────────────────

    #[test]
    fn erase_destroys_subtree_and_stales_ids() {
        let mut t = tree();
        let root = t.root();
        let a = t.emplace(root, Leaf(1), v(10.0, 10.0)).unwrap();
        let a1 = t.emplace(a, Leaf(2), v(5.0, 5.0)).unwrap();
        t.erase(root, 0).unwrap();

        assert!(!t.contains(a));
        assert!(!t.contains(a1));
        assert_eq!(t.bounds(a1), Err(TreeError::StaleId(a1)));
        assert_eq!(t.widget_count(), 1);

        // Slot reuse must not resurrect the old id.
        let b = t.emplace(root, Leaf(3), v(1.0, 1.0)).unwrap();
        assert_ne!(a, b);
        assert!(!t.contains(a) && !t.contains(a1));
        assert_eq!(tag(&t, b), 3);
    }

    #[test]
    fn erase_range_removes_contiguous_children() {
        let mut t = tree();
        let root = t.root();
        let ids: Vec<_> = (0..5).map(|i| t.emplace(root, Leaf(i), v(1.0, 1.0)).unwrap()).collect();
        t.emplace(ids[2], Leaf(20), v(1.0, 1.0)).unwrap();

        assert_eq!(t.erase_range(root, 1..4), Ok(3));
        assert_eq!(t.children(root).unwrap(), &[ids[0], ids[4]]);
        assert_eq!(t.widget_count(), 3);
        assert_eq!(
            t.erase_range(root, 1..3),
            Err(TreeError::InvalidRange { start: 1, end: 3, len: 2 })
        );
    }

    #[test]
    fn clear_empties_child_list() {
        let mut t = tree();
        let root = t.root();
        t.emplace(root, Leaf(1), v(1.0, 1.0)).unwrap();
        t.emplace(root, Leaf(2), v(1.0, 1.0)).unwrap();
        assert_eq!(t.clear(root), Ok(2));
        assert_eq!(t.child_count(root), Ok(0));
        assert_eq!(t.widget_count(), 1);
    }

    #[test]
    fn root_cannot_be_removed_or_detached() {
        let mut t = tree();
        let root = t.root();
        assert_eq!(t.remove(root), Err(TreeError::RootImmutable));
        assert_eq!(t.detach(root), Err(TreeError::RootImmutable));
    }

    // ── detach / re-attach ────────────────────────────────────────────────

    #[test]
    fn detached_subtree_survives_and_reattaches() {
        let mut t = tree();
        let root = t.root();
        let a = t.emplace(root, Leaf(1), v(10.0, 10.0)).unwrap();
        let b = t.emplace(root, Leaf(2), v(10.0, 10.0)).unwrap();
        let a1 = t.emplace(a, Leaf(3), v(1.0, 1.0)).unwrap();

        t.detach(a).unwrap();
        assert_eq!(t.children(root).unwrap(), &[b]);
        assert_eq!(t.parent(a), None);
        assert!(t.contains(a1));

        assert_eq!(t.push_back(b, a1), Err(TreeError::AlreadyAttached(a1)));
        t.push_back(b, a).unwrap();
        assert_eq!(t.parent(a), Some(b));
        assert_eq!(t.depth_first(root), vec![root, b, a, a1]);
    }

    #[test]
    fn attaching_under_a_descendant_is_rejected() {
        let mut t = tree();
        let root = t.root();
        let a = t.emplace(root, Leaf(1), v(1.0, 1.0)).unwrap();
        let a1 = t.emplace(a, Leaf(2), v(1.0, 1.0)).unwrap();
        t.detach(a).unwrap();

        assert_eq!(t.insert(a1, 0, a), Err(TreeError::WouldCycle { parent: a1, child: a }));
        assert_eq!(t.insert(a, 0, a), Err(TreeError::WouldCycle { parent: a, child: a }));
        assert_eq!(t.insert(a, 0, root), Err(TreeError::RootImmutable));
    }

    #[test]
    fn create_detached_then_insert() {
        let mut t = tree();
        let root = t.root();
        let first = t.emplace(root, Leaf(1), v(1.0, 1.0)).unwrap();
        let loose = t.create_detached(Leaf(9), v(2.0, 2.0));
        t.insert(root, 0, loose).unwrap();
        assert_eq!(t.children(root).unwrap(), &[loose, first]);
    }

    // ── dirty tracking ────────────────────────────────────────────────────

    #[test]
    fn new_widgets_start_dirty_and_update_cleans() {
        let mut t = tree();
        let root = t.root();
        let a = t.emplace(root, Leaf(1), v(10.0, 10.0)).unwrap();
        assert_eq!(t.is_dirty(a), Ok(true));

        assert_eq!(t.update(), 2);
        assert_eq!(t.is_dirty(a), Ok(false));
        assert_eq!(t.is_dirty(root), Ok(false));
        assert_eq!(t.update(), 0);
    }

    #[test]
    fn mutation_marks_dirty() {
        let mut t = tree();
        let root = t.root();
        let a = t.emplace(root, Leaf(1), v(10.0, 10.0)).unwrap();
        t.update();

        t.set_bounds(a, v(10.0, 10.0)).unwrap();
        assert_eq!(t.is_dirty(a), Ok(false), "unchanged bounds keep the widget clean");

        t.set_offset(a, v(3.0, 4.0)).unwrap();
        assert_eq!(t.is_dirty(a), Ok(true));
        t.update();

        t.downcast_mut::<Leaf>(a).unwrap().0 = 7;
        assert_eq!(t.is_dirty(a), Ok(true));
        assert!(t.downcast_mut::<Leaf>(a).is_some());
    }

    #[test]
    fn update_accumulates_offsets_into_origins() {
        let mut t = tree();
        let root = t.root();
        let a = t.emplace(root, Leaf(1), v(50.0, 50.0)).unwrap();
        let a1 = t.emplace(a, Leaf(2), v(5.0, 5.0)).unwrap();
        t.set_offset(a, v(10.0, 20.0)).unwrap();
        t.set_offset(a1, v(1.0, 2.0)).unwrap();
        t.update();

        assert_eq!(t.origin(a1), Ok(v(11.0, 22.0)));
        assert_eq!(t.rect(a), Ok(Rect::new(10.0, 20.0, 50.0, 50.0)));
    }
}
