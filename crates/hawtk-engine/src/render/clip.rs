use crate::coords::Rect;

/// Stack of nested scissor regions.
///
/// The top is always the effective clip, already intersected with every
/// parent, so nested widgets can never draw outside an ancestor.
#[derive(Debug, Default, Clone)]
pub struct ClipStack {
    stack: Vec<Rect>,
}

impl ClipStack {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes `rect` intersected with the current clip and returns the result.
    ///
    /// A rect that does not overlap its parent becomes [`Rect::EMPTY`], so the
    /// backend discards everything drawn under it.
    pub fn push(&mut self, rect: Rect) -> Rect {
        let effective = match self.stack.last() {
            None => rect.normalized(),
            Some(&parent) => parent.intersect(rect).unwrap_or(Rect::EMPTY),
        };
        self.stack.push(effective);
        effective
    }

    /// Pops the current clip and returns the one that is active again, if any.
    pub fn pop(&mut self) -> Option<Rect> {
        debug_assert!(!self.stack.is_empty(), "ClipStack::pop without matching push");
        self.stack.pop();
        self.stack.last().copied()
    }

    #[inline]
    pub fn current(&self) -> Option<Rect> {
        self.stack.last().copied()
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.stack.clear();
    }
}
