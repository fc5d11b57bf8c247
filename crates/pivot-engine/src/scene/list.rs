use super::DrawCmd;

/// Recorded draw stream for a surface.
///
/// Items are kept in paint order (back-to-front). `push()` is O(1) and
/// `clear()` keeps allocated capacity for reuse.
#[derive(Debug, Default, Clone)]
pub struct DrawList {
    items: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops all recorded commands.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(cmd);
    }

    /// Returns items in paint order.
    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Rect;
    use crate::scene::ClearCmd;

    #[test]
    fn push_keeps_insertion_order() {
        let mut list = DrawList::new();
        let a = DrawCmd::Clear(ClearCmd { rect: Rect::new(0.0, 0.0, 1.0, 1.0) });
        let b = DrawCmd::Clear(ClearCmd { rect: Rect::new(5.0, 5.0, 1.0, 1.0) });
        list.push(a.clone());
        list.push(b.clone());
        assert_eq!(list.items(), &[a, b]);
    }

    #[test]
    fn clear_empties_the_stream() {
        let mut list = DrawList::new();
        list.push(DrawCmd::Clear(ClearCmd { rect: Rect::default() }));
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }
}
