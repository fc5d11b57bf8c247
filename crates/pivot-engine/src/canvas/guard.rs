use core::ops::{Deref, DerefMut};

use super::Surface;

/// Scope guard pairing a `Surface::save` with its `Surface::restore`.
///
/// The restore runs on drop, including during unwinding, so transforms
/// applied through the guard never outlive it.
pub struct SavedState<'s, S: Surface> {
    surface: &'s mut S,
}

impl<'s, S: Surface> SavedState<'s, S> {
    pub(super) fn new(surface: &'s mut S) -> Self {
        surface.save();
        Self { surface }
    }
}

impl<S: Surface> Deref for SavedState<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: Surface> DerefMut for SavedState<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: Surface> Drop for SavedState<'_, S> {
    fn drop(&mut self) {
        self.surface.restore();
    }
}
