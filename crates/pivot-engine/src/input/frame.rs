use super::types::Key;

/// Key presses since the last frame.
///
/// OS auto-repeat is filtered out by the runtime, so each entry is one
/// physical press.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Pressed keys in arrival order.
    pub keys_pressed: Vec<Key>,
}

impl InputFrame {
    pub fn press(&mut self, key: Key) {
        self.keys_pressed.push(key);
    }

    pub fn clear(&mut self) {
        self.keys_pressed.clear();
    }
}
