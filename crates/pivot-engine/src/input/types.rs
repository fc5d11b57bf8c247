/// Keyboard key identifier.
///
/// Only keys something binds get a variant. Everything else arrives as
/// `Key::Unknown` with the platform code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    F,
    R,
    T,

    /// Platform-dependent key not represented here.
    Unknown(u32),
}
