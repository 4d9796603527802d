/// Stateful editing session mirroring an avatar editor UI.
pub mod session;
