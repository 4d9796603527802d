//! Export of rendered avatars.

/// PNG encoding.
pub mod png;
