//! Pure per-frame evaluation: timeline lookup, scene layouts and diagram animation.
//!
//! Nothing here returns `Result` or keeps state between calls. Every function maps
//! `(config data, frame, RenderCtx)` to a description, so frames may be requested in any order.

pub(crate) mod diagram;
pub(crate) mod scene;
pub(crate) mod theme;
pub(crate) mod timeline;
