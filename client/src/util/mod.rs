//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic. Each browser touchpoint sits behind a small trait so state logic can
//! be exercised natively.

pub mod dark_mode;
pub mod scroll;
pub mod storage;
