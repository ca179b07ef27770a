//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Header chrome reads and writes the theme/menu signals from context; the
//! section components are static markup over `crate::content`.

pub mod about;
pub mod contact;
pub mod faq;
pub mod features;
pub mod header;
pub mod hero;
pub mod icons;
pub mod mobile_menu;
pub mod theme_toggle;
