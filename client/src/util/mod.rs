//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Keeps browser file handling, form rules, and markdown rendering out of the
//! component bodies so they can be unit tested without a DOM.

pub mod files;
pub mod form;
pub mod markdown;
