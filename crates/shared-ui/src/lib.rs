//! Reusable console UI components with co-located styles.

pub mod components;

pub use components::*;
