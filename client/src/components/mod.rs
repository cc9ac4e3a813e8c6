//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Presentational pieces for the splash and dashboard. None of them touch
//! storage; pages pass in everything they render.

pub mod category_card;
pub mod premium_panel;
pub mod splash;
pub mod stat_card;
