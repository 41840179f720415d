//! Interactive menu session.
//!
//! A [`MenuController`] walks the states
//! `Init → MainMenu → {View, Add, Search, Delete} → MainMenu → Exited`,
//! saving exactly once on the way out.

mod controller;
pub mod render;

pub use controller::{MenuController, MenuOption, MenuState, SessionOutcome};
