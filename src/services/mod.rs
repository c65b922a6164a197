//! Service layer for the scraper.
//!
//! - Session gating (`session`)
//! - Dustkid listing import (`dustkid`)
//! - Level page classification (`classify`)
//! - Field extraction (`extract`)

pub mod classify;
pub mod dustkid;
pub mod extract;
pub mod session;

pub use classify::classify;
pub use dustkid::import_levels;
pub use extract::{LevelDetails, RatingTriple};
pub use session::SessionContext;
