//! Data model types for the feed.
//!
//! - `update_generator` — random-walk source of synthetic market updates.
pub mod update_generator;
