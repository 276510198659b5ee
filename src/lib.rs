//! Client-state core for the Tabu club web front-end.
//!
//! The pages of the site render against two pieces of shared client state:
//! which display language is active and which visual theme is selected.
//! This crate owns both, together with the translation catalog and the
//! durable preference storage they persist through.
//!
//! The stores never fail toward the UI. Missing translations render as
//! their key and unknown codes are ignored; without a storage backend,
//! selections simply reset next session.

pub mod i18n;
pub mod prefs;
pub mod subscription;
pub mod theme;
