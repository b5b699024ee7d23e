//! Localized landing site for Sports Scouting Sudamérica · Bulgaria.
//!
//! The interesting part lives in [`i18n`]: which locale a visitor sees, how
//! URLs map between locales, and how the language preference persists.
//! [`content`] and [`server`] are the thin rendering layer on top.

pub mod config;
pub mod content;
pub mod i18n;
pub mod server;
