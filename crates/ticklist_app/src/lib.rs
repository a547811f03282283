//! Desktop window for Ticklist.
//!
//! The library half exists so the view-model sync layer can be exercised by
//! integration tests without a running window; the `ticklist` binary wires
//! it to iced.

pub mod app;
pub mod board;
