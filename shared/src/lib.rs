//! Types and decision logic shared by the Gref auth client.
//!
//! Nothing in this crate touches browser APIs, so everything here is
//! testable natively. The `yew` feature adds the `Reducible` impl the
//! frontend uses to hold the session at the application root.

pub mod api;
pub mod error;
pub mod lifetime;
pub mod models;
pub mod navigation;
pub mod session;
