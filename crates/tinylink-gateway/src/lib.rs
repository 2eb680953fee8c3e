//! HTTP transport for the Tinylink URL shortener.
//!
//! A thin adapter: requests are decoded, handed to a [`Shortener`] or a
//! [`Redirector`], and the result or error is mapped onto an HTTP response.
//!
//! [`Shortener`]: tinylink_core::Shortener
//! [`Redirector`]: tinylink_redirector::Redirector

pub mod app;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;

pub use app::App;
pub use state::AppState;
