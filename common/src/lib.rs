//! Target-independent core of the meme maker.
//!
//! Everything in here compiles natively and to `wasm32`, so the workflow rules
//! are unit tested without a browser. The Yew components in `frontend` only
//! forward user events and remote results into these types.

pub mod builder;
pub mod error;
pub mod model;
pub mod notifications;
pub mod requests;
