//! Target-independent logic of the portfolio site.
//!
//! Everything here is plain data and pure functions so it can be unit tested
//! natively; the WASM frontend owns the DOM, timers and storage.

pub mod domain;
pub mod shared;
pub mod usecases;
