//! Shared building blocks for the KHC skill crates

#![allow(clippy::must_use_candidate)]

mod error;
pub mod locale;

pub use error::HttpError;
pub use locale::Locale;
