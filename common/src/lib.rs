//! This crate provides common funcionality shared by the regression and kernel crates

#![deny(unused_imports, unused_crate_dependencies)]
#![warn(missing_docs)]

mod error;
mod params;

pub use error::{ensure_len, Error, Result};
pub use params::GradientDescentParams;
