//! Model-to-encoding resolution for countgpt.
//!
//! The static table in `table.rs` maps model names and shorthands to one of
//! the six [`Encoding`]s. [`resolve_model`] looks names up in it and
//! [`list_models`] prints it.

mod encoding;
mod listing;
mod resolve;
mod table;

pub use encoding::Encoding;
pub use listing::list_models;
pub use resolve::{resolve_model, Resolution};

#[cfg(test)]
mod tests;
