//! Implementation of the `#[derive(Model)]` macro.
//!
//! This module provides derive macro support for criteria compilation,
//! generating member metadata, field readers and name constants from struct
//! annotations.

mod attrs;
mod derive;

pub use derive::model_derive_impl;
