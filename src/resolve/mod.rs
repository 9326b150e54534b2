// src/resolve/mod.rs
mod bundles;
mod pipeline;
mod probe;

pub use pipeline::{Resolved, Resolver, Stage};
