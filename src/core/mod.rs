//! # Core Module
//!
//! Resource containers shared by the highlighter's host callbacks.
//!
//! ## Key Components
//! - `StResource`: Single-threaded reference-counted resource with interior mutability
//!
//! The host drives every callback from one logic thread, so no thread-safe variant is needed.

pub mod st_resource;

pub use st_resource::StResource;
