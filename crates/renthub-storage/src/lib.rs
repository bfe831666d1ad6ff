//! # renthub-storage
//!
//! Local filesystem storage for uploaded files. Photos are written under
//! a configured upload root with UUID-derived names and served back via
//! a public URL prefix.

pub mod local;

pub use local::PhotoStore;
