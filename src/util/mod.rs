//! Browser utilities shared across pages.

pub mod enhancer;
