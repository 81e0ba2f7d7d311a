//! Network layer: item record types and the REST client for the
//! lost/found report endpoints.

pub mod api;
pub mod types;
