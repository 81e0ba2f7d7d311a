//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by view (`browse`, `report`) so individual components
//! can depend on small focused models, and so the string/validation
//! logic stays testable on the native target.

pub mod browse;
pub mod report;
