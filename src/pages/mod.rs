//! Top-level page views wired into the router.

pub mod browse;
pub mod home;
pub mod report_found;
pub mod report_lost;
