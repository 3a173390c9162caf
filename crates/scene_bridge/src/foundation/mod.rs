//! Foundation utilities shared across the bridge

pub mod logging;
pub mod math;
