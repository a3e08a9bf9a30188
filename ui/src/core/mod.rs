//! Platform-agnostic plumbing shared by every page: configuration, persistence,
//! timers and the thin browser glue layer.

pub mod config;
pub mod platform;
pub mod storage;
pub mod timing;
