//! Capability seams between the page logic and its host environment.

pub mod console;
pub mod dom;
pub mod events;
pub mod storage;
pub mod timing;
