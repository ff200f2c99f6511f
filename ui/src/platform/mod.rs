//! Host-environment adapters for the page capabilities.

#[cfg(target_arch = "wasm32")]
pub mod web;
