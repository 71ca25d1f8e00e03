//! HTTP middleware shared by both services.

pub mod timing;

pub use timing::timing_layer;
