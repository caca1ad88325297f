//! Renderer adapters: a recording list for headless use, a software raster
//! canvas, and the `pixels` window presenter behind the `gui` feature.

#[cfg(feature = "gui")]
pub mod pixels;
pub mod raster;
pub mod recording;
