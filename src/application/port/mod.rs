// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! Infrastructure adapters implement these traits; the application layer
//! only sees domain types.
//!
//! # Available Ports
//!
//! - [`renderer`]: Icon set rendering

pub mod renderer;

pub use renderer::{IconJob, IconRenderer, RenderedIcon};
