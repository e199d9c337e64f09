//! Core 2-D particle trail simulation library.
//!
//! Main components:
//! - [`glyph`] — letterform polylines that particles are drawn towards.
//! - [`targets`] — spreading a particle budget along a polyline.
//! - [`phases`] — scatter and attraction phases, and the full simulation run.
//! - [`history`] — the step-by-step position record of every particle.
//! - [`config`] — simulation parameters.
//! - [`error`] — error types.
//! - [`types`] — shared type aliases and IDs.

pub mod config;
pub mod error;
pub mod glyph;
pub mod history;
pub mod phases;
pub mod targets;
pub mod types;
