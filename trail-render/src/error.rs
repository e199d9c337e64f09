use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while rasterising or writing the trail image.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The configured canvas has no pixels
    #[error("canvas of {width}x{height} pixels has no area")]
    EmptyCanvas {
        /// Width in pixels
        width: u32,
        /// Height in pixels
        height: u32,
    },
    /// Encoding or writing the image failed
    #[error("failed to write {0}: {1}")]
    Save(PathBuf, #[source] image::ImageError),
}
