/// Everything that can go wrong while drawing and exporting a scene.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The outline routine was invoked on a shape that has none.
    #[error("abstract outline invoked on {name:?}, only concrete shapes can be drawn")]
    AbstractOutline {
        /// Display name of the offending shape
        name: String,
    },
    /// A colour name the canvas does not know.
    #[error("unknown colour name {0:?}")]
    UnknownColour(String),
    /// Writing the rendered frame failed.
    #[error("failed to write the rendered image")]
    Image(#[from] image::ImageError),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
