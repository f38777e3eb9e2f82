use std::{path::PathBuf, time::Duration};

use crate::math::Vec2;

/// Global casa configuration struct, pass to [main](crate::main) (e.g. `casa::main!(Conf { .. })`)
/// to configure the run.
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(::serde::Deserialize, ::serde::Serialize),
    serde(default)
)]
pub struct Conf {
    /// Title of the drawing, used when logging
    pub title: String,
    /// Canvas size, in pixels
    pub size: Vec2,
    /// Colour name the canvas is cleared to
    pub background: String,
    /// Where to write the rendered frame, nothing is written when `None`
    pub output: Option<PathBuf>,
    /// How long to hold the finished drawing before exiting
    pub pause: Duration,
}

impl Default for Conf {
    fn default() -> Self {
        Self {
            title: "casa".to_owned(),
            size: (800, 600).into(),
            background: "white".to_owned(),
            output: Some(PathBuf::from("casa.png")),
            pause: Duration::from_secs(3),
        }
    }
}
