#![warn(missing_docs)]
//! Draws a little house out of filled shapes with a turtle-style cursor, writes the picture to
//! disk and holds it for a moment before exiting.
//!
//! ```ignore
//! casa::main!();
//! ```

/// The shared drawing surface and its display list
pub mod canvas;
/// Colour names and parsing
pub mod colour;
/// Global casa configuration parameters
pub mod config;
/// Error type shared by the whole crate
pub mod error;
/// Contains functions for doing various math tasks, including working with vectors
pub mod math;
/// The house scene
pub mod scene;
/// Shapes that know how to draw themselves
pub mod shape;
/// The drawing cursor
pub mod turtle;

/// Global casa configuration struct, pass to [main] (e.g. `casa::main!(Conf { .. })`),
/// to configure the run
pub use config::Conf;
pub use error::{Error, Result};

/// The image crate is used for the rendered frame
pub use image;
/// The nalgebra crate is used for vectors, have fun with math!
pub use nalgebra;

/// Useful structs to have imported
pub mod prelude {
    pub use crate::canvas::Screen;
    pub use crate::config::Conf;
    pub use crate::math::prelude::*;
    pub use crate::shape::{Shape, ShapeKind};
    pub use crate::turtle::Turtle;
}

/// Draw the house on a fresh screen, export it if configured, then hold for `conf.pause`
pub fn run(conf: Conf) -> Result<()> {
    log::info!(
        "{}: {}x{} canvas",
        conf.title,
        conf.size.x(),
        conf.size.y()
    );
    let screen = canvas::Screen::new(&conf)?;
    let shapes = scene::house();
    scene::draw_all(&shapes, &screen)?;
    log::info!(
        "drew {} shapes with {} commands",
        shapes.len(),
        screen.read().commands().len()
    );

    if let Some(output) = &conf.output {
        screen.save(output)?;
        log::info!("wrote {}", output.display());
    }

    log::info!("holding for {:?}", conf.pause);
    std::thread::sleep(conf.pause);
    Ok(())
}

#[doc(hidden)]
pub fn __init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}

/// Inserts a main function that sets up logging and runs the house drawing with the given
/// [Conf], or the default one
#[macro_export]
macro_rules! main {
    () => {
        $crate::main!($crate::Conf::default());
    };
    ($conf:expr) => {
        fn main() -> ::std::result::Result<(), $crate::Error> {
            $crate::__init_logging();
            $crate::run($conf)
        }
    };
}
