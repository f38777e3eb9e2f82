//! The shared drawing surface. Cursors record their commands here and leave behind a display
//! list of filled polygons and pen strokes, which [Canvas::render] flattens into an image.

use std::{path::Path, sync::Arc};

use image::{Rgba, RgbaImage};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::{
    colour,
    config::Conf,
    error::Result,
    math::{Fl, Vec2, Vec4},
};

/// A single primitive issued by a cursor, in the order it was issued
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Stop drawing while moving
    PenUp,
    /// Draw while moving
    PenDown,
    /// Hide the cursor glyph
    HideCursor,
    /// Jump to an absolute position
    SetPosition(Vec2),
    /// Choose the colour used by the next fill, by name
    SetFillColour(String),
    /// Start collecting a fill region
    BeginFill,
    /// Close and paint the fill region
    EndFill,
    /// Move along the heading
    Forward(Fl),
    /// Turn counter-clockwise, in degrees
    Left(Fl),
    /// Turn clockwise, in degrees
    Right(Fl),
    /// Trace an arc whose centre lies `radius` to the left of the cursor
    Circle {
        /// Radius of the arc
        radius: Fl,
        /// Swept angle, in degrees
        extent: Fl,
    },
}

/// An entry of the display list, painted in order
#[derive(Debug, Clone, PartialEq)]
pub enum Layer {
    /// A polygon filled with the even-odd rule
    Fill {
        /// Fill colour
        colour: Vec4,
        /// Polygon outline, implicitly closed
        points: Vec<Vec2>,
    },
    /// A polyline traced with the pen down
    Stroke {
        /// Pen colour
        colour: Vec4,
        /// Pen width, in pixels
        width: Fl,
        /// Visited points
        points: Vec<Vec2>,
    },
}

/// Command log plus display list of one drawing
#[derive(Debug)]
pub struct Canvas {
    size: Vec2,
    background: Vec4,
    commands: Vec<DrawCommand>,
    layers: Vec<Layer>,
}

impl Canvas {
    /// Create an empty canvas with the size and background from `conf`
    pub fn new(conf: &Conf) -> Result<Self> {
        Ok(Self {
            size: conf.size,
            background: colour::parse(&conf.background)?,
            commands: Vec::new(),
            layers: Vec::new(),
        })
    }

    /// Canvas size in pixels
    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Every command recorded so far
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// The display list
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub(crate) fn record(&mut self, command: DrawCommand) {
        log::trace!("{command:?}");
        self.commands.push(command);
    }

    /// Reserve a slot for a fill so it ends up beneath the strokes traced while filling
    pub(crate) fn reserve_fill(&mut self) -> usize {
        self.layers.push(Layer::Fill {
            colour: Vec4::new(0, 0, 0, 0),
            points: Vec::new(),
        });
        self.layers.len() - 1
    }

    pub(crate) fn complete_fill(&mut self, index: usize, fill_colour: Vec4, fill_points: Vec<Vec2>) {
        if let Some(Layer::Fill { colour, points }) = self.layers.get_mut(index) {
            *colour = fill_colour;
            *points = fill_points;
        }
    }

    pub(crate) fn push_stroke(&mut self, colour: Vec4, width: Fl, points: Vec<Vec2>) {
        if points.len() > 1 {
            self.layers.push(Layer::Stroke {
                colour,
                width,
                points,
            });
        }
    }

    /// Flatten the display list into an image. The world origin sits in the middle of the
    /// image with y pointing up.
    pub fn render(&self) -> RgbaImage {
        let (width, height) = (self.size.x().max(1.0) as u32, self.size.y().max(1.0) as u32);
        let mut img = RgbaImage::from_pixel(width, height, Rgba(colour::to_rgba8(self.background)));
        for layer in &self.layers {
            match layer {
                Layer::Fill { colour, points } => fill_polygon(&mut img, points, *colour),
                Layer::Stroke {
                    colour,
                    width,
                    points,
                } => {
                    for segment in points.windows(2) {
                        stroke_segment(&mut img, segment[0], segment[1], *width, *colour);
                    }
                }
            }
        }
        img
    }
}

fn to_pixel((width, height): (u32, u32), p: Vec2) -> (Fl, Fl) {
    (p.x() + width as Fl / 2.0, height as Fl / 2.0 - p.y())
}

fn fill_polygon(img: &mut RgbaImage, points: &[Vec2], colour: Vec4) {
    if points.len() < 3 {
        return;
    }
    let pixel = Rgba(colour::to_rgba8(colour));
    let dims = img.dimensions();
    let verts: Vec<_> = points.iter().map(|p| to_pixel(dims, *p)).collect();
    let (min_y, max_y) = verts
        .iter()
        .fold((Fl::MAX, Fl::MIN), |(lo, hi), v| (lo.min(v.1), hi.max(v.1)));
    let first_row = (min_y - 0.5).ceil().max(0.0) as u32;
    let last_row = ((max_y - 0.5).floor() as i64).min(img.height() as i64 - 1);

    let mut crossings = Vec::new();
    for row in first_row as i64..=last_row {
        let y = row as Fl + 0.5;
        crossings.clear();
        for (i, a) in verts.iter().enumerate() {
            let b = verts[(i + 1) % verts.len()];
            // half-open so a vertex shared by two edges is counted once
            if (a.1 <= y) != (b.1 <= y) {
                crossings.push(a.0 + (y - a.1) / (b.1 - a.1) * (b.0 - a.0));
            }
        }
        crossings.sort_by(|a, b| a.total_cmp(b));
        for span in crossings.chunks_exact(2) {
            let start = (span[0] - 0.5).ceil().max(0.0) as u32;
            let end = ((span[1] - 0.5).ceil() as i64).min(img.width() as i64);
            for col in start as i64..end {
                img.put_pixel(col as u32, row as u32, pixel);
            }
        }
    }
}

fn stroke_segment(img: &mut RgbaImage, a: Vec2, b: Vec2, width: Fl, colour: Vec4) {
    let pixel = Rgba(colour::to_rgba8(colour));
    let dims = img.dimensions();
    let (a, b) = (to_pixel(dims, a), to_pixel(dims, b));
    let reach = (width / 2.0).max(0.5) + 0.2;
    let min_x = (a.0.min(b.0) - reach).floor().max(0.0) as u32;
    let min_y = (a.1.min(b.1) - reach).floor().max(0.0) as u32;
    let max_x = ((a.0.max(b.0) + reach).ceil() as i64).min(img.width() as i64 - 1);
    let max_y = ((a.1.max(b.1) + reach).ceil() as i64).min(img.height() as i64 - 1);

    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let len_sq = dx * dx + dy * dy;
    for row in min_y as i64..=max_y {
        for col in min_x as i64..=max_x {
            let (px, py) = (col as Fl + 0.5, row as Fl + 0.5);
            let t = if len_sq > 0.0 {
                (((px - a.0) * dx + (py - a.1) * dy) / len_sq).clamp(0.0, 1.0)
            } else {
                0.0
            };
            let (cx, cy) = (a.0 + t * dx - px, a.1 + t * dy - py);
            if (cx * cx + cy * cy).sqrt() <= reach {
                img.put_pixel(col as u32, row as u32, pixel);
            }
        }
    }
}

/// Handle to the one canvas every cursor draws on
#[derive(Debug, Clone)]
pub struct Screen(Arc<RwLock<Canvas>>);

impl Screen {
    /// Open a screen backed by a fresh canvas
    pub fn new(conf: &Conf) -> Result<Self> {
        Ok(Self(Arc::new(RwLock::new(Canvas::new(conf)?))))
    }

    /// Lock the canvas for reading
    pub fn read(&self) -> RwLockReadGuard<'_, Canvas> {
        self.0.read()
    }

    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, Canvas> {
        self.0.write()
    }

    /// Render the current drawing
    pub fn render(&self) -> RgbaImage {
        self.read().render()
    }

    /// Render the current drawing and write it to `path`, the format follows the extension
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        self.render().save(path)?;
        Ok(())
    }
}
