use crate::{
    canvas::Screen,
    error::{Error, Result},
    math::{Fl, IntoFl, Vec2},
    turtle::Turtle,
};

mod outline;

/// The geometry of a [Shape]
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeKind {
    /// No geometry of its own, drawing it is a contract violation
    Abstract,
    /// An axis aligned rectangle hanging right and down from the anchor
    Rectangle {
        /// Length of the first and third edge
        width: Fl,
        /// Length of the second and fourth edge
        height: Fl,
    },
    /// A circle hanging below the anchor
    Circle {
        /// Radius of the circle
        radius: Fl,
    },
    /// A five pointed star
    Star {
        /// Length of every stride
        side_length: Fl,
    },
    /// Two sides of a triangle, the fill closes the third
    Triangle {
        /// Length of both traced sides
        side_length: Fl,
    },
}

/// A named, coloured shape anchored at a point
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    name: String,
    fill_colour: String,
    anchor: Vec2,
    kind: ShapeKind,
}

impl Shape {
    /// A shape with no geometry. It can be created and inspected, but [Shape::draw] fails.
    pub fn new(name: impl Into<String>, fill_colour: impl Into<String>, anchor: impl Into<Vec2>) -> Self {
        Self::with_kind(name, fill_colour, anchor, ShapeKind::Abstract)
    }

    fn with_kind(
        name: impl Into<String>,
        fill_colour: impl Into<String>,
        anchor: impl Into<Vec2>,
        kind: ShapeKind,
    ) -> Self {
        Self {
            name: name.into(),
            fill_colour: fill_colour.into(),
            anchor: anchor.into(),
            kind,
        }
    }

    /// A rectangle whose top left corner is `anchor`
    pub fn rectangle(
        width: impl IntoFl,
        height: impl IntoFl,
        fill_colour: impl Into<String>,
        anchor: impl Into<Vec2>,
    ) -> Self {
        let kind = ShapeKind::Rectangle {
            width: width.into_fl(),
            height: height.into_fl(),
        };
        Self::with_kind("Rectangle", fill_colour, anchor, kind)
    }

    /// A circle whose top point is `anchor`
    pub fn circle(radius: impl IntoFl, fill_colour: impl Into<String>, anchor: impl Into<Vec2>) -> Self {
        let kind = ShapeKind::Circle {
            radius: radius.into_fl(),
        };
        Self::with_kind("Circle", fill_colour, anchor, kind)
    }

    /// A five pointed star starting at `anchor`
    pub fn star(side_length: impl IntoFl, fill_colour: impl Into<String>, anchor: impl Into<Vec2>) -> Self {
        let kind = ShapeKind::Star {
            side_length: side_length.into_fl(),
        };
        Self::with_kind("star", fill_colour, anchor, kind)
    }

    /// A triangle whose bottom left corner is `anchor`. Only two sides are traced.
    pub fn triangle(side_length: impl IntoFl, fill_colour: impl Into<String>, anchor: impl Into<Vec2>) -> Self {
        let kind = ShapeKind::Triangle {
            side_length: side_length.into_fl(),
        };
        // shares the star's display name, kept so existing drawings label the same way
        Self::with_kind("star", fill_colour, anchor, kind)
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fill colour name
    pub fn fill_colour(&self) -> &str {
        &self.fill_colour
    }

    /// Point where drawing starts
    pub fn anchor(&self) -> Vec2 {
        self.anchor
    }

    /// Geometry
    pub fn kind(&self) -> &ShapeKind {
        &self.kind
    }

    /// Draw the filled shape with a fresh cursor: move to the anchor without drawing, open a
    /// fill region in the shape's colour, trace the outline and close the fill.
    pub fn draw(&self, screen: &Screen) -> Result<()> {
        log::debug!(
            "drawing {} ({}) at ({}, {})",
            self.name,
            self.fill_colour,
            self.anchor.x(),
            self.anchor.y()
        );
        let mut t = Turtle::new(screen);
        t.pen_up();
        t.hide();
        t.set_position(self.anchor);
        t.pen_down();
        t.set_fill_colour(&self.fill_colour)?;
        t.begin_fill();
        self.draw_outline(&mut t)?;
        t.end_fill();
        Ok(())
    }

    /// Trace the outline starting from the cursor's position and heading
    pub fn draw_outline(&self, t: &mut Turtle) -> Result<()> {
        match self.kind {
            ShapeKind::Abstract => {
                return Err(Error::AbstractOutline {
                    name: self.name.clone(),
                })
            }
            ShapeKind::Rectangle { width, height } => outline::rectangle(t, width, height),
            ShapeKind::Circle { radius } => outline::circle(t, radius),
            ShapeKind::Star { side_length } => outline::star(t, side_length),
            ShapeKind::Triangle { side_length } => outline::triangle(t, side_length),
        }
        Ok(())
    }
}
