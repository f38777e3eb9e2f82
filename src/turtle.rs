use crate::{
    canvas::{DrawCommand, Screen},
    colour,
    error::Result,
    math::{normalize_degrees, Fl, IntoFl, Vec2, Vec4},
};

#[derive(Debug)]
struct PendingFill {
    layer: usize,
    points: Vec<Vec2>,
}

/// A drawing cursor. Starts at the origin facing east (heading 0) with the pen down, and
/// records every primitive it performs on its [Screen].
///
/// Headings are in degrees, counter-clockwise. Lines traced with the pen down become stroke
/// layers on the canvas, a fill region becomes a fill layer beneath them.
#[derive(Debug)]
pub struct Turtle {
    screen: Screen,
    position: Vec2,
    heading: Fl,
    pen_down: bool,
    visible: bool,
    pen_colour: Vec4,
    pen_width: Fl,
    fill_colour: Vec4,
    stroke: Vec<Vec2>,
    fill: Option<PendingFill>,
}

impl Turtle {
    /// Create a fresh cursor on `screen`
    pub fn new(screen: &Screen) -> Self {
        let position = Vec2::new(0, 0);
        Self {
            screen: screen.clone(),
            position,
            heading: 0.0,
            pen_down: true,
            visible: true,
            pen_colour: Vec4::new(0, 0, 0, 1),
            pen_width: 1.0,
            fill_colour: Vec4::new(0, 0, 0, 1),
            stroke: vec![position],
            fill: None,
        }
    }

    /// Current position
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Current heading in degrees, in `[0, 360)`
    pub fn heading(&self) -> Fl {
        self.heading
    }

    /// Whether moving draws a line
    pub fn is_down(&self) -> bool {
        self.pen_down
    }

    /// Whether a fill region is open
    pub fn is_filling(&self) -> bool {
        self.fill.is_some()
    }

    /// Whether the cursor glyph is shown
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Lift the pen, ending the current line
    pub fn pen_up(&mut self) {
        self.record(DrawCommand::PenUp);
        self.flush_stroke();
        self.pen_down = false;
    }

    /// Lower the pen, starting a new line at the current position
    pub fn pen_down(&mut self) {
        self.record(DrawCommand::PenDown);
        if !self.pen_down {
            self.pen_down = true;
            self.stroke = vec![self.position];
        }
    }

    /// Hide the cursor glyph
    pub fn hide(&mut self) {
        self.record(DrawCommand::HideCursor);
        self.visible = false;
    }

    /// Move to an absolute position, drawing a line if the pen is down
    pub fn set_position(&mut self, pos: impl Into<Vec2>) {
        let pos = pos.into();
        self.record(DrawCommand::SetPosition(pos));
        self.move_to(pos);
    }

    /// Move `distance` along the current heading
    pub fn forward(&mut self, distance: impl IntoFl) {
        let distance = distance.into_fl();
        self.record(DrawCommand::Forward(distance));
        self.advance(distance);
    }

    /// Turn counter-clockwise by `degrees`
    pub fn left(&mut self, degrees: impl IntoFl) {
        let degrees = degrees.into_fl();
        self.record(DrawCommand::Left(degrees));
        self.turn(degrees);
    }

    /// Turn clockwise by `degrees`
    pub fn right(&mut self, degrees: impl IntoFl) {
        let degrees = degrees.into_fl();
        self.record(DrawCommand::Right(degrees));
        self.turn(-degrees);
    }

    /// Trace a full circle whose centre lies `radius` to the left of the cursor. A negative
    /// radius puts the centre on the right and traces clockwise.
    pub fn circle(&mut self, radius: impl IntoFl) {
        self.arc(radius, 360.0)
    }

    /// Trace `extent` degrees of a circle whose centre lies `radius` to the left of the cursor.
    ///
    /// The arc is approximated by a regular polygon whose step count grows with the radius,
    /// capped at 60 steps for a full circle.
    pub fn arc(&mut self, radius: impl IntoFl, extent: impl IntoFl) {
        let (radius, extent) = (radius.into_fl(), extent.into_fl());
        self.record(DrawCommand::Circle { radius, extent });

        let fraction = extent.abs() / 360.0;
        let steps = 1 + ((11.0 + radius.abs() / 6.0).min(59.0) * fraction) as u32;
        let mut step_angle = extent / steps as Fl;
        let mut chord = 2.0 * radius * (step_angle / 2.0).to_radians().sin();
        if radius < 0.0 {
            chord = -chord;
            step_angle = -step_angle;
        }
        self.turn(step_angle / 2.0);
        for _ in 0..steps {
            self.advance(chord);
            self.turn(step_angle);
        }
        self.turn(-step_angle / 2.0);
    }

    /// Set the colour used by fill regions, by name or `#rrggbb`
    pub fn set_fill_colour(&mut self, name: &str) -> Result<()> {
        self.fill_colour = colour::parse(name)?;
        self.record(DrawCommand::SetFillColour(name.to_owned()));
        Ok(())
    }

    /// Open a fill region at the current position. The fill is layered beneath every line
    /// traced until [Turtle::end_fill].
    pub fn begin_fill(&mut self) {
        self.record(DrawCommand::BeginFill);
        self.flush_stroke();
        let layer = self.screen.write().reserve_fill();
        self.fill = Some(PendingFill {
            layer,
            points: vec![self.position],
        });
    }

    /// Close the fill region, joining the last point back to the first, and paint it with the
    /// current fill colour. Paths with fewer than three points fill nothing.
    pub fn end_fill(&mut self) {
        self.record(DrawCommand::EndFill);
        self.flush_stroke();
        if let Some(PendingFill { layer, points }) = self.fill.take() {
            let points = if points.len() > 2 { points } else { Vec::new() };
            self.screen
                .write()
                .complete_fill(layer, self.fill_colour, points);
        }
    }

    fn record(&self, command: DrawCommand) {
        self.screen.write().record(command);
    }

    fn turn(&mut self, degrees: Fl) {
        self.heading = normalize_degrees(self.heading + degrees);
    }

    fn advance(&mut self, distance: Fl) {
        let target = self.position + Vec2::from_heading(self.heading) * distance;
        self.move_to(target);
    }

    fn move_to(&mut self, target: Vec2) {
        self.position = target;
        if self.pen_down {
            self.stroke.push(target);
        }
        if let Some(fill) = &mut self.fill {
            fill.points.push(target);
        }
    }

    /// Hand the line traced so far to the canvas and start a new one here
    fn flush_stroke(&mut self) {
        let stroke = std::mem::replace(&mut self.stroke, vec![self.position]);
        if self.pen_down {
            self.screen
                .write()
                .push_stroke(self.pen_colour, self.pen_width, stroke);
        }
    }
}

impl Drop for Turtle {
    fn drop(&mut self) {
        self.flush_stroke();
    }
}
