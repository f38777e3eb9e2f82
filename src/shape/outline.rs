use crate::{math::Fl, turtle::Turtle};

pub(super) fn rectangle(t: &mut Turtle, width: Fl, height: Fl) {
    for _ in 0..2 {
        for edge in [width, height] {
            t.forward(edge);
            t.right(90);
        }
    }
}

/// Flip around first so the circle hangs below the starting point
pub(super) fn circle(t: &mut Turtle, radius: Fl) {
    t.left(180);
    t.circle(radius);
}

/// Each point is a stride out, a sharp turn and a stride back in, rotating the whole
/// figure by 72 degrees per point.
pub(super) fn star(t: &mut Turtle, side_length: Fl) {
    for _ in 0..5 {
        t.forward(side_length);
        t.right(120);
        t.forward(side_length);
        t.left(120 - 72);
    }
}

/// Two sides only, the path stays open and the fill closes the third side
pub(super) fn triangle(t: &mut Turtle, side_length: Fl) {
    t.forward(side_length);
    t.left(120);
    t.forward(side_length);
    t.left(60);
}

#[cfg(test)]
mod tests {
    use crate::{
        canvas::{DrawCommand as C, Screen},
        config::Conf,
        error::Error,
        math::{normalize_degrees, Fl, Vec2},
        shape::Shape,
        turtle::Turtle,
    };
    use rand::Rng;

    const EPS: Fl = 1e-2;

    /// Trace a shape's outline from the origin, returning the commands and the end position
    fn trace(shape: &Shape) -> (Vec<C>, Turtle) {
        let screen = Screen::new(&Conf::default()).unwrap();
        let mut t = Turtle::new(&screen);
        shape.draw_outline(&mut t).unwrap();
        let commands = screen.read().commands().to_vec();
        (commands, t)
    }

    /// Signed heading change in degrees, counter-clockwise positive
    fn net_turn(commands: &[C]) -> Fl {
        commands
            .iter()
            .map(|c| match c {
                C::Left(d) => *d,
                C::Right(d) => -*d,
                C::Circle { extent, .. } => *extent,
                _ => 0.0,
            })
            .sum()
    }

    #[test]
    fn concrete_shapes_have_outlines() {
        let shapes = [
            Shape::rectangle(10, 20, "red", (0, 0)),
            Shape::circle(5, "red", (0, 0)),
            Shape::star(10, "red", (0, 0)),
            Shape::triangle(10, "red", (0, 0)),
        ];
        let screen = Screen::new(&Conf::default()).unwrap();
        for shape in &shapes {
            let mut t = Turtle::new(&screen);
            assert!(shape.draw_outline(&mut t).is_ok(), "{shape:?}");
        }
    }

    #[test]
    fn abstract_shape_has_no_outline() {
        let shape = Shape::new("shape", "red", (0, 0));
        let screen = Screen::new(&Conf::default()).unwrap();
        let mut t = Turtle::new(&screen);
        match shape.draw_outline(&mut t) {
            Err(Error::AbstractOutline { name }) => assert_eq!(name, "shape"),
            other => panic!("expected abstract outline error, got {other:?}"),
        }
        assert!(screen.read().commands().is_empty());
    }

    #[test]
    fn rectangle_closes_after_four_right_angles() {
        let (commands, t) = trace(&Shape::rectangle(300, 300, "red", (0, 0)));
        assert_eq!(
            commands,
            [
                C::Forward(300.0),
                C::Right(90.0),
                C::Forward(300.0),
                C::Right(90.0),
                C::Forward(300.0),
                C::Right(90.0),
                C::Forward(300.0),
                C::Right(90.0),
            ]
        );
        assert_eq!(net_turn(&commands), -360.0);
        assert!(t.position().distance(Vec2::new(0, 0)) < EPS);
    }

    #[test]
    fn rectangle_alternates_width_and_height() {
        let (commands, _) = trace(&Shape::rectangle(50, 150, "blue", (0, 0)));
        let strides: Vec<_> = commands
            .iter()
            .filter_map(|c| match c {
                C::Forward(d) => Some(*d),
                _ => None,
            })
            .collect();
        assert_eq!(strides, [50.0, 150.0, 50.0, 150.0]);
    }

    #[test]
    fn random_rectangles_close() {
        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let (w, h) = (rng.gen_range(1.0..500.0f32), rng.gen_range(1.0..500.0f32));
            let (_, t) = trace(&Shape::rectangle(w, h, "red", (0, 0)));
            assert!(t.position().distance(Vec2::new(0, 0)) < 0.05, "{w} x {h}");
            assert!(normalize_degrees(t.heading() + EPS) < 2.0 * EPS);
        }
    }

    #[test]
    fn circle_flips_then_draws_one_arc() {
        let (commands, t) = trace(&Shape::circle(5, "black", (0, 0)));
        assert_eq!(
            commands,
            [C::Left(180.0), C::Circle { radius: 5.0, extent: 360.0 }]
        );
        assert!(t.position().distance(Vec2::new(0, 0)) < EPS);
        assert!((t.heading() - 180.0).abs() < EPS);
    }

    #[test]
    fn star_repeats_five_points_and_closes() {
        let (commands, t) = trace(&Shape::star(10, "white", (0, 0)));
        let point = [C::Forward(10.0), C::Right(120.0), C::Forward(10.0), C::Left(48.0)];
        assert_eq!(commands.len(), 20);
        for chunk in commands.chunks(4) {
            assert_eq!(chunk, point);
        }
        let turn = net_turn(&commands);
        assert!((turn.rem_euclid(360.0)).min(360.0 - turn.rem_euclid(360.0)) < EPS);
        assert!(t.position().distance(Vec2::new(0, 0)) < EPS);
    }

    #[test]
    fn random_stars_close() {
        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let side = rng.gen_range(1.0..200.0f32);
            let (_, t) = trace(&Shape::star(side, "white", (0, 0)));
            assert!(t.position().distance(Vec2::new(0, 0)) < 0.05, "side {side}");
        }
    }

    #[test]
    fn triangle_path_stays_open() {
        let (commands, t) = trace(&Shape::triangle(300, "green", (0, 0)));
        assert_eq!(
            commands,
            [C::Forward(300.0), C::Left(120.0), C::Forward(300.0), C::Left(60.0)]
        );
        assert_eq!(net_turn(&commands), 180.0);
        assert!((t.heading() - 180.0).abs() < EPS);
        // the cursor stops at the apex, half a side right of the start and never returns
        let apex = Vec2::new(150.0, 300.0 * (3.0 as Fl).sqrt() / 2.0);
        assert!(t.position().distance(apex) < 0.05);
        assert!(t.position().distance(Vec2::new(0, 0)) > 250.0);
    }
}
