use crate::{canvas::Screen, error::Result, shape::Shape};

/// The house, in drawing order: the wall, the roof on top of it, the door, the doorknob, a star
/// over the wall and the window.
pub fn house() -> Vec<Shape> {
    vec![
        Shape::rectangle(300, 300, "red", (-175, 0)),
        Shape::triangle(300, "green", (-175, 0)),
        Shape::rectangle(50, 150, "blue", (-140, -150)),
        Shape::circle(5, "black", (-100, -200)),
        Shape::star(10, "white", (-125, 50)),
        Shape::rectangle(75, 75, "white", (-50, -150)),
    ]
}

/// Draw every shape in order, later shapes land on top of earlier ones
pub fn draw_all(shapes: &[Shape], screen: &Screen) -> Result<()> {
    for shape in shapes {
        shape.draw(screen)?;
    }
    Ok(())
}
