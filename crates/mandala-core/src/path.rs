use std::fmt;

use crate::point::Point;

/// A single SVG path-data command.
///
/// Absolute commands carry output-space points; the `*By` variants are the
/// relative forms (`m`, `h`, `v`, `a`) used by dots and glyph rectangles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    MoveTo(Point),
    MoveBy(f64, f64),
    LineTo(Point),
    HorizontalBy(f64),
    VerticalBy(f64),
    QuadTo(Point, Point),
    SmoothQuadTo(Point),
    CubicTo(Point, Point, Point),
    ArcBy {
        rx: f64,
        ry: f64,
        rotation: f64,
        large_arc: bool,
        sweep: bool,
        dx: f64,
        dy: f64,
    },
    Close,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::MoveTo(p) => write!(f, "M {p}"),
            Command::MoveBy(dx, dy) => write!(f, "m {dx},{dy}"),
            Command::LineTo(p) => write!(f, "L {p}"),
            Command::HorizontalBy(dx) => write!(f, "h {dx}"),
            Command::VerticalBy(dy) => write!(f, "v {dy}"),
            Command::QuadTo(c, p) => write!(f, "Q {c} {p}"),
            Command::SmoothQuadTo(p) => write!(f, "T {p}"),
            Command::CubicTo(c1, c2, p) => write!(f, "C {c1} {c2} {p}"),
            Command::ArcBy { rx, ry, rotation, large_arc, sweep, dx, dy } => write!(
                f,
                "a {rx},{ry} {rotation} {},{} {dx},{dy}",
                u8::from(*large_arc),
                u8::from(*sweep)
            ),
            Command::Close => write!(f, "Z"),
        }
    }
}

/// An ordered list of drawing commands, possibly holding several sub-paths.
///
/// Displays as SVG path data with commands separated by single spaces.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    commands: Vec<Command>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { commands: Vec::with_capacity(capacity) }
    }

    /// Start a path at `p`.
    pub fn starting_at(p: Point) -> Self {
        let mut path = Self::new();
        path.move_to(p);
        path
    }

    /// A filled-looking dot: two half-circle arcs around `center`.
    pub fn circle(center: Point, radius: f64) -> Self {
        let mut path = Self::with_capacity(4);
        path.push_circle(center, radius);
        path
    }

    /// A closed polyline through `points`.
    pub fn polygon(points: &[Point]) -> Self {
        let mut path = Self::with_capacity(points.len() + 1);
        for (i, p) in points.iter().enumerate() {
            if i == 0 {
                path.move_to(*p);
            } else {
                path.line_to(*p);
            }
        }
        if !points.is_empty() {
            path.close();
        }
        path
    }

    pub fn move_to(&mut self, p: Point) -> &mut Self {
        self.commands.push(Command::MoveTo(p));
        self
    }

    pub fn move_by(&mut self, dx: f64, dy: f64) -> &mut Self {
        self.commands.push(Command::MoveBy(dx, dy));
        self
    }

    pub fn line_to(&mut self, p: Point) -> &mut Self {
        self.commands.push(Command::LineTo(p));
        self
    }

    pub fn horizontal_by(&mut self, dx: f64) -> &mut Self {
        self.commands.push(Command::HorizontalBy(dx));
        self
    }

    pub fn vertical_by(&mut self, dy: f64) -> &mut Self {
        self.commands.push(Command::VerticalBy(dy));
        self
    }

    pub fn quad_to(&mut self, control: Point, p: Point) -> &mut Self {
        self.commands.push(Command::QuadTo(control, p));
        self
    }

    pub fn smooth_quad_to(&mut self, p: Point) -> &mut Self {
        self.commands.push(Command::SmoothQuadTo(p));
        self
    }

    pub fn cubic_to(&mut self, c1: Point, c2: Point, p: Point) -> &mut Self {
        self.commands.push(Command::CubicTo(c1, c2, p));
        self
    }

    pub fn arc_by(&mut self, rx: f64, ry: f64, large_arc: bool, sweep: bool, dx: f64, dy: f64) -> &mut Self {
        self.commands.push(Command::ArcBy { rx, ry, rotation: 0.0, large_arc, sweep, dx, dy });
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.commands.push(Command::Close);
        self
    }

    /// Append a dot sub-path to this path.
    pub fn push_circle(&mut self, center: Point, radius: f64) -> &mut Self {
        self.move_to(center)
            .move_by(-radius, 0.0)
            .arc_by(radius, radius, true, false, radius * 2.0, 0.0)
            .arc_by(radius, radius, true, false, -radius * 2.0, 0.0)
    }

    /// Append all commands of `other` as further sub-paths.
    pub fn extend(&mut self, other: Path) -> &mut Self {
        self.commands.extend(other.commands);
        self
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of sub-paths (one per absolute move).
    pub fn subpath_count(&self) -> usize {
        self.commands.iter().filter(|c| matches!(c, Command::MoveTo(_))).count()
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(Command::Close))
    }

    /// Absolute end point of every command, resolving relative commands
    /// against the running pen position. Control points are not included.
    pub fn anchors(&self) -> Vec<Point> {
        let mut anchors = Vec::with_capacity(self.commands.len());
        let mut pen = Point::ZERO;
        let mut start = Point::ZERO;

        for command in &self.commands {
            match *command {
                Command::MoveTo(p) => {
                    pen = p;
                    start = p;
                }
                Command::MoveBy(dx, dy) => {
                    pen += Point::new(dx, dy);
                    start = pen;
                }
                Command::LineTo(p)
                | Command::QuadTo(_, p)
                | Command::SmoothQuadTo(p)
                | Command::CubicTo(_, _, p) => pen = p,
                Command::HorizontalBy(dx) => pen.x += dx,
                Command::VerticalBy(dy) => pen.y += dy,
                Command::ArcBy { dx, dy, .. } => pen += Point::new(dx, dy),
                Command::Close => pen = start,
            }
            anchors.push(pen);
        }

        anchors
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{command}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_data() {
        let dot = Path::circle(Point::new(10.0, 20.0), 1.5);
        assert_eq!(
            dot.to_string(),
            "M 10,20 m -1.5,0 a 1.5,1.5 0 1,0 3,0 a 1.5,1.5 0 1,0 -3,0"
        );
    }

    #[test]
    fn test_polygon_closes() {
        let path = Path::polygon(&[Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(0.0, 1.0)]);
        assert_eq!(path.to_string(), "M 0,0 L 1,0 L 0,1 Z");
        assert!(path.is_closed());
    }

    #[test]
    fn test_empty_polygon() {
        assert!(Path::polygon(&[]).is_empty());
    }

    #[test]
    fn test_relative_rectangle() {
        let mut path = Path::starting_at(Point::new(2.0, 3.0));
        path.horizontal_by(4.0).vertical_by(1.0).horizontal_by(-4.0).close();
        assert_eq!(path.to_string(), "M 2,3 h 4 v 1 h -4 Z");

        let anchors = path.anchors();
        assert_eq!(anchors[1], Point::new(6.0, 3.0));
        assert_eq!(anchors[2], Point::new(6.0, 4.0));
        assert_eq!(anchors[4], Point::new(2.0, 3.0));
    }

    #[test]
    fn test_extend_counts_subpaths() {
        let mut path = Path::polygon(&[Point::ZERO, Point::new(1.0, 1.0)]);
        path.extend(Path::circle(Point::ZERO, 1.0));
        assert_eq!(path.subpath_count(), 2);
    }

    #[test]
    fn test_circle_anchors_return_to_left_edge() {
        let anchors = Path::circle(Point::new(5.0, 5.0), 2.0).anchors();
        assert_eq!(anchors.last().copied(), Some(Point::new(3.0, 5.0)));
    }
}
