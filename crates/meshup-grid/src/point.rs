/// A 2-component displacement point.
///
/// An immutable value type holding the (x, y) displacement stored in one
/// grid cell. The cell's lattice position is implicit in the grid layout;
/// the point carries no index of its own.
///
/// # Examples
///
/// ```
/// use meshup_grid::Point2;
///
/// let p = Point2::new(1.5, -2.0);
/// assert_eq!(p.x, 1.5);
/// assert_eq!(p.y, -2.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point2 {
    /// Displacement along the x axis.
    pub x: f64,
    /// Displacement along the y axis.
    pub y: f64,
}

impl Point2 {
    /// Create a new point from its two components.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Point2 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
