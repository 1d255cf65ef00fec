use crate::error::GridError;
use crate::point::Point2;

/// Grid size in cells
///
/// A struct to represent the size of a grid in cells.
///
/// # Examples
///
/// ```
/// use meshup_grid::GridSize;
///
/// let grid_size = GridSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(grid_size.width, 10);
/// assert_eq!(grid_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridSize {
    /// Width of the grid in cells
    pub width: usize,
    /// Height of the grid in cells
    pub height: usize,
}

impl std::fmt::Display for GridSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "GridSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for GridSize {
    fn from(size: [usize; 2]) -> Self {
        GridSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// Represents a rectangular grid of displacement points.
///
/// The grid is stored row-major as a flat buffer of [`Point2`] with shape
/// (height, width). Shape is validated at construction and fixed for the
/// lifetime of the grid; transformations produce new grids.
#[derive(Clone, Debug, PartialEq)]
pub struct PointGrid {
    size: GridSize,
    data: Vec<Point2>,
}

impl PointGrid {
    /// Create a new grid from row-major point data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the grid in cells.
    /// * `data` - The point data of the grid, row-major.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::EmptyGrid`] if either dimension is zero, or
    /// [`GridError::InvalidLength`] if the data length does not match the
    /// grid size.
    ///
    /// # Examples
    ///
    /// ```
    /// use meshup_grid::{GridSize, Point2, PointGrid};
    ///
    /// let grid = PointGrid::new(
    ///     GridSize {
    ///         width: 2,
    ///         height: 2,
    ///     },
    ///     vec![Point2::default(); 4],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(grid.width(), 2);
    /// assert_eq!(grid.height(), 2);
    /// ```
    pub fn new(size: GridSize, data: Vec<Point2>) -> Result<Self, GridError> {
        if size.width == 0 || size.height == 0 {
            return Err(GridError::EmptyGrid);
        }

        let expected = size.width * size.height;
        if data.len() != expected {
            return Err(GridError::InvalidLength {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self { size, data })
    }

    /// Create a new grid with the given size, filled with one value.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::EmptyGrid`] if either dimension is zero.
    pub fn from_size_val(size: GridSize, val: Point2) -> Result<Self, GridError> {
        let data = vec![val; size.width * size.height];
        PointGrid::new(size, data)
    }

    /// Create a new grid from nested rows of points.
    ///
    /// The first row fixes the expected width.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::EmptyGrid`] if there are no rows or the first
    /// row is empty, or [`GridError::RaggedRows`] if any later row has a
    /// different length.
    ///
    /// # Examples
    ///
    /// ```
    /// use meshup_grid::{Point2, PointGrid};
    ///
    /// let grid = PointGrid::from_rows(vec![
    ///     vec![Point2::new(0.0, 0.0), Point2::new(10.0, 0.0)],
    ///     vec![Point2::new(0.0, 10.0), Point2::new(10.0, 10.0)],
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(grid.width(), 2);
    /// assert_eq!(grid.get(1, 1), Some(Point2::new(10.0, 10.0)));
    /// ```
    pub fn from_rows(rows: Vec<Vec<Point2>>) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.len());
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid);
        }

        let mut data = Vec::with_capacity(width * height);
        for (row_idx, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(GridError::RaggedRows {
                    row: row_idx,
                    expected: width,
                    actual: row.len(),
                });
            }
            data.extend(row);
        }

        Ok(Self {
            size: GridSize { width, height },
            data,
        })
    }

    /// Reshape two flattened coordinate sequences into a square grid.
    ///
    /// Consumes equal-length x and y coordinate lists of length
    /// `dimension * dimension` and pairs them row-major, the layout used by
    /// the geometry file format.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::FlattenLengthMismatch`] if the sequences differ
    /// in length, [`GridError::EmptyGrid`] if they are empty, or
    /// [`GridError::NotSquare`] if the length is not a perfect square.
    ///
    /// # Examples
    ///
    /// ```
    /// use meshup_grid::{Point2, PointGrid};
    ///
    /// let xs = [0.0, 10.0, 0.0, 10.0];
    /// let ys = [0.0, 0.0, 10.0, 10.0];
    ///
    /// let grid = PointGrid::from_flat_points(&xs, &ys).unwrap();
    ///
    /// assert_eq!(grid.width(), 2);
    /// assert_eq!(grid.height(), 2);
    /// assert_eq!(grid.get(1, 0), Some(Point2::new(10.0, 0.0)));
    /// ```
    pub fn from_flat_points(xs: &[f64], ys: &[f64]) -> Result<Self, GridError> {
        if xs.len() != ys.len() {
            return Err(GridError::FlattenLengthMismatch {
                xs: xs.len(),
                ys: ys.len(),
            });
        }
        if xs.is_empty() {
            return Err(GridError::EmptyGrid);
        }

        let dimension = (xs.len() as f64).sqrt().round() as usize;
        if dimension * dimension != xs.len() {
            return Err(GridError::NotSquare { len: xs.len() });
        }

        let data = xs
            .iter()
            .zip(ys.iter())
            .map(|(&x, &y)| Point2::new(x, y))
            .collect();

        PointGrid::new(
            GridSize {
                width: dimension,
                height: dimension,
            },
            data,
        )
    }

    /// Flatten the grid row-major into separate x and y sequences.
    ///
    /// This is the inverse of [`PointGrid::from_flat_points`] and feeds the
    /// geometry re-serialization path.
    pub fn to_flat_points(&self) -> (Vec<f64>, Vec<f64>) {
        let mut xs = Vec::with_capacity(self.data.len());
        let mut ys = Vec::with_capacity(self.data.len());
        self.for_each(|point, _, _| {
            xs.push(point.x);
            ys.push(point.y);
        });
        (xs, ys)
    }

    /// Flatten the grid row-major into normalized RGBA channel values.
    ///
    /// Each point contributes four channels: its x and y components mapped
    /// through `clamp(v / scale_divisor + 0.5, 0, 1)`, a zero channel, and
    /// an opaque alpha channel. The conventional divisor for displacement
    /// data is 500.
    ///
    /// # Examples
    ///
    /// ```
    /// use meshup_grid::{GridSize, Point2, PointGrid};
    ///
    /// let grid = PointGrid::from_size_val(
    ///     GridSize {
    ///         width: 1,
    ///         height: 1,
    ///     },
    ///     Point2::new(0.0, 250.0),
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(grid.to_normalized_channels(500.0), vec![0.5, 1.0, 0.0, 1.0]);
    /// ```
    pub fn to_normalized_channels(&self, scale_divisor: f64) -> Vec<f32> {
        let mut channels = Vec::with_capacity(self.data.len() * 4);
        self.for_each(|point, _, _| {
            channels.push((point.x / scale_divisor + 0.5).clamp(0.0, 1.0) as f32);
            channels.push((point.y / scale_divisor + 0.5).clamp(0.0, 1.0) as f32);
            channels.push(0.0);
            channels.push(1.0);
        });
        channels
    }

    /// Width of the grid in cells.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Height of the grid in cells.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Size of the grid in cells.
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Get the point at the given column and row, if in bounds.
    pub fn get(&self, col: usize, row: usize) -> Option<Point2> {
        if col >= self.size.width || row >= self.size.height {
            return None;
        }
        Some(self.data[row * self.size.width + col])
    }

    /// The underlying row-major point buffer.
    pub fn as_slice(&self) -> &[Point2] {
        &self.data
    }

    /// Produce a new grid of identical shape by applying `f` to every cell.
    ///
    /// The closure receives each point together with its (column, row)
    /// index. The input grid is not modified.
    ///
    /// # Examples
    ///
    /// ```
    /// use meshup_grid::{GridSize, Point2, PointGrid};
    ///
    /// let grid = PointGrid::from_size_val(
    ///     GridSize {
    ///         width: 2,
    ///         height: 2,
    ///     },
    ///     Point2::new(1.0, 2.0),
    /// )
    /// .unwrap();
    ///
    /// let doubled = grid.map(|p, _, _| Point2::new(p.x * 2.0, p.y * 2.0));
    ///
    /// assert_eq!(doubled.get(0, 0), Some(Point2::new(2.0, 4.0)));
    /// assert_eq!(grid.get(0, 0), Some(Point2::new(1.0, 2.0)));
    /// ```
    pub fn map<F>(&self, mut f: F) -> PointGrid
    where
        F: FnMut(Point2, usize, usize) -> Point2,
    {
        let data = self
            .data
            .iter()
            .enumerate()
            .map(|(idx, &point)| f(point, idx % self.size.width, idx / self.size.width))
            .collect();

        Self {
            size: self.size,
            data,
        }
    }

    /// Visit every cell in row-major order (row 0 first, columns left to
    /// right).
    ///
    /// Consumers rely on this order to reconstruct flattened coordinate
    /// lists.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(Point2, usize, usize),
    {
        for (idx, &point) in self.data.iter().enumerate() {
            f(point, idx % self.size.width, idx / self.size.width);
        }
    }
}
