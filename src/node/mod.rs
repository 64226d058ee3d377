pub mod error;

/// Color of a single pixel: red, green and blue, eight bits each.
pub type Color = image::Rgb<u8>;

/// Axis-aligned rectangular region of a pixel grid.
///
/// Half-open on both axes: the region covers rows `start_row..end_row`
/// and columns `start_col..end_col` of the grid it was built over. A
/// well-formed bound has a start strictly before its end on both axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bound {
	pub start_row: u32,
	pub start_col: u32,
	pub end_row: u32,
	pub end_col: u32,
}

impl Bound {
	/// Makes a bound from its four coordinates, in the order the QT
	/// records list them.
	pub fn new(start_row: u32, start_col: u32, end_row: u32, end_col: u32) -> Self {
		Bound { start_row, start_col, end_row, end_col }
	}

	/// The bound covering a whole grid of the given dimensions.
	pub fn full(height: u32, width: u32) -> Self {
		Bound::new(0, 0, height, width)
	}

	/// Number of rows the bound covers.
	pub fn height(&self) -> u32 {
		self.end_row - self.start_row
	}

	/// Number of columns the bound covers.
	pub fn width(&self) -> u32 {
		self.end_col - self.start_col
	}

	/// Whether the bound describes a single cell.
	pub fn is_cell(&self) -> bool {
		self.height() == 1 && self.width() == 1
	}

	/// Splits the bound at its midpoint into four quadrants, in
	/// top-left, top-right, bottom-left, bottom-right order.
	///
	/// The quadrants tile the bound exactly, with no gaps or overlaps.
	pub fn quadrants(&self) -> [Bound; 4] {
		let mid_row = (self.start_row + self.end_row) / 2;
		let mid_col = (self.start_col + self.end_col) / 2;
		[
			Bound::new(self.start_row, self.start_col, mid_row, mid_col),
			Bound::new(self.start_row, mid_col, mid_row, self.end_col),
			Bound::new(mid_row, self.start_col, self.end_row, mid_col),
			Bound::new(mid_row, mid_col, self.end_row, self.end_col),
		]
	}
}

/// Node in a quadtree covering a rectangular region of an image.
///
/// Either a leaf, whose whole region is one color, or a branch with
/// exactly four subnodes (one per quadrant of its region). Every node
/// carries the bound it covers in the source grid's coordinates, so
/// a leaf can be written out without retracing the path that led to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuadtreeNode {
	/// Region whose pixels all share one color.
	Leaf { bound: Bound, color: Color },
	/// Subdivided region; `sections` holds the subtrees for the four
	/// quadrants of `bound`, in the order `Bound::quadrants` yields them.
	Branch { bound: Bound, sections: Box<[QuadtreeNode; 4]> },
}

impl QuadtreeNode {
	/// Builds a quadtree over the region `bound` of `grid`.
	///
	/// Quadrants whose pixels all share one color become single leaves;
	/// mixed regions are split at their midpoint into four quadrants,
	/// recursively, down to single cells. Sibling leaves of equal color
	/// are collapsed on the way back up, so a uniform region is always
	/// represented by its largest possible leaf.
	///
	/// The region must be square with a power-of-two side length; other
	/// shapes would not split evenly into cells and are rejected, as are
	/// empty grids, empty regions, and regions reaching outside the grid.
	pub fn build(grid: &image::RgbImage, bound: Bound) -> Result<Self, error::BuildError> {
		if grid.width() == 0 || grid.height() == 0 {
			return Err(error::BuildError::EmptyGrid);
		}
		if bound.end_row <= bound.start_row || bound.end_col <= bound.start_col {
			return Err(error::BuildError::EmptyBound);
		}
		if bound.end_row > grid.height() || bound.end_col > grid.width() {
			return Err(error::BuildError::OutOfGrid);
		}
		if bound.height() != bound.width() || !bound.width().is_power_of_two() {
			return Err(error::BuildError::NotBisectable);
		}
		Ok(Self::build_section(grid, bound))
	}

	fn build_section(grid: &image::RgbImage, bound: Bound) -> Self {
		if bound.is_cell() {
			return QuadtreeNode::Leaf {
				color: *grid.get_pixel(bound.start_col, bound.start_row),
				bound,
			};
		}
		let sections = Box::new(bound.quadrants().map(|q| Self::build_section(grid, q)));
		match uniform_color(&sections) {
			Some(color) => QuadtreeNode::Leaf { bound, color },
			None => QuadtreeNode::Branch { bound, sections },
		}
	}

	/// The region of the source grid this node covers.
	pub fn bound(&self) -> Bound {
		match self {
			QuadtreeNode::Leaf { bound, .. } | QuadtreeNode::Branch { bound, .. } => *bound,
		}
	}
}

/// The one color shared by four sections, if all four are leaves and
/// agree on it exactly.
fn uniform_color(sections: &[QuadtreeNode; 4]) -> Option<Color> {
	match sections {
		[QuadtreeNode::Leaf { color: c0, .. },
		 QuadtreeNode::Leaf { color: c1, .. },
		 QuadtreeNode::Leaf { color: c2, .. },
		 QuadtreeNode::Leaf { color: c3, .. }]
			if c0 == c1 && c0 == c2 && c0 == c3 => Some(*c0),
		_ => None,
	}
}

pub mod qt;
