/// Reason why a quadtree couldn't be built over a region of a pixel grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuildError {
	/// The grid has zero height or zero width.
	EmptyGrid,
	/// The region's start does not sit strictly before its end on both axes.
	EmptyBound,
	/// The region reaches past the edge of the grid.
	OutOfGrid,
	/// The region would not split evenly into single cells; only square
	/// regions with a power-of-two side length do.
	NotBisectable,
}

impl std::fmt::Display for BuildError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::EmptyGrid => write!(f, "Grid has zero height or width"),
			Self::EmptyBound => write!(f, "Region is empty"),
			Self::OutOfGrid => write!(f, "Region reaches past the edge of the grid"),
			Self::NotBisectable => {
				write!(f, "Region must be square with a power-of-two side length to split evenly into cells")
			}
		}
	}
}

impl std::error::Error for BuildError {}

#[cfg(test)]
mod test {
	use super::BuildError;

	#[test]
	fn messages_name_the_cause() {
		assert_eq!(BuildError::EmptyGrid.to_string(), "Grid has zero height or width");
		assert!(BuildError::NotBisectable.to_string().contains("power-of-two"));
	}
}
