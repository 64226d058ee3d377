use std::collections::VecDeque;
use std::io::{self, Write};

use super::QuadtreeNode;

impl QuadtreeNode {
	/// Writes the tree to `sink` in the QT leaf-list format.
	///
	/// The format is plain text: a header line carrying the image's
	/// height and width, then one line per leaf giving its bound's four
	/// coordinates and its color's three channels,
	/// `start_row start_col end_row end_col R G B`. Branches contribute
	/// nothing but their subtrees, so the leaf lines alone cover every
	/// pixel of the image exactly once.
	///
	/// Leaves are visited breadth-first: records appear shallowest (and
	/// so largest) first and in quadrant order within a depth. Any error
	/// from the sink aborts the walk; whatever was already written stays
	/// behind, and the caller should treat such output as incomplete.
	pub fn write_qt(&self, height: u32, width: u32, mut sink: impl Write) -> io::Result<()> {
		writeln!(sink, "{} {}", height, width)?;
		let mut pending = VecDeque::new();
		pending.push_back(self);
		while let Some(node) = pending.pop_front() {
			match node {
				QuadtreeNode::Leaf { bound, color } => {
					writeln!(
						sink,
						"{} {} {} {} {} {} {}",
						bound.start_row, bound.start_col,
						bound.end_row, bound.end_col,
						color.0[0], color.0[1], color.0[2]
					)?;
				}
				QuadtreeNode::Branch { sections, .. } => {
					pending.extend(sections.iter());
				}
			}
		}
		Ok(())
	}

	/// Encodes the tree into QT data held in memory.
	pub fn to_qt(&self, height: u32, width: u32) -> Vec<u8> {
		let mut ret = Vec::new();
		self.write_qt(height, width, &mut ret).expect("writes to a Vec do not fail");
		ret
	}
}

#[cfg(test)]
mod test {
	use image::{Rgb, RgbImage};
	use unindent::unindent;

	use crate::{Bound, QuadtreeNode};

	fn build_full(grid: &RgbImage) -> QuadtreeNode {
		QuadtreeNode::build(grid, Bound::full(grid.height(), grid.width())).expect("valid grid")
	}

	fn assert_qt(tree: &QuadtreeNode, height: u32, width: u32, expected: &str) {
		let data = String::from_utf8(tree.to_qt(height, width)).expect("valid string");
		assert_eq!(data, unindent(expected));
	}

	#[test]
	fn uniform_grid_is_header_and_one_record() {
		let grid = RgbImage::from_pixel(2, 2, Rgb([10, 20, 30]));
		let tree = build_full(&grid);
		assert_qt(&tree, 2, 2, "
            2 2
            0 0 2 2 10 20 30
        ");
	}

	#[test]
	fn unit_cells_come_out_in_quadrant_order() {
		let grid = RgbImage::from_fn(2, 2, |x, y| {
			if (x, y) == (1, 0) { Rgb([255, 255, 255]) } else { Rgb([0, 0, 0]) }
		});
		let tree = build_full(&grid);
		assert_qt(&tree, 2, 2, "
            2 2
            0 0 1 1 0 0 0
            0 1 1 2 255 255 255
            1 0 2 1 0 0 0
            1 1 2 2 0 0 0
        ");
	}

	#[test]
	fn quartered_grid_writes_four_records() {
		let grid = RgbImage::from_fn(4, 4, |x, y| match (y < 2, x < 2) {
			(true, true) => Rgb([10, 0, 0]),
			(true, false) => Rgb([0, 20, 0]),
			(false, true) => Rgb([0, 0, 30]),
			(false, false) => Rgb([40, 40, 40]),
		});
		let tree = build_full(&grid);
		assert_qt(&tree, 4, 4, "
            4 4
            0 0 2 2 10 0 0
            0 2 2 4 0 20 0
            2 0 4 2 0 0 30
            2 2 4 4 40 40 40
        ");
	}

	/// Top-left quadrant is a checkerboard, the rest is uniform, so the
	/// walk has both depths to order.
	fn mixed_depth_grid() -> RgbImage {
		RgbImage::from_fn(4, 4, |x, y| match (y < 2, x < 2) {
			(true, true) => {
				if (x + y) % 2 == 0 { Rgb([1, 1, 1]) } else { Rgb([2, 2, 2]) }
			}
			(true, false) => Rgb([0, 20, 0]),
			(false, true) => Rgb([0, 0, 30]),
			(false, false) => Rgb([40, 40, 40]),
		})
	}

	#[test]
	fn shallow_leaves_lead_deeper_ones() {
		let tree = build_full(&mixed_depth_grid());
		assert_qt(&tree, 4, 4, "
            4 4
            0 2 2 4 0 20 0
            2 0 4 2 0 0 30
            2 2 4 4 40 40 40
            0 0 1 1 1 1 1
            0 1 1 2 2 2 2
            1 0 2 1 2 2 2
            1 1 2 2 1 1 1
        ");
	}

	#[test]
	fn rewriting_is_byte_identical() {
		let tree = build_full(&mixed_depth_grid());
		assert_eq!(tree.to_qt(4, 4), tree.to_qt(4, 4));
	}
}
