pub mod node;

pub use node::*;

impl node::QuadtreeNode {
	/// Counts every node in the tree, branches included.
	pub fn node_count(&self) -> usize {
		match self {
			Self::Leaf { .. } => 1,
			Self::Branch { sections, .. } => {
				1 + sections.iter().map(Self::node_count).sum::<usize>()
			}
		}
	}

	/// Counts the leaves of the tree; serialization writes one QT record
	/// per leaf, so this is also the record count of the encoded output.
	pub fn leaf_count(&self) -> usize {
		match self {
			Self::Leaf { .. } => 1,
			Self::Branch { sections, .. } => sections.iter().map(Self::leaf_count).sum(),
		}
	}
}
