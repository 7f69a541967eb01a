pub use wide_bvh_dyn::{DynWideBvh, SimdWidth};
pub use wide_bvh_tree::{WideBuildStats, WideBvh, WideChild, WideLeaf, WideNode};

mod wide_bvh_build;
mod wide_bvh_dyn;
mod wide_bvh_traverse;
mod wide_bvh_tree;
mod wide_bvh_validation;
