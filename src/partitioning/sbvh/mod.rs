pub use sbvh_options::{CostHeuristic, SbvhOptions};
pub use sbvh_tree::{Sbvh, SbvhBuildStats, SbvhNode, SbvhReference};

mod sbvh_build;
mod sbvh_cost;
mod sbvh_object_split;
mod sbvh_options;
mod sbvh_queries;
mod sbvh_spatial_split;
mod sbvh_tree;
mod sbvh_validation;
