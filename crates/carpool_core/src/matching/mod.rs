pub mod algorithm;
pub mod greedy;
pub mod static_merge;
pub mod types;

pub use algorithm::{build_algorithm, AlgorithmKind, GroupingAlgorithm};
pub use greedy::GreedyMatching;
pub use static_merge::StaticMatching;
pub use types::{JoinCandidate, MergeCandidate};
