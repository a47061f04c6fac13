/// A candidate merge of two groups considered by static matching.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MergeCandidate {
    /// Index of the group that absorbs the other; always below `second`.
    pub first: usize,
    pub second: usize,
    pub cost_increase: f64,
}

/// The cheapest existing group for an incoming route in greedy matching.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JoinCandidate {
    pub group_index: usize,
    pub delta_cost: f64,
}
