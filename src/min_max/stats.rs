pub trait Stats {
    /// Called once for every position the search evaluates. Root candidates are at depth 1.
    fn record_node(&mut self, depth: u8);
    fn record_prune(&mut self);
}

#[derive(Debug, Default)]
pub struct NullStats;

impl Stats for NullStats {
    fn record_node(&mut self, _depth: u8) {}
    fn record_prune(&mut self) {}
}

#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct SimpleStats {
    pub nodes: u64,
    pub prunes: u64,
    pub max_depth: u8,
}

impl Stats for SimpleStats {
    fn record_node(&mut self, depth: u8) {
        self.nodes += 1;
        self.max_depth = self.max_depth.max(depth);
    }

    fn record_prune(&mut self) {
        self.prunes += 1;
    }
}
