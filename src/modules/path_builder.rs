use super::node::{Coordinate, SearchNode};

/// Node pool of a single search run.
///
/// Nodes are only ever appended, and a node's parent is always pushed before
/// it, so following parents from any node reaches the root.
pub struct PathBuilder {
    nodes: Vec<SearchNode>,
}

impl PathBuilder {
    pub fn new() -> PathBuilder {
        PathBuilder { nodes: Vec::new() }
    }

    pub fn push(&mut self, node: SearchNode) -> usize {
        debug_assert!(node.get_parent().map_or(true, |p| p < self.nodes.len()));
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    pub fn get(&self, index: usize) -> &SearchNode {
        &self.nodes[index]
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Walks parents from `goal` back to the root and returns the cells in
    /// start-to-goal order.
    pub fn build(&self, goal: usize) -> Vec<Coordinate> {
        let mut output: Vec<Coordinate> = Vec::new();
        let mut current = Some(goal);

        while let Some(index) = current {
            let node = &self.nodes[index];
            output.push(node.get_position());
            current = node.get_parent();
        }

        output.reverse();
        output
    }
}

impl Default for PathBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_builds_path() {
        let mut builder = PathBuilder::new();
        let a = builder.push(SearchNode::new((1, 1), None, 0, 2));
        let b = builder.push(SearchNode::new((1, 2), Some(a), 1, 1));
        // dead branch
        builder.push(SearchNode::new((0, 1), Some(a), 1, 3));
        let c = builder.push(SearchNode::new((2, 2), Some(b), 2, 0));

        assert_eq!(builder.build(c), vec![(1, 1), (1, 2), (2, 2)]);
        assert_eq!(builder.len(), 4);
    }

    #[test]
    fn it_builds_single_cell_path() {
        let mut builder = PathBuilder::new();
        let root = builder.push(SearchNode::new((0, 0), None, 0, 0));

        assert_eq!(builder.build(root), vec![(0, 0)]);
    }
}
