pub type Coordinate = (usize, usize);

/// One candidate cell of a single search run.
///
/// `parent` indexes into the run's node pool (see
/// [`PathBuilder`](super::path_builder::PathBuilder)). Equality only looks at
/// `position`, so two nodes reaching the same cell at different costs
/// compare equal.
#[derive(Debug, Clone, Copy)]
pub struct SearchNode {
    position: Coordinate,
    parent: Option<usize>,
    g: usize,
    h: usize,
}

impl SearchNode {
    pub fn new(position: Coordinate, parent: Option<usize>, g: usize, h: usize) -> SearchNode {
        SearchNode {
            position,
            parent,
            g,
            h,
        }
    }

    pub fn get_position(&self) -> Coordinate {
        self.position
    }

    pub fn get_parent(&self) -> Option<usize> {
        self.parent
    }

    pub fn get_g(&self) -> usize {
        self.g
    }

    pub fn get_h(&self) -> usize {
        self.h
    }

    pub fn get_f(&self) -> usize {
        self.g + self.h
    }
}

impl PartialEq for SearchNode {
    fn eq(&self, other: &SearchNode) -> bool {
        self.position == other.position
    }
}

impl Eq for SearchNode {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_compares_by_position_only() {
        let cheap = SearchNode::new((2, 3), None, 1, 4);
        let dear = SearchNode::new((2, 3), Some(7), 9, 4);
        let elsewhere = SearchNode::new((3, 2), None, 1, 4);

        assert_eq!(cheap, dear);
        assert_ne!(cheap, elsewhere);
    }

    #[test]
    fn it_sums_f() {
        let node = SearchNode::new((0, 0), None, 3, 5);
        assert_eq!(node.get_f(), 8);
    }
}
