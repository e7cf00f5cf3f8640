use std::collections::{HashMap, VecDeque};

use crate::grid::Coord;

use super::comparators::Comparator;

/// The set of discovered-but-not-yet-expanded coordinates.
///
/// One type with three orderings behind the uniform `add` / `remove` /
/// `is_empty` capability set: FIFO for breadth-first, LIFO for depth-first,
/// and comparator-ordered for everything else.
#[derive(Debug, Clone)]
pub enum Frontier {
    Queue(VecDeque<Coord>),
    Stack(Vec<Coord>),
    Priority {
        items: Vec<Coord>,
        comparator: Comparator,
    },
}

impl Frontier {
    pub fn queue() -> Self {
        Frontier::Queue(VecDeque::new())
    }

    pub fn stack() -> Self {
        Frontier::Stack(Vec::new())
    }

    pub fn priority(comparator: Comparator) -> Self {
        Frontier::Priority {
            items: Vec::new(),
            comparator,
        }
    }

    pub fn add(&mut self, coord: Coord) {
        match self {
            Frontier::Queue(queue) => queue.push_back(coord),
            Frontier::Stack(stack) => stack.push(coord),
            Frontier::Priority { items, .. } => items.push(coord),
        }
    }

    /// Removes the next coordinate according to this frontier's ordering.
    ///
    /// The priority variant does a linear selection scan for the element the
    /// comparator ranks pop-first rather than sorting: the random comparator
    /// does not define a total order, and `slice::sort_by` is allowed to
    /// panic on such comparators while a pairwise scan is not.
    ///
    /// # Panics
    /// If the frontier is empty. The engine checks [`Frontier::is_empty`]
    /// before every removal, so an empty removal is an invariant violation.
    pub fn remove(&mut self, distances: &HashMap<Coord, u32>) -> Coord {
        match self {
            Frontier::Queue(queue) => queue.pop_front().expect("remove from empty frontier"),
            Frontier::Stack(stack) => stack.pop().expect("remove from empty frontier"),
            Frontier::Priority { items, comparator } => {
                assert!(!items.is_empty(), "remove from empty frontier");
                let mut best = 0;
                for i in 1..items.len() {
                    if comparator.compare(items[i], items[best], distances) > 0.0 {
                        best = i;
                    }
                }
                // Shift-remove keeps insertion order among the remaining
                // items, so ties keep resolving the same way.
                items.remove(best)
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Frontier::Queue(queue) => queue.is_empty(),
            Frontier::Stack(stack) => stack.is_empty(),
            Frontier::Priority { items, .. } => items.is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::Heuristic;

    #[test]
    fn test_queue_is_fifo() {
        let distances = HashMap::new();
        let mut frontier = Frontier::queue();
        frontier.add((0, 0));
        frontier.add((0, 1));
        frontier.add((0, 2));
        assert_eq!(frontier.remove(&distances), (0, 0));
        assert_eq!(frontier.remove(&distances), (0, 1));
        assert_eq!(frontier.remove(&distances), (0, 2));
        assert!(frontier.is_empty());
    }

    #[test]
    fn test_stack_is_lifo() {
        let distances = HashMap::new();
        let mut frontier = Frontier::stack();
        frontier.add((0, 0));
        frontier.add((0, 1));
        frontier.add((0, 2));
        assert_eq!(frontier.remove(&distances), (0, 2));
        assert_eq!(frontier.remove(&distances), (0, 1));
        assert_eq!(frontier.remove(&distances), (0, 0));
    }

    #[test]
    fn test_priority_pops_closest_to_goal() {
        let distances = HashMap::new();
        let mut frontier = Frontier::priority(Comparator::heuristic(Heuristic::Manhattan, (0, 0)));
        frontier.add((0, 5));
        frontier.add((0, 1));
        frontier.add((0, 3));
        assert_eq!(frontier.remove(&distances), (0, 1));
        assert_eq!(frontier.remove(&distances), (0, 3));
        assert_eq!(frontier.remove(&distances), (0, 5));
    }

    #[test]
    fn test_priority_pops_smallest_distance() {
        let mut distances = HashMap::new();
        distances.insert((1, 0), 4);
        distances.insert((2, 0), 1);
        distances.insert((3, 0), 9);
        let mut frontier = Frontier::priority(Comparator::Dijkstra);
        frontier.add((1, 0));
        frontier.add((2, 0));
        frontier.add((3, 0));
        assert_eq!(frontier.remove(&distances), (2, 0));
        assert_eq!(frontier.remove(&distances), (1, 0));
        assert_eq!(frontier.remove(&distances), (3, 0));
    }

    #[test]
    fn test_random_priority_drains_every_item() {
        let distances = HashMap::new();
        let mut frontier = Frontier::priority(Comparator::Random);
        for col in 0..16 {
            frontier.add((0, col));
        }
        let mut drained = Vec::new();
        while !frontier.is_empty() {
            drained.push(frontier.remove(&distances));
        }
        drained.sort_unstable();
        assert_eq!(drained, (0..16).map(|col| (0, col)).collect::<Vec<_>>());
    }

    #[test]
    #[should_panic(expected = "remove from empty frontier")]
    fn test_empty_removal_panics() {
        let distances = HashMap::new();
        let mut frontier = Frontier::queue();
        frontier.remove(&distances);
    }
}
