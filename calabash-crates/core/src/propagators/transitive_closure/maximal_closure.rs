use super::strongly_connected::StronglyConnectedComponents;

/// The transitive closure of a directed graph over the nodes `0..n`, i.e. for every node the set
/// of nodes reachable through at least one edge.
///
/// All nodes of a strongly connected component reach the same nodes, so the reachable sets are
/// stored once per component.
#[derive(Clone, Debug)]
pub(crate) struct MaximalClosure {
    components: StronglyConnectedComponents,
    /// For every component, in completion order, a dense membership vector over the nodes.
    reachable: Vec<Vec<bool>>,
}

impl MaximalClosure {
    /// Every successor has to be a node of the graph.
    pub(crate) fn new(successors: &[Vec<usize>]) -> Self {
        let num_nodes = successors.len();
        let components = StronglyConnectedComponents::new(successors);

        let mut reachable: Vec<Vec<bool>> = Vec::with_capacity(components.components().len());
        for (component_index, members) in components.components().iter().enumerate() {
            let mut reached = vec![false; num_nodes];

            for &member in members {
                for &successor in &successors[member] {
                    reached[successor] = true;

                    // Components reachable from this one have been completed before it.
                    let successor_component = components.component_of(successor);
                    if successor_component != component_index {
                        reached
                            .iter_mut()
                            .zip(&reachable[successor_component])
                            .for_each(|(is_reached, &by_successor)| *is_reached |= by_successor);
                    }
                }
            }

            reachable.push(reached);
        }

        MaximalClosure {
            components,
            reachable,
        }
    }

    /// Returns whether `to` can be reached from `from` through at least one edge.
    pub(crate) fn reaches(&self, from: usize, to: usize) -> bool {
        self.reachable[self.components.component_of(from)]
            .get(to)
            .copied()
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_reaches_every_member() {
        let closure = MaximalClosure::new(&[vec![1], vec![2], vec![0]]);

        for from in 0..3 {
            for to in 0..3 {
                assert!(closure.reaches(from, to));
            }
        }
    }

    #[test]
    fn node_without_cycle_does_not_reach_itself() {
        // 0 → 1 → 2, 2 → 2
        let closure = MaximalClosure::new(&[vec![1], vec![2], vec![2]]);

        assert!(!closure.reaches(0, 0));
        assert!(!closure.reaches(1, 1));
        assert!(closure.reaches(2, 2));
        assert!(closure.reaches(0, 2));
        assert!(!closure.reaches(2, 0));
    }

    #[test]
    fn reachability_is_inherited_from_successor_components() {
        // 0 → 1 ⇄ 2 → 3, 4 isolated
        let closure = MaximalClosure::new(&[vec![1], vec![2], vec![1, 3], vec![], vec![]]);

        assert!(closure.reaches(0, 3));
        assert!(closure.reaches(0, 1));
        assert!(closure.reaches(1, 1));
        assert!(!closure.reaches(3, 3));
        assert!(!closure.reaches(0, 4));
        assert!(!closure.reaches(4, 4));
        assert!(!closure.reaches(1, 7));
    }
}
