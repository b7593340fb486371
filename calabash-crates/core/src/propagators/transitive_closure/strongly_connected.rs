//! Tarjan's algorithm for strongly connected components, without recursion.

const UNVISITED: usize = usize::MAX;

/// The strongly connected components of a directed graph over the nodes `0..n`.
///
/// The components are stored in the order in which Tarjan's algorithm completes them: every
/// component is completed after all components reachable from it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct StronglyConnectedComponents {
    component_of: Vec<usize>,
    components: Vec<Vec<usize>>,
}

impl StronglyConnectedComponents {
    /// Computes the components of the graph with an edge `i → j` for every `j` in
    /// `successors[i]`. Every successor has to be a node of the graph.
    pub(crate) fn new(successors: &[Vec<usize>]) -> Self {
        let num_nodes = successors.len();

        let mut index = vec![UNVISITED; num_nodes];
        let mut low_link = vec![0; num_nodes];
        let mut on_stack = vec![false; num_nodes];
        let mut next_index = 0;

        let mut stack = Vec::with_capacity(num_nodes);
        // The nodes currently being visited, with the position of the next successor to explore.
        let mut work: Vec<(usize, usize)> = Vec::with_capacity(num_nodes);

        let mut component_of = vec![UNVISITED; num_nodes];
        let mut components = vec![];

        for root in 0..num_nodes {
            if index[root] != UNVISITED {
                continue;
            }

            index[root] = next_index;
            low_link[root] = next_index;
            next_index += 1;
            stack.push(root);
            on_stack[root] = true;
            work.push((root, 0));

            while let Some((node, position)) = work.last_mut() {
                let node = *node;

                if let Some(&successor) = successors[node].get(*position) {
                    *position += 1;

                    if index[successor] == UNVISITED {
                        index[successor] = next_index;
                        low_link[successor] = next_index;
                        next_index += 1;
                        stack.push(successor);
                        on_stack[successor] = true;
                        work.push((successor, 0));
                    } else if on_stack[successor] {
                        low_link[node] = low_link[node].min(index[successor]);
                    }

                    continue;
                }

                let _ = work.pop();
                if let Some(&(parent, _)) = work.last() {
                    low_link[parent] = low_link[parent].min(low_link[node]);
                }

                if low_link[node] == index[node] {
                    let component_index = components.len();
                    let mut members = vec![];

                    while let Some(member) = stack.pop() {
                        on_stack[member] = false;
                        component_of[member] = component_index;
                        members.push(member);

                        if member == node {
                            break;
                        }
                    }

                    components.push(members);
                }
            }
        }

        StronglyConnectedComponents {
            component_of,
            components,
        }
    }

    /// The components in completion order.
    pub(crate) fn components(&self) -> &[Vec<usize>] {
        &self.components
    }

    /// The index (in [`Self::components`]) of the component containing `node`.
    pub(crate) fn component_of(&self, node: usize) -> usize {
        self.component_of[node]
    }
}
