/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{SccError, Sccs};
use crate::graph::Digraph;
use dsi_progress_logger::ProgressLog;
use sux::bits::BitVec;

/// Tarjan's algorithm for strongly connected components.
///
/// This is [`tarjan_visit`] with a visitor that does nothing.
pub fn tarjan(graph: impl Digraph, pl: &mut impl ProgressLog) -> Result<Sccs, SccError> {
    tarjan_visit(graph, |_| {}, pl)
}

/// Tarjan's algorithm for strongly connected components, invoking a visitor
/// on each component.
///
/// Components are numbered, and passed to `visit`, in reverse topological
/// order of the component graph: when a component is closed, all components
/// it has arcs to have been closed already. The visitor receives the nodes of
/// the component in the order they were popped from the component stack, so
/// the root of the visit tree of the component comes last.
///
/// The visit is iterative, so its depth is not limited by the size of the
/// call stack.
///
/// # Errors
///
/// If some successor is not smaller than the number of nodes, the
/// computation stops with [`SccError::SuccessorOutOfBounds`]. Components
/// passed to `visit` before the error must not be considered valid.
///
/// # Examples
/// ```
/// use dsi_progress_logger::no_logging;
/// use tarjan_sccs::sccs::*;
///
/// let graph: Vec<Vec<usize>> = vec![vec![1], vec![2], vec![]];
/// let mut order = vec![];
/// let sccs = tarjan_visit(&graph, |c| order.push(c.to_vec()), no_logging![]).unwrap();
///
/// assert_eq!(order, vec![vec![2], vec![1], vec![0]]);
/// assert_eq!(sccs.components(), &[2, 1, 0]);
/// ```
pub fn tarjan_visit(
    graph: impl Digraph,
    visit: impl FnMut(&[usize]),
    pl: &mut impl ProgressLog,
) -> Result<Sccs, SccError> {
    let num_nodes = graph.num_nodes();
    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.start("Computing strongly connected components...");

    let mut state = State::new(num_nodes, visit);
    for root in 0..num_nodes {
        if !state.known.get(root) {
            state.visit_from(&graph, root, pl)?;
        }
    }

    pl.done();
    Ok(Sccs::new(state.number_of_components, state.components))
}

/// The working set of a single invocation.
struct State<F> {
    /// Nodes discovered by the visit.
    known: BitVec,
    /// Nodes whose component has been closed.
    emitted: BitVec,
    /// The discovery time of each node on the visit path, replaced by its
    /// low link at postvisit.
    link: Box<[usize]>,
    components: Box<[usize]>,
    /// Nodes discovered whose component has not been closed yet.
    component_stack: Vec<usize>,
    /// The component being closed, passed to the visitor.
    buffer: Vec<usize>,
    time: usize,
    number_of_components: usize,
    visit: F,
}

impl<F: FnMut(&[usize])> State<F> {
    fn new(num_nodes: usize, visit: F) -> Self {
        Self {
            known: BitVec::new(num_nodes),
            emitted: BitVec::new(num_nodes),
            link: vec![0; num_nodes].into_boxed_slice(),
            components: vec![0; num_nodes].into_boxed_slice(),
            component_stack: Vec::with_capacity(16),
            buffer: Vec::with_capacity(16),
            time: 0,
            number_of_components: 0,
            visit,
        }
    }

    /// Marks `node` as discovered and returns its discovery time.
    #[inline(always)]
    fn previsit(&mut self, node: usize) -> usize {
        self.time += 1;
        self.known.set(node, true);
        self.link[node] = self.time;
        self.component_stack.push(node);
        self.time
    }

    /// Completes the visit of `node`, whose successors have all been
    /// enumerated, closing its component if `node` is a root.
    fn postvisit(&mut self, node: usize, low_link: usize) {
        if low_link == self.link[node] {
            while let Some(comp_node) = self.component_stack.pop() {
                self.emitted.set(comp_node, true);
                self.components[comp_node] = self.number_of_components;
                self.buffer.push(comp_node);
                if comp_node == node {
                    break;
                }
            }
            (self.visit)(self.buffer.as_slice());
            self.buffer.clear();
            self.number_of_components += 1;
        }
        self.link[node] = low_link;
    }

    /// Visits all nodes reachable from `root` that have not been discovered
    /// yet.
    fn visit_from(
        &mut self,
        graph: &impl Digraph,
        root: usize,
        pl: &mut impl ProgressLog,
    ) -> Result<(), SccError> {
        let num_nodes = self.link.len();
        // Each frame contains a node on the visit path, the lowest link seen
        // so far from the node, and the iterator on its successors.
        let mut stack = Vec::with_capacity(16);
        let time = self.previsit(root);
        stack.push((root, time, graph.successors(root)));

        'recurse: loop {
            let Some((curr, low_link, succs)) = stack.last_mut() else {
                return Ok(());
            };
            let curr = *curr;

            for succ in succs {
                if succ >= num_nodes {
                    return Err(SccError::SuccessorOutOfBounds {
                        node: curr,
                        succ,
                        num_nodes,
                    });
                }
                if self.emitted.get(succ) {
                    // Arc to a closed component
                    continue;
                }
                if self.known.get(succ) {
                    // succ is still on the component stack
                    *low_link = (*low_link).min(self.link[succ]);
                } else {
                    let time = self.previsit(succ);
                    stack.push((succ, time, graph.successors(succ)));
                    continue 'recurse;
                }
            }

            let low_link = *low_link;
            stack.pop();
            self.postvisit(curr, low_link);
            pl.light_update();

            // Propagate the low link to the parent
            if let Some((_, parent_low_link, _)) = stack.last_mut() {
                *parent_low_link = (*parent_low_link).min(low_link);
            }
        }
    }
}
