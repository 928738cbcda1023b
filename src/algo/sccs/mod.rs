/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Strongly connected components of directed graphs.
//!
//! Components are computed by [Tarjan's algorithm](tarjan) in a single
//! depth-first visit. Components are numbered in reverse topological order
//! of the component graph: an arc from a node in component `a` to a node in
//! component `b` implies `a >= b`. The same order is used to report
//! components to the [visitor](tarjan_visit), if any.
//!
//! # Examples
//! ```
//! use dsi_progress_logger::no_logging;
//! use tarjan_sccs::sccs::*;
//!
//! let graph: Vec<Vec<usize>> = vec![vec![1], vec![2, 3], vec![0], vec![]];
//!
//! let mut sccs = tarjan(&graph, no_logging![]).unwrap();
//! assert_eq!(sccs.num_components(), 2);
//! // Node 3 has no way back, so its component is closed first
//! assert_eq!(sccs.components(), &[1, 1, 1, 0]);
//!
//! // Let's sort the components by size
//! let sizes = sccs.sort_by_size();
//! assert_eq!(sizes, vec![3, 1].into_boxed_slice());
//! assert_eq!(sccs.components(), &[0, 0, 0, 1]);
//! ```

mod tarjan;
pub use tarjan::*;

use rayon::iter::{IntoParallelRefMutIterator, ParallelIterator};
use thiserror::Error;

/// Errors raised while computing strongly connected components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SccError {
    /// An arc points to a node that does not exist.
    #[error("node {node} has successor {succ}, but the graph has {num_nodes} nodes")]
    SuccessorOutOfBounds {
        node: usize,
        succ: usize,
        num_nodes: usize,
    },
}

/// Strongly connected components.
///
/// An instance of this structure stores the [index of the
/// component](Sccs::components) of each node. Components are numbered from 0 to
/// [`num_components`](Sccs::num_components) (excluded).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sccs {
    num_components: usize,
    components: Box<[usize]>,
}

impl Sccs {
    pub fn new(num_components: usize, components: Box<[usize]>) -> Self {
        debug_assert!(components.iter().all(|&c| c < num_components));
        Sccs {
            num_components,
            components,
        }
    }

    /// Returns the number of strongly connected components.
    pub fn num_components(&self) -> usize {
        self.num_components
    }

    /// Returns a slice containing, for each node, the index of the component
    /// it belongs to.
    #[inline(always)]
    pub fn components(&self) -> &[usize] {
        &self.components
    }

    /// Consumes this structure, returning the component index of each node.
    pub fn into_components(self) -> Box<[usize]> {
        self.components
    }

    /// Returns the sizes of all components.
    pub fn compute_sizes(&self) -> Box<[usize]> {
        let mut sizes = vec![0; self.num_components()];
        for &node_component in self.components() {
            sizes[node_component] += 1;
        }
        sizes.into_boxed_slice()
    }

    /// Returns the nodes of each component, in increasing order.
    ///
    /// The outer vector is indexed by component.
    pub fn members(&self) -> Vec<Vec<usize>> {
        let mut members = self
            .compute_sizes()
            .iter()
            .map(|&size| Vec::with_capacity(size))
            .collect::<Vec<_>>();
        for (node, &node_component) in self.components.iter().enumerate() {
            members[node_component].push(node);
        }
        members
    }

    /// Renumbers the components by decreasing size.
    ///
    /// After a call to this method, the sizes of strongly connected components
    /// will be non-increasing in the component index; components of the same
    /// size keep their relative order. The method returns the sizes of the
    /// components after the renumbering.
    ///
    /// Note that the new numbering is no longer a reverse topological order.
    pub fn sort_by_size(&mut self) -> Box<[usize]> {
        let mut sizes = self.compute_sizes();
        let mut sort_perm = Vec::from_iter(0..sizes.len());
        sort_perm.sort_by(|&x, &y| sizes[y].cmp(&sizes[x]));
        let mut inv_perm = vec![0; sizes.len()];
        sort_perm
            .iter()
            .enumerate()
            .for_each(|(i, &x)| inv_perm[x] = i);

        self.components
            .par_iter_mut()
            .for_each(|node_component| *node_component = inv_perm[*node_component]);
        sizes.sort_by(|&x, &y| y.cmp(&x));
        sizes
    }
}
