/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Directed graphs as seen by the algorithms of this crate.
//!
//! A [`Digraph`] has nodes numbered from zero to
//! [`num_nodes`](Digraph::num_nodes) (excluded), and provides random access
//! to the successors of each node. The trait is implemented for adjacency
//! lists (slices and vectors of anything that can be seen as a slice of
//! `usize`) and, through the [`RandomAccess`] adapter, for the
//! random-access graphs of [`webgraph`].

use webgraph::traits::RandomAccessGraph;

/// A directed graph with random access to successors.
pub trait Digraph {
    /// Returns the number of nodes of the graph.
    fn num_nodes(&self) -> usize;

    /// Returns the successors of `node`, in arc order.
    ///
    /// Parallel arcs and self loops are allowed. Nothing prevents a
    /// successor from lying outside `0..num_nodes()`: algorithms must check.
    fn successors(&self, node: usize) -> impl Iterator<Item = usize> + '_;
}

impl<T: AsRef<[usize]>> Digraph for [T] {
    #[inline(always)]
    fn num_nodes(&self) -> usize {
        self.len()
    }

    #[inline(always)]
    fn successors(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self[node].as_ref().iter().copied()
    }
}

impl<T: AsRef<[usize]>> Digraph for Vec<T> {
    #[inline(always)]
    fn num_nodes(&self) -> usize {
        self.len()
    }

    #[inline(always)]
    fn successors(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self[node].as_ref().iter().copied()
    }
}

impl<D: Digraph + ?Sized> Digraph for &D {
    #[inline(always)]
    fn num_nodes(&self) -> usize {
        (**self).num_nodes()
    }

    #[inline(always)]
    fn successors(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        (**self).successors(node)
    }
}

/// Adapter exposing a [`webgraph`] random-access graph as a [`Digraph`].
///
/// # Examples
///
/// ```
/// use tarjan_sccs::prelude::*;
/// use dsi_progress_logger::no_logging;
/// use webgraph::prelude::VecGraph;
///
/// let graph = VecGraph::from_arcs([(0, 1), (1, 0), (1, 2)]);
/// let sccs = tarjan(RandomAccess(&graph), no_logging![]).unwrap();
/// assert_eq!(sccs.num_components(), 2);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RandomAccess<G>(pub G);

impl<G: RandomAccessGraph> Digraph for RandomAccess<G> {
    #[inline(always)]
    fn num_nodes(&self) -> usize {
        self.0.num_nodes()
    }

    #[inline(always)]
    fn successors(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self.0.successors(node).into_iter()
    }
}
