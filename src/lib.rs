/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

pub mod algo;
pub mod graph;

pub use algo::sccs;

/// Use `use tarjan_sccs::prelude::*;` to import the graph abstraction and
/// the strongly connected components algorithms.
pub mod prelude {
    pub use crate::graph::{Digraph, RandomAccess};
    pub use crate::sccs::{tarjan, tarjan_visit, SccError, Sccs};
}
