//! # stickyreorder Core Library
//!
//! A library for reordering sticky-end sequence assignments in DNA tile
//! self-assembly systems, minimizing predicted spurious binding by simulated
//! annealing over slot permutations.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a clear
//! separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models (ends, tiles,
//!   sequence pools, pair classifications) and the pure thermodynamic models
//!   behind the `EnergeticsModel` trait.
//!
//! - **[`engine`]: The Logic Core.** This stateful layer orchestrates the
//!   optimization: the memoized `EnergyCache`, the calibrated `ScoringModel`,
//!   the `MutationOperator`, and the Metropolis `Annealer`.
//!
//! - **[`workflows`]: The Public API.** The highest-level, user-facing layer.
//!   It ties the `engine` and `core` together to run a complete reordering
//!   pass over a tile set and read the result back into the document model.

pub mod core;
pub mod engine;
pub mod workflows;
