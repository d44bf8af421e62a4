//! `brain-gate` — weighted selection and the composite behavior gate.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`shuffling`] | `WeightedEntry<T>`, `ShufflingList<T>`                  |
//! | [`gate`]      | `OrderPolicy`, `RunPolicy`, `BehaviorGate<A>`           |
//!
//! A gate is itself a [`Behavior`][brain_behavior::Behavior]: it owns a
//! weighted list of sub-behaviors and, on each activation, reorders them per
//! its order policy and starts a subset per its run policy.  Gates nest, so
//! priority trees are built by composing gates inside gates.

pub mod gate;
pub mod shuffling;


pub use gate::{BehaviorGate, OrderPolicy, RunPolicy};
pub use shuffling::{ShufflingList, WeightedEntry};
