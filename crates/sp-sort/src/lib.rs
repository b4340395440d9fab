//! `sp-sort` — a context that sorts through whichever strategy it holds.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`strategy`] | `SortStrategy<T>` trait, `SortOrder`, the two orderings   |
//! | [`context`]  | `Context<T>` — owns one replaceable strategy              |
//! | [`demo`]     | `run` — ascending over `['a', 'b', 'c']`, then descending |

pub mod context;
pub mod demo;
pub mod strategy;


pub use context::Context;
pub use strategy::{SortAscending, SortDescending, SortOrder, SortStrategy};
