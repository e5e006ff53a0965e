//! Compact columnar batch representation.
//!
//! Each raw batch is re-encoded column by column: integers narrowed to the
//! smallest lossless width, floats narrowed to f32 only when every value
//! round-trips exactly, dates parsed with null coercion, and free text
//! dictionary-encoded with a dictionary scoped to the batch. Nothing in the
//! encoding survives the batch; running aggregates only ever see decoded
//! values.

mod column;
mod compact;

pub use column::{CategoricalColumn, Column, DateColumn, FloatColumn, IntColumn};
pub use compact::{CompactBatch, compact_batch};
