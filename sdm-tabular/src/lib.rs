//! Typed columnar batches for the mapping engine's input rows.
//!
//! A relational table arrives as one [`ColumnBatch`]: already cleaned, typed,
//! and null-resolved by whatever loaded it. The mapping engine reads values
//! through the [`Column`] enum and never inspects runtime types.
//!
//! # Design
//!
//! - **Columnar storage**: Data is stored in typed `Vec` per column, not per-row
//! - **Strongly typed**: All column access is through the `Column` enum, no `dyn Any`
//! - **Nulls are explicit**: every cell is an `Option`

pub mod batch;
pub mod error;

pub use batch::{BatchSchema, Column, ColumnBatch, FieldInfo, FieldType};
pub use error::{Result, TabularError};
