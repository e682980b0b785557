//! Service layer
//!
//! The allocation engine is the only stateful service. It holds one
//! shelter's inventories and ledgers for the lifetime of the process.

pub mod allocation;

pub use allocation::AllocationEngine;
