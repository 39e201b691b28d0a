//! Availability and inventory checks.

pub mod inventory;

pub use inventory::InventoryChecker;
