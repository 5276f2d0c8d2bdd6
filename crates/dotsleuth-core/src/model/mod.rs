/// Data model for the DotSleuth inventory.
///
/// Re-exports the candidate record and the bucketed inventory container.
pub mod candidate;
pub mod inventory;
pub mod size;

pub use candidate::{Candidate, Category, EntryKind, SizeInfo};
pub use inventory::Inventory;
