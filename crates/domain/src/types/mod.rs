//! # Searching vocabulary types
//!
//! Closed sets of codes the searching rules branch on. These are the stable
//! contract between the evaluator, the lookup tables and callers.
//!
//! ## Design Principles
//!
//! 1. **Pure data types** - No I/O, no side effects
//! 2. **Closed sets** - Compared by equality only, never extended at runtime
//! 3. **Serializable** - All types derive Serialize/Deserialize with snake_case codes

mod activity_intensity;
pub use activity_intensity::ActivityIntensity;

mod search_item_type;
pub use search_item_type::SearchItemType;

// Keys of the stealthiness table
mod concealment_situation;
pub use concealment_situation::ConcealmentSituation;
