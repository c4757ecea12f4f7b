// Entity Models
//
// Each entity has:
// - Stable identity (UUID) assigned once per run
// - Immutable values (name, category, polarity, score, references)

pub mod category;
pub mod entity;

pub use category::Category;
pub use entity::{Entity, EntityRecord, MAX_PERCENTAGE};
