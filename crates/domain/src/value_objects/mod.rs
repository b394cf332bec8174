//! Value objects - Immutable objects defined by their attributes

mod area;
mod concealment;
mod roll_on_senses;
mod time;

pub use area::SquareMeters;
pub use concealment::{ConcealmentValue, ToInteger};
pub use roll_on_senses::RollOnSenses;
pub use time::{TimeDuration, TimeUnit, ROUNDS_PER_MINUTE};
