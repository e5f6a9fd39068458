mod person;
mod question;
mod roster;

pub use person::{PersonError, PersonRecord};
pub use question::Question;
pub use roster::{PositionGroup, Roster};
