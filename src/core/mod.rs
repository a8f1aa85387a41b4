pub mod exclusion;
pub mod schedule;
pub mod term;
pub mod title;

pub use exclusion::ExclusionSet;
pub use schedule::generate_milestones;
pub use term::{DateTerm, DATE_FORMAT};
