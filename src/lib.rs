pub mod config;
pub mod export;
pub mod fetch;
pub mod io;
pub mod meeting;
pub mod pacing;
pub mod page;
pub mod paginate;
pub mod participant;
pub mod roster;
pub mod token;

pub mod prelude {
    pub use crate::config::Config;
    pub use crate::meeting::{Meeting, MeetingType};
    pub use crate::roster::{Roster, RosterEntry};
}
