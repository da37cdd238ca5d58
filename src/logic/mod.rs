//! League logic: schedule generation, late joins, standings, and the commands around them.

mod export;
mod late_join;
mod results;
mod schedule;
mod setup;
mod standings;
mod teams;

pub use export::standings_to_csv;
pub use late_join::generate_late_join_matches;
pub use results::record_match_result;
pub use schedule::{generate_schedule, MIN_TEAMS};
pub use setup::{start_tournament, DrawOrder};
pub use standings::compute_standings;
pub use teams::add_late_team;
