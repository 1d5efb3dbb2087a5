pub mod formatter;

pub use formatter::{
    format_event_standings, format_player_leaderboard, format_university_leaderboard, Report,
};
