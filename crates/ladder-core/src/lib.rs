pub mod config;
pub mod logging;

pub mod checksum;
pub mod cycle;
pub mod fetch;
pub mod leaderboard;
pub mod retry;
pub mod scheduler;
