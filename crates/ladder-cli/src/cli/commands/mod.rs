//! CLI command handlers. Each command is in its own file.

mod checksum;
mod fetch;
mod once;
mod render;
mod watch;

pub use checksum::run_checksum;
pub use fetch::run_fetch;
pub use once::run_once;
pub use render::run_render;
pub use watch::run_watch;
