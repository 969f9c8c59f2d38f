pub mod soa_watch;

pub use soa_watch::{SoaWatchJob, WatchExit};
