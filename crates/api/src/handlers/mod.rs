pub mod watch;

pub use watch::watch_soa;
