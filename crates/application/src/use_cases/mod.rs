pub mod watch;

pub use watch::{CheckSoaUseCase, FetchSoaUseCase};
