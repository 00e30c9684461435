pub mod logging;

pub use logging::{init_log_file, init_tracing, log_startup, truncate_text};
