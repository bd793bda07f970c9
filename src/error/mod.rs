mod config;
mod extract;
mod io;

pub use config::ConfigError;
pub use extract::ExtractError;
pub use io::IoError;
