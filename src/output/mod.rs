mod formatter;

pub use formatter::{JsonOutput, OutputFormatter, NO_FILES_MESSAGE};
