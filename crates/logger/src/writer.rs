//! Writer implementations

// Standard library
use std::fs::File;
use std::io;
use std::sync::Mutex;

// External dependencies
use tracing_subscriber::fmt::writer::BoxMakeWriter;

// Internal crates
use crate::config::Output;
use crate::core::LogResult;

/// Create a writer for an output destination
///
/// A file output is created, or truncated if it already exists. Failing to
/// open it returns the I/O error unchanged.
pub(crate) fn make_writer(output: &Output) -> LogResult<BoxMakeWriter> {
    let writer = match output {
        Output::Stdout => BoxMakeWriter::new(io::stdout),
        Output::Stderr => BoxMakeWriter::new(io::stderr),
        Output::File(path) => {
            let file = File::create(path)?;
            BoxMakeWriter::new(Mutex::new(file))
        }
    };

    Ok(writer)
}
