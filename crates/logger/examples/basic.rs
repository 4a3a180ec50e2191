use nebula_logger::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // JSON lines on stderr, with passwords redacted
    let logger = nebula_logger::build([
        with_format("json"),
        with_level("debug"),
        with_output("stderr"),
        with_source(true),
        with_replacer(|_, attr| {
            if attr.key == "password" {
                Attr::new(attr.key, "[REDACTED]")
            } else {
                attr
            }
        }),
    ])?;

    logger.in_scope(|| {
        info!(port = 8080, "Server starting");
        debug!(user = "admin", password = "hunter2", "Login attempt");
        warn!(retry_count = 3, "Operation failed, retrying");
    });

    // Or install it for the whole process
    logger.init()?;
    error!(error_code = "DB_001", "Database connection failed");

    Ok(())
}
