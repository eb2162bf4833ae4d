//! Demonstration of the logging facility
//!
//! Configures a context at Debug with file output, acquires a named handle,
//! and exercises ordinary logging plus exception-traceback logging.
//!
//! Run with: cargo run --example app_demo

use app_logging::prelude::*;

#[derive(Debug, thiserror::Error)]
#[error("attempted to divide {dividend} by zero")]
struct DivisionByZero {
    dividend: i64,
}

fn checked_div(dividend: i64, divisor: i64) -> std::result::Result<i64, DivisionByZero> {
    if divisor == 0 {
        return Err(DivisionByZero { dividend });
    }
    Ok(dividend / divisor)
}

fn main() -> app_logging::Result<()> {
    // Log Debug and higher, to console and file
    let ctx = app_logging::setup::initialize(LogLevel::Debug, true)?;

    // Named handle identifying where messages come from
    let main_logger = ctx.handle("app_demo");

    main_logger.info("Application starting up.");
    main_logger.debug("Checking initial configuration files...");

    match checked_div(10, 0) {
        Ok(result) => main_logger.info(format!("Calculation result: {}", result)),
        Err(err) => {
            // exception() logs at ERROR with the rendered traceback attached
            main_logger.exception("A critical calculation error occurred!", &err);
        }
    }

    main_logger.warning("Resource utilization is getting high.");

    ctx.flush()
}
