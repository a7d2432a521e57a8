//! Logger factory demonstration
//!
//! Run with `LOG_LEVEL=DEBUG cargo run --example factory_demo` to see the
//! configured default change what the module loggers print.
//!
//! Key concepts illustrated:
//! 1. The shared application logger
//! 2. Per-module loggers with the configured default level
//! 3. Explicit level overrides (last call wins)
//! 4. Repeated setup never duplicates output

use agentlog_core::logging_facility::{init, Profile};
use agentlog_core::{app_logger, get_logger, Result, Settings};

fn main() -> Result<()> {
    let settings = Settings::load()?;
    init(Profile::from_environment(&settings.environment));

    let app = app_logger()?;
    app.info(format_args!("environment: {}", settings.environment));

    // Module loggers follow LOG_LEVEL unless told otherwise.
    let support = get_logger("customer_support", None)?;
    support.info("triage agent created");
    support.debug("only visible with LOG_LEVEL=DEBUG");

    // An explicit level is re-applied on every call.
    let guardrails = get_logger("guardrails", Some("DEBUG"))?;
    guardrails.debug("input guardrail armed");
    get_logger("guardrails", Some("ERROR"))?;
    guardrails.warning("suppressed: guardrails is now at ERROR");
    guardrails.error("tripwire triggered");

    // Setting up the same logger again prints each message once.
    for _ in 0..3 {
        get_logger("customer_support", None)?;
    }
    support.info("printed exactly once");

    Ok(())
}
