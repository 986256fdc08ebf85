use std::sync::atomic::{AtomicBool, Ordering};
use std::env;

static ENABLE_LOGGING: AtomicBool = AtomicBool::new(false);

/// Initializes logging based on the CONTAGION_LOGGING environment variable.
/// - If CONTAGION_LOGGING=true, logging is enabled.
/// - If CONTAGION_LOGGING=false or not set, logging is disabled.
/// - To enable logging in tests, run: CONTAGION_LOGGING=true cargo test -- --nocapture
pub fn init_logging() {
    match env::var("CONTAGION_LOGGING") {
        Ok(value) => {
            match value.as_str() {
                "true" => ENABLE_LOGGING.store(true, Ordering::SeqCst),
                "false" => ENABLE_LOGGING.store(false, Ordering::SeqCst),
                _ => panic!("\nError: CONTAGION_LOGGING environment variable must be 'true' or 'false'\n\nTo run the program, use one of:\n  CONTAGION_LOGGING=true cargo run\n  CONTAGION_LOGGING=false cargo run\n"),
            }
        }
        Err(_) => ENABLE_LOGGING.store(false, Ordering::SeqCst),
    }
}

pub fn log(prefix: &str, message: &str) {
    if ENABLE_LOGGING.load(Ordering::SeqCst) {
        println!("  [{}]   {}", prefix, message);
    }
}
