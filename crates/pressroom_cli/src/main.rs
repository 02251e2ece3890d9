//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `pressroom_core` wiring.
//! - Keep output deterministic for quick local sanity checks.

use pressroom_core::db::open_db_in_memory;

fn main() {
    println!("pressroom_core version={}", pressroom_core::core_version());
    match open_db_in_memory() {
        Ok(_) => println!("pressroom_core schema=ok"),
        Err(err) => {
            eprintln!("pressroom_core schema=error {err}");
            std::process::exit(1);
        }
    }
}
