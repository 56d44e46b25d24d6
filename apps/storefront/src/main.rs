//! # ShoppingTime Storefront Entry Point
//!
//! ```text
//! $ shoptime
//! ShoppingTime - type 'help' for commands
//! [home] cart(0)>
//! ```
//!
//! The actual setup is in lib.rs for better testability.

use std::process::ExitCode;

fn main() -> ExitCode {
    shoptime_storefront::run()
}
