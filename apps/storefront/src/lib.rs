//! # ShoppingTime Storefront
//!
//! The view layer over the persistent stores: configuration, logging,
//! navigation, commands and the interactive shell.
//!
//! ## Module Organization
//! ```text
//! shoptime_storefront/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── AppState: catalog + restored stores
//! │   └── config.rs   ◄─── ConfigState (defaults < TOML < env)
//! ├── commands/
//! │   ├── catalog.rs  ◄─── Product listing and detail
//! │   ├── cart.rs     ◄─── Cart manipulation and checkout
//! │   ├── favorites.rs◄─── Favorite toggling
//! │   └── session.rs  ◄─── Login / logout
//! ├── navigation.rs   ◄─── Views and redirect rules
//! ├── shell.rs        ◄─── Line-oriented front end
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod navigation;
pub mod shell;
pub mod state;

use std::io;
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use shell::Shell;
use state::{AppState, ConfigState};

/// Runs the storefront shell on stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Initialize logging (stderr, RUST_LOG or "warn,shoptime=info")       │
/// │  2. Load configuration (defaults < storefront.toml < SHOPTIME_*)        │
/// │  3. Open stores over the data directory                                 │
/// │     • restores session, favorites and cart before the first prompt      │
/// │     • unusable directory → in-memory only, with a warning               │
/// │  4. Read commands until 'quit' or end of input                          │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> ExitCode {
    init_tracing();

    let config = ConfigState::load_or_default(None);
    info!(store = %config.store_name, "Starting ShoppingTime storefront");

    let state = AppState::open(config);
    let mut shell = Shell::new(&state);

    let stdin = io::stdin();
    match shell.run(stdin.lock(), io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Shell I/O failed");
            ExitCode::FAILURE
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every command and snapshot write
/// - `RUST_LOG=shoptime_store=trace` - Store crate only
/// - Default: warnings everywhere, info for the shoptime crates
///
/// Logs go to stderr so they never interleave with shell output.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,shoptime=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
