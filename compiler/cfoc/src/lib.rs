//! Control-flow oracle driver.
//!
//! The binary in `main.rs` parses arguments by hand and delegates to
//! [`commands`]; everything it prints is produced here so it can be tested
//! without spawning a process.

pub mod commands;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a hierarchical tracing subscriber when `CFO_LOG` is set.
///
/// `CFO_LOG` takes `EnvFilter` directives, e.g. `CFO_LOG=cfo_eval=trace`.
/// Without it no subscriber is installed and tracing stays disabled.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("CFO_LOG").is_ok() {
            let filter = EnvFilter::from_env("CFO_LOG");
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_bracketed_fields(true),
                )
                .init();
        }
    });
}
