//! Duo Pong entry point
//!
//! Initializes logging and runs the game loop; any initialization
//! failure is reported and exits nonzero before the loop starts.

use anyhow::Result;

fn main() -> Result<()> {
    env_logger::init();
    log::info!("Duo Pong starting...");

    duo_pong::run()
}
