//! Finds the shortest walk that opens the vault.

use std::{error::Error, io};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut stdout = io::stdout().lock();
    teleporter_cli::vault::run(&mut stdout)?;
    Ok(())
}
