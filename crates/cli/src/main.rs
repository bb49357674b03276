//! Finds the teleporter setting that lands the residue on 6.

use std::{error::Error, io};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut stdout = io::stdout().lock();
    teleporter_cli::teleport::run(&mut stdout)?;
    Ok(())
}
