//! Finds the coin ordering that balances the equation.

use std::{error::Error, io};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut stdout = io::stdout().lock();
    teleporter_cli::coins::run(&mut stdout)?;
    Ok(())
}
