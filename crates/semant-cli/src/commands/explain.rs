//! Explain command - describe a diagnostic code from the registry

use anyhow::{bail, Result};
use semant_core::error_codes;

pub fn run(code: &str) -> Result<()> {
    let Some(info) = error_codes::lookup(code) else {
        bail!("Unknown diagnostic code: {}", code);
    };

    println!("{}: {}", info.code, info.description);
    if let Some(help) = info.help {
        println!();
        println!("help: {}", help);
    }
    Ok(())
}
