use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;

/// Reads the whole input file, or stdin when no path is given.
pub fn read_input(path: Option<PathBuf>) -> Result<Vec<u8>> {
    match path {
        Some(path) => {
            let path = fs::canonicalize(&path)
                .with_context(|| format!("failed to resolve {}", path.display()))?;

            Ok(fs::read(path)?)
        }
        None => {
            let mut raw_data = Vec::new();
            io::stdin().read_to_end(&mut raw_data)?;

            Ok(raw_data)
        }
    }
}

pub fn write_output<T: Serialize>(value: &T) -> Result<()> {
    let data = serde_json::to_string_pretty(value)?;
    let mut stdout = io::stdout().lock();

    writeln!(stdout, "{data}")?;

    Ok(())
}
