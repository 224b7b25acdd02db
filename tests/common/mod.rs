use rand::Rng;
use std::io::{Error, Write};
use tempfile::NamedTempFile;
use vending_machine::domain::denomination::Denomination;

/// Writes an action script with the standard header followed by `rows`.
pub fn write_script(rows: &[&str]) -> Result<NamedTempFile, Error> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "action, argument")?;
    for row in rows {
        writeln!(file, "{}", row)?;
    }
    file.flush()?;
    Ok(file)
}

/// A random sequence of coins drawn from the whole catalog.
pub fn random_coins(rng: &mut impl Rng, len: usize) -> Vec<Denomination> {
    (0..len)
        .map(|_| Denomination::ALL[rng.gen_range(0..Denomination::ALL.len())])
        .collect()
}
