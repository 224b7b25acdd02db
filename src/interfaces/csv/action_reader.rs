use crate::domain::action::{Action, ActionRecord};
use crate::error::{Result, VendingError};
use std::io::Read;

/// Reads an action script from a CSV source.
///
/// The script has an `action, argument` header. Whitespace is trimmed and rows
/// may omit the argument column entirely.
pub struct ActionReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> ActionReader<R> {
    /// Creates a new `ActionReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and validates actions.
    pub fn actions(self) -> impl Iterator<Item = Result<Action>> {
        self.reader.into_deserialize().map(|result| {
            let record: ActionRecord = result.map_err(VendingError::from)?;
            Action::try_from(record)
        })
    }
}
