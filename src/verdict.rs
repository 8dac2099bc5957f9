//! Maps homework status codes to the sentences the chat sees.

use crate::error::BotError;
use crate::practicum::Homework;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// The closed set of review verdicts. Anything the server sends outside
/// these three keys is a contract violation, not a new feature.
pub static HOMEWORK_VERDICTS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("approved", "Review finished: the reviewer liked everything. Hooray!"),
        ("reviewing", "The reviewer has started checking the work."),
        ("rejected", "Review finished: the reviewer has some remarks."),
    ])
});

/// Builds the notification line for one homework record.
///
/// Pure function. The name goes into the message verbatim; the verdict
/// sentence comes from the table.
pub fn parse_status(homework: &Homework) -> Result<String, BotError> {
    let name = homework
        .homework_name
        .as_deref()
        .ok_or_else(|| BotError::UnknownVerdict("record has no homework_name".into()))?;

    let status = homework
        .status
        .as_deref()
        .ok_or_else(|| BotError::UnknownVerdict(format!("record \"{name}\" has no status")))?;

    let verdict = HOMEWORK_VERDICTS
        .get(status)
        .ok_or_else(|| BotError::UnknownVerdict(format!("unrecognized code `{status}`")))?;

    Ok(format!("Changed review status for work \"{name}\". {verdict}"))
}
