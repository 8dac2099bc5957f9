use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong inside one poll iteration.
///
/// The loop boundary treats all of these alike: the failure is logged and
/// reported to the chat, then the loop waits out the poll interval. The
/// variants exist so tests (and log readers) can tell the failure modes
/// apart.
#[derive(Debug, Error)]
pub enum BotError {
    #[error("request to the homework server failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("homework server answered {0} instead of 200 OK")]
    UnexpectedStatus(StatusCode),

    #[error("could not decode the server response as JSON: {0}")]
    MalformedBody(#[from] serde_json::Error),

    #[error("server response is not a JSON object")]
    ResponseNotAnObject,

    #[error("server response has no homeworks field")]
    MissingHomeworks,

    #[error("homeworks field is not a list")]
    HomeworksNotAList,

    #[error("server response has no current_date field")]
    MissingCurrentDate,

    #[error("current_date is not an integer timestamp")]
    CurrentDateNotAnInteger,

    #[error("invalid homework status: {0}")]
    UnknownVerdict(String),

    #[error("failed to deliver telegram message: {0}")]
    Delivery(String),
}
