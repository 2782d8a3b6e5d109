use biblio_client::{
    ConfirmationRequest, ConfirmationResponse, Confirmer, NotificationKind, NotificationLog,
};

use std::io::{self, Write};

use async_trait::async_trait;

/// Split a command line into words. Single and double quotes group
/// words; a backslash escapes the next character.
pub(crate) fn split_line(line: &str) -> Result<Vec<String>, &'static str> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (_, '\\') => match chars.next() {
                Some(escaped) => {
                    current.push(escaped);
                    in_word = true;
                }
                None => return Err("trailing backslash"),
            },
            (Some(q), c) if c == q => quote = None,
            (Some(_), c) => current.push(c),
            (None, '"' | '\'') => {
                quote = Some(c);
                in_word = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if quote.is_some() {
        return Err("unterminated quote");
    }
    if in_word {
        words.push(current);
    }

    Ok(words)
}

/// Read one line from stdin without blocking the runtime.
/// `None` at end of input.
pub(crate) async fn read_line() -> io::Result<Option<String>> {
    tokio::task::spawn_blocking(|| -> io::Result<Option<String>> {
        let mut line = String::new();
        let read = io::stdin().read_line(&mut line)?;
        Ok((read > 0).then_some(line))
    })
    .await
    .map_err(io::Error::other)?
}

pub(crate) fn prompt(text: &str) {
    let mut stderr = io::stderr();
    let _ = write!(stderr, "{text}");
    let _ = stderr.flush();
}

/// Print and clear pending notifications
pub(crate) fn print_notifications(log: &NotificationLog) {
    for notification in log.drain() {
        let tag = match notification.kind {
            NotificationKind::Info => "info",
            NotificationKind::Error => "error",
        };
        eprintln!("[{tag}] {} ({})", notification.message, notification.action);
    }
}

/// Asks on the terminal; anything but y/yes cancels.
pub(crate) struct PromptConfirmer;

#[async_trait]
impl Confirmer for PromptConfirmer {
    async fn confirm(&self, request: ConfirmationRequest) -> ConfirmationResponse {
        prompt(&format!("{} [{}? y/N] ", request.message, request.confirm_label));

        match read_line().await {
            Ok(Some(answer)) if is_yes(&answer) => ConfirmationResponse::Confirmed,
            _ => ConfirmationResponse::Cancelled,
        }
    }
}

pub(crate) fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
