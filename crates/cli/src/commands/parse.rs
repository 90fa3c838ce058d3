use std::io::Read;

use chrono::{NaiveDate, Utc};

use stayquote_core::inquiry::InquiryParser;

use super::{CommandResult, EXIT_INVALID_INPUT};

pub fn run(text: Option<String>, reference_date: Option<NaiveDate>) -> CommandResult {
    let text = match text {
        Some(text) => text,
        None => {
            let mut buffer = String::new();
            if let Err(error) = std::io::stdin().read_to_string(&mut buffer) {
                return CommandResult::failure(
                    "parse",
                    "stdin_read",
                    error.to_string(),
                    EXIT_INVALID_INPUT,
                );
            }
            buffer
        }
    };

    let reference_date = reference_date.unwrap_or_else(|| Utc::now().date_naive());
    let inquiry = InquiryParser::new(reference_date).parse(&text);

    match serde_json::to_value(&inquiry) {
        Ok(data) => CommandResult::success("parse", data),
        Err(error) => CommandResult::failure("parse", "serialization", error.to_string(), 1),
    }
}
