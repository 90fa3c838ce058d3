use stayquote_store::fixtures::demo_tariff_profiles;

use super::CommandResult;

pub fn run() -> CommandResult {
    match serde_json::to_value(demo_tariff_profiles()) {
        Ok(data) => CommandResult::success("tariffs", data),
        Err(error) => CommandResult::failure("tariffs", "serialization", error.to_string(), 1),
    }
}
