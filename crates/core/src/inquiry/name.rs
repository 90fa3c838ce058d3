use regex::Regex;

/// Shared tail for every name pattern: the capture runs over letters and
/// spaces and stops at the first punctuation, line break, digit, stop
/// keyword, or end of text.
const CAPTURE: &str = "([A-Za-z][A-Za-z ]*?)";
const STOP: &str = r"\s*(?:$|[,.\r\n\d]|\b(?:and|mobile|contact|phone)\b)";

/// Extracts the guest name from label-anchored phrasings, in priority order:
/// explicit labels ("my name is", "i am", "i'm", "this is", "name:") before
/// the looser greeting-prefixed form.
#[derive(Clone, Debug)]
pub struct NameExtractor {
    patterns: Vec<Regex>,
}

impl NameExtractor {
    pub fn new() -> Self {
        let labeled = format!(
            r"(?i)\b(?:(?:my name is|i am|i'm|this is)\s+|name\s*:\s*){CAPTURE}{STOP}"
        );
        let greeting = format!(
            r"(?i)\b(?:hi|hello|hey)\b[,!]?\s*(?:this is|i am|i'm)?\s*{CAPTURE}{STOP}"
        );

        Self {
            patterns: vec![
                Regex::new(&labeled).expect("labeled name pattern compiles"),
                Regex::new(&greeting).expect("greeting name pattern compiles"),
            ],
        }
    }

    pub fn extract(&self, text: &str) -> Option<String> {
        self.patterns.iter().find_map(|pattern| {
            let captures = pattern.captures(text)?;
            let name = captures.get(1)?.as_str().trim();
            (!name.is_empty()).then(|| name.to_string())
        })
    }
}

impl Default for NameExtractor {
    fn default() -> Self {
        Self::new()
    }
}
