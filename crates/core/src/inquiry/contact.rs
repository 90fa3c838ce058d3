use regex::Regex;

/// Extracts a 10-digit mobile number. A labeled number wins over the first
/// bare 10-digit run found anywhere in the text.
#[derive(Clone, Debug)]
pub struct MobileExtractor {
    labeled: Regex,
    bare: Regex,
}

impl MobileExtractor {
    pub fn new() -> Self {
        Self {
            labeled: Regex::new(r"(?i)(?:mobile|contact|phone|number|call|reach)\s*:?\s*(\d{10})")
                .expect("labeled mobile pattern compiles"),
            bare: Regex::new(r"\d{10}").expect("bare mobile pattern compiles"),
        }
    }

    pub fn extract(&self, text: &str) -> Option<String> {
        if let Some(captures) = self.labeled.captures(text) {
            return Some(captures[1].to_string());
        }
        self.bare.find(text).map(|found| found.as_str().to_string())
    }
}

impl Default for MobileExtractor {
    fn default() -> Self {
        Self::new()
    }
}
