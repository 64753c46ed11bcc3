//! Provider text → `DesignResult`.
//!
//! The text provider is asked for bare JSON but regularly wraps it in a
//! markdown code fence (optionally tagged `json`), or surrounds it with
//! prose. Fences are stripped first; if that still does not parse, the
//! outermost `{ … }` span is tried.

use logolab_types::DesignResult;
use regex::Regex;
use std::sync::OnceLock;

use crate::error::{ProviderError, ProviderResult};

static CODE_FENCE_REGEX: OnceLock<Regex> = OnceLock::new();

#[allow(clippy::expect_used, reason = "Pattern is a compile-time constant")]
fn code_fence_regex() -> &'static Regex {
    CODE_FENCE_REGEX.get_or_init(|| {
        Regex::new(r"(?s)^\s*```[A-Za-z0-9_-]*[ \t]*\r?\n?(.*?)\s*```\s*$")
            .expect("Code fence regex is valid")
    })
}

/// Remove a surrounding markdown code fence, if present.
pub fn strip_code_fences(text: &str) -> &str {
    code_fence_regex()
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map_or_else(|| text.trim(), |m| m.as_str().trim())
}

/// Parse the provider's embedded JSON into a design result.
pub fn parse_design_result(text: &str) -> ProviderResult<DesignResult> {
    let body = strip_code_fences(text);

    match serde_json::from_str::<DesignResult>(body) {
        Ok(result) => Ok(result),
        Err(first_err) => outermost_object(body)
            .and_then(|candidate| serde_json::from_str::<DesignResult>(candidate).ok())
            .ok_or_else(|| ProviderError::Malformed(format!("design JSON: {}", first_err))),
    }
}

fn outermost_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r##"{
        "concept_summary": "هوية حديثة",
        "variants": [
            {"id": 1, "title": "تصميم عصري بسيط", "prompt": "Professional minimalist logo for 'SKYLINE'"},
            {"id": 2, "title": "تصميم إبداعي فاخر", "prompt": "Luxurious creative logo for 'SKYLINE'"}
        ],
        "colors": [{"name": "اللون الأساسي", "hex": "#4f46e5"}]
    }"##;

    #[test]
    fn parses_bare_json() {
        let result = parse_design_result(PAYLOAD).unwrap();
        assert_eq!(result.variants.len(), 2);
        assert_eq!(result.colors[0].hex, "#4f46e5");
    }

    #[test]
    fn strips_tagged_code_fence() {
        let fenced = format!("```json\n{}\n```", PAYLOAD);
        let result = parse_design_result(&fenced).unwrap();
        assert_eq!(result.variants.len(), 2);
        assert!(result.variants.iter().all(|v| v.prompt.contains("SKYLINE")));
    }

    #[test]
    fn strips_bare_code_fence_with_padding() {
        let fenced = format!("  ```\n{}\n```  \n", PAYLOAD);
        assert!(parse_design_result(&fenced).is_ok());
    }

    #[test]
    fn strip_leaves_unfenced_text_trimmed() {
        assert_eq!(strip_code_fences("  {\"a\":1}\n"), "{\"a\":1}");
        assert_eq!(strip_code_fences("```json\n{\"a\":1}\n```"), "{\"a\":1}");
    }

    #[test]
    fn falls_back_to_outermost_object() {
        let chatty = format!("Here is your design:\n{}\nEnjoy!", PAYLOAD);
        let result = parse_design_result(&chatty).unwrap();
        assert_eq!(result.concept_summary, "هوية حديثة");
    }

    #[test]
    fn rejects_non_json() {
        let err = parse_design_result("sorry, I cannot help with that").unwrap_err();
        assert!(matches!(err, ProviderError::Malformed(_)));
    }

    #[test]
    fn rejects_json_without_variants() {
        assert!(parse_design_result(r#"{"concept_summary": "x"}"#).is_err());
    }
}
