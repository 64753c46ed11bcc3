//! Prompt templates.

use logolab_types::DesignRequest;

/// Suffix appended to variant prompts when the client renders through the
/// fallback provider directly.
pub const LOGO_RENDER_SUFFIX: &str =
    "professional vector logo, flat design, white background, high resolution";

/// Build the analysis prompt sent to the text provider.
///
/// Both inputs are embedded verbatim. The provider is told to put the
/// project name literally into each design prompt; nothing checks that
/// locally.
pub fn analysis_prompt(request: &DesignRequest) -> String {
    let name = &request.project_name;
    let description = &request.input_text;

    format!(
        r##"
    Project Name: "{name}"
    Visual Identity Description: "{description}"

    Task:
    1. Translate the description to professional English design terminology.
    2. Create ONLY 2 distinct logo design prompts.
    3. Each prompt MUST include the text "{name}" as the primary brand name.
    4. Variation: Style 1 (Minimalist & Modern), Style 2 (Creative & Luxurious).

    Return ONLY a JSON object:
    {{
      "concept_summary": "Short Arabic summary",
      "variants": [
        {{"id": 1, "title": "تصميم عصري بسيط", "prompt": "Professional minimalist logo for '{name}', clean lines, white background, vector style"}},
        {{"id": 2, "title": "تصميم إبداعي فاخر", "prompt": "Luxurious creative logo for '{name}', elegant details, high contrast, white background, premium design"}}
      ],
      "colors": [{{"name": "اللون الأساسي", "hex": "#4f46e5"}}]
    }}
  "##
    )
}

/// Variant prompt decorated for direct rendering.
pub fn logo_render_prompt(prompt: &str) -> String {
    format!("{}, {}", prompt, LOGO_RENDER_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> DesignRequest {
        DesignRequest {
            project_name: "SKYLINE".to_string(),
            input_text: "شعار عصري بسيط".to_string(),
        }
    }

    #[test]
    fn analysis_prompt_embeds_inputs_verbatim() {
        let prompt = analysis_prompt(&request());
        assert!(prompt.contains(r#"Project Name: "SKYLINE""#));
        assert!(prompt.contains(r#"Visual Identity Description: "شعار عصري بسيط""#));
        assert!(prompt.contains(r#"MUST include the text "SKYLINE""#));
        assert_eq!(prompt.matches("'SKYLINE'").count(), 2);
    }

    #[test]
    fn analysis_prompt_is_deterministic() {
        assert_eq!(analysis_prompt(&request()), analysis_prompt(&request()));
    }

    #[test]
    fn analysis_prompt_example_is_valid_json_shape() {
        let prompt = analysis_prompt(&request());
        assert!(prompt.contains(r#""concept_summary""#));
        assert!(prompt.contains(r#"{"id": 1,"#));
        assert!(!prompt.contains("{{"));
    }

    #[test]
    fn render_prompt_appends_suffix() {
        assert_eq!(
            logo_render_prompt("Minimalist logo for SKYLINE"),
            "Minimalist logo for SKYLINE, professional vector logo, flat design, white background, high resolution"
        );
    }
}
