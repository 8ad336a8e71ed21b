//! Prompt Composition
//!
//! Builds the final prompt sent to a generation provider: the resolved
//! template's prompt with the asset's display name substituted for the
//! platform placeholder, the source text appended in quotation, and the
//! style example (when present) appended as a trailing directive.

use crate::template::Template;

/// Placeholder token replaced with the asset's display name.
pub const PLATFORM_PLACEHOLDER: &str = "{platform}";

/// Lead-in for the optional style-example suffix.
const EXAMPLE_DIRECTIVE: &str = "\n\nHere is an example of the desired style:\n";

/// Compose the final prompt for one asset.
///
/// The source text is embedded verbatim inside double quotes; it is not
/// sanitized against prompt injection.
pub fn compose_prompt(template: &Template, display_name: &str, source_text: &str) -> String {
    let mut prompt = template.prompt.replace(PLATFORM_PLACEHOLDER, display_name);
    prompt.push_str("\n\n\"");
    prompt.push_str(source_text);
    prompt.push('"');

    if let Some(example) = template.example.as_deref() {
        if !example.trim().is_empty() {
            prompt.push_str(EXAMPLE_DIRECTIVE);
            prompt.push_str(example);
        }
    }

    prompt
}
