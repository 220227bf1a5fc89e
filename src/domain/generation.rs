//! Generation request model.

use super::Mode;

/// One call to the generation backend. Built once per submission.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub mode: Mode,
    pub rendered_prompt: String,
    pub system_instruction: Option<String>,
    pub max_output_tokens: u32,
    pub temperature: f32,
    pub tools_enabled: bool,
}

impl GenerationRequest {
    /// Attach the fixed options of `mode` to a rendered prompt.
    pub fn for_mode(mode: Mode, rendered_prompt: String) -> Self {
        let profile = mode.profile();
        Self {
            mode,
            rendered_prompt,
            system_instruction: profile.system_instruction.map(str::to_string),
            max_output_tokens: profile.max_output_tokens,
            temperature: profile.temperature,
            tools_enabled: profile.search_tool,
        }
    }
}
