//! Post-processing of generated text before it is shown or saved.

use super::Mode;

const HTML_FENCE: &str = "```html";
const FENCE: &str = "```";

/// Clean raw backend text for direct markup embedding.
///
/// Steps, in order: drop code-fence markers, drop newlines, then the
/// mode-specific pass. The result never contains a newline.
pub fn sanitize(raw: &str, mode: Mode) -> String {
    let unfenced = raw.replace(HTML_FENCE, "").replace(FENCE, "");
    let single_line: String = unfenced.chars().filter(|c| !matches!(c, '\n' | '\r')).collect();

    match mode {
        Mode::Locality => single_line,
        // Blunt: hyphenated words lose their hyphen too.
        Mode::Listing => single_line.replace(['-', '*'], " "),
        Mode::Translation => single_line.trim().replace('"', ""),
    }
}
