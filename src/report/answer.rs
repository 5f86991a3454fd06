//! "答案之书" section

use crate::types::{Answer, ReportOptions};

/// Service name used in fallback messages
pub const ANSWER_SERVICE: &str = "答案之书";

/// Indent applied to each line of the English answer
const ENGLISH_INDENT: &str = "    ";

/// Render the answer with its English original wrapped under an indent
pub fn render_answer_section(answer: &Answer, options: &ReportOptions) -> String {
    let formatter = options.formatter();
    let rule = options.rule();
    let budget = options.line_width.saturating_sub(ENGLISH_INDENT.len());

    let english = formatter
        .wrap(&answer.answer_en, budget)
        .iter()
        .map(|line| format!("{}{}", ENGLISH_INDENT, line))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "\n📖 答案之书\n{rule}\n{}\n\n{}\n{rule}\n💫 让答案指引你今天的方向\n",
        answer.answer,
        english,
        rule = rule
    )
}
