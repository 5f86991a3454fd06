//! Width-aware padding, wrapping and numbered-entry layout
//!
//! Every operation here is pure and never fails: empty strings, zero
//! budgets and scalars wider than the budget all produce well-defined
//! (if degenerate) output.

use crate::text::WidthPolicy;

/// Horizontal alignment for [`pad`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    /// Text first, spaces after
    #[default]
    Left,
    /// Spaces first, text after
    Right,
    /// Smaller half of the padding before, larger half after
    Center,
}

impl Align {
    /// Parse alignment from string
    pub fn parse(s: &str) -> Option<Align> {
        match s.trim().to_lowercase().as_str() {
            "left" => Some(Align::Left),
            "right" => Some(Align::Right),
            "center" | "centre" => Some(Align::Center),
            _ => None,
        }
    }
}

/// Lays out text in fixed-width columns using a [`WidthPolicy`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayWidthFormatter {
    policy: WidthPolicy,
}

impl DisplayWidthFormatter {
    pub fn new(policy: WidthPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> WidthPolicy {
        self.policy
    }

    pub fn display_width(&self, text: &str) -> usize {
        self.policy.str_width(text)
    }

    /// Pad `text` with ASCII spaces up to `width` display columns.
    ///
    /// Text that already fills or overflows `width` comes back unchanged;
    /// nothing is ever truncated.
    pub fn pad(&self, text: &str, width: usize, align: Align) -> String {
        let used = self.display_width(text);
        if used >= width {
            return text.to_string();
        }
        let padding = width - used;

        match align {
            Align::Left => format!("{}{}", text, " ".repeat(padding)),
            Align::Right => format!("{}{}", " ".repeat(padding), text),
            Align::Center => {
                let left = padding / 2;
                let right = padding - left;
                format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
            }
        }
    }

    /// Greedily split `text` into segments of at most `width` columns.
    ///
    /// Text that already fits is returned as a single untouched segment,
    /// which makes `wrap("", n)` yield `[""]`. A wide scalar that cannot fit
    /// even on an empty line is emitted on a line of its own.
    pub fn wrap(&self, text: &str, width: usize) -> Vec<String> {
        if self.display_width(text) <= width {
            return vec![text.to_string()];
        }

        let mut lines = Vec::new();
        let mut current = String::new();
        let mut current_width = 0;

        for c in text.chars() {
            let w = self.policy.char_width(c);

            if current_width + w <= width {
                current.push(c);
                current_width += w;
            } else if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current.push(c);
                current_width = w;
            } else {
                lines.push(c.to_string());
                current_width = 0;
            }
        }

        if !current.is_empty() {
            lines.push(current);
        }

        lines
    }

    /// Format `text` as entry `index` of a numbered list within `width`.
    ///
    /// The first line carries a `"{index:>2}. "` prefix; continuation lines
    /// are indented by the prefix width. Lines are joined with `\n` and the
    /// result has no trailing newline. When the prefix alone fills `width`
    /// the content budget saturates to zero and every scalar lands on its
    /// own line.
    pub fn format_numbered_entry(&self, index: usize, text: &str, width: usize) -> String {
        let prefix = format!("{:>2}. ", index);
        let prefix_width = self.display_width(&prefix);
        let content_width = width.saturating_sub(prefix_width);

        if self.display_width(text) <= content_width {
            return format!("{}{}", prefix, text);
        }

        let segments = self.wrap(text, content_width);
        let mut lines = Vec::with_capacity(segments.len());
        let indent = " ".repeat(prefix_width);

        for (i, segment) in segments.iter().enumerate() {
            if i == 0 {
                lines.push(format!("{}{}", prefix, segment));
            } else {
                // Already exactly prefix_width wide; kept so the indent always
                // matches the measured prefix.
                let padded = self.pad(&indent, prefix_width, Align::Left);
                lines.push(format!("{}{}", padded, segment));
            }
        }

        lines.join("\n")
    }
}

/// Pad `text` to `width` columns under the default width policy
pub fn pad(text: &str, width: usize, align: Align) -> String {
    DisplayWidthFormatter::default().pad(text, width, align)
}

/// Wrap `text` into segments of at most `width` columns under the default width policy
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    DisplayWidthFormatter::default().wrap(text, width)
}

/// Format a numbered list entry under the default width policy
pub fn format_numbered_entry(index: usize, text: &str, width: usize) -> String {
    DisplayWidthFormatter::default().format_numbered_entry(index, text, width)
}
