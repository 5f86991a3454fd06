//! "每日60秒" news digest section

use crate::types::{NewsDigest, ReportOptions};

/// Service name used in fallback messages
pub const NEWS_SERVICE: &str = "60秒资讯";

/// Render the digest header, numbered news items and footer
pub fn render_news_section(digest: &NewsDigest, options: &ReportOptions) -> String {
    let formatter = options.formatter();
    let rule = options.rule();
    let mut output = String::new();

    output.push('\n');
    output.push_str("🌅 每日60秒早报\n");
    output.push_str(&format!("{}\n", rule));
    output.push_str(&format!(
        "📅 {} {} {}\n",
        digest.date, digest.lunar_date, digest.day_of_week
    ));
    output.push_str(&format!("📊 共{}条新闻\n", digest.news.len()));
    output.push_str(&format!("{}\n", rule));
    output.push_str("📰 今日要闻\n");

    if digest.news.len() > options.news_count {
        tracing::debug!(
            total = digest.news.len(),
            shown = options.news_count,
            "truncating news list"
        );
    }

    for (i, item) in digest.news.iter().take(options.news_count).enumerate() {
        let entry = formatter.format_numbered_entry(i + 1, item.trim(), options.line_width);
        output.push_str(&entry);
        output.push('\n');
    }

    output.push('\n');
    output.push_str(&format!("{}\n", rule));
    output.push_str("💡 每天60秒，知晓天下事\n");

    output
}

/// Mail subject for the daily digest sent on `date`
pub fn news_subject(date: &str) -> String {
    format!("📰 每日资讯 - {}", date)
}
