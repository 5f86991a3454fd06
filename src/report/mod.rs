//! Report assembly
//!
//! Sections are rendered independently and concatenated into the daily
//! mail body. A section whose data could not be fetched renders a short
//! fallback instead of failing the whole report.

mod answer;
mod news;
mod weather;

pub use answer::{render_answer_section, ANSWER_SERVICE};
pub use news::{news_subject, render_news_section, NEWS_SERVICE};
pub use weather::{
    moon_icon, render_weather_report, uv_description, weather_icon, weather_subject,
};

use crate::types::{Answer, Fetched, NewsDigest, ReportOptions};

/// Fallback for a service that answered without usable data
pub fn unavailable_section(service: &str) -> String {
    format!("\n❌ {}获取失败\n请检查网络连接或稍后重试\n", service)
}

/// Fallback for a service that could not be reached at all
pub fn unreachable_section(service: &str) -> String {
    format!("❌ 无法获取{}", service)
}

/// Render a fetched section, substituting the matching fallback
fn render_or_fallback<T>(
    fetched: Fetched<&T>,
    service: &str,
    render: impl FnOnce(&T) -> String,
) -> String {
    match fetched {
        Fetched::Data(data) => render(data),
        Fetched::Malformed => {
            tracing::warn!(service, "section payload had no data, rendering fallback");
            unavailable_section(service)
        }
        Fetched::Unreachable => {
            tracing::warn!(service, "section could not be fetched, rendering fallback");
            unreachable_section(service)
        }
    }
}

/// Inputs of one daily report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyReport {
    pub news: Fetched<NewsDigest>,
    pub answer: Fetched<Answer>,
    /// Timestamp shown under the title, `YYYY-MM-DD HH:MM:SS`
    pub generated_at: String,
}

impl DailyReport {
    /// Render the full mail body
    pub fn render(&self, options: &ReportOptions) -> String {
        let news = render_or_fallback(self.news.as_ref(), NEWS_SERVICE, |digest| {
            render_news_section(digest, options)
        });
        let answer = render_or_fallback(self.answer.as_ref(), ANSWER_SERVICE, |answer| {
            render_answer_section(answer, options)
        });

        format!(
            "\n✨ 每日智慧报告 ✨\n生成时间: {}\n\n{}\n\n{}\n\n🌟 祝您有美好的一天！ 🌟\n",
            self.generated_at, news, answer
        )
    }
}
