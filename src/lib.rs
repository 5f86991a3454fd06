//! digest-layout - Width-aware plain-text layout for CJK daily digest mails
//!
//! Column budgets are counted in display width, where CJK Unified
//! Ideographs take two columns and everything else takes one.
//!
//! # Padding and Wrapping Example
//! ```
//! use digest_layout::{display_width, pad, wrap, Align};
//!
//! assert_eq!(display_width("中A"), 3);
//! assert_eq!(pad("中", 5, Align::Center), " 中  ");
//! assert_eq!(wrap("中文ab中文", 5), vec!["中文a", "b中文"]);
//! ```
//!
//! # Numbered Entry Example
//! ```
//! use digest_layout::format_numbered_entry;
//!
//! let entry = format_numbered_entry(3, "一二三四五六七", 10);
//! assert_eq!(entry, " 3. 一二三\n    四五六\n    七");
//! ```
//!
//! # Daily Report Example
//! ```
//! use digest_layout::{Answer, DailyReport, Fetched, NewsDigest, ReportOptions};
//!
//! let report = DailyReport {
//!     news: Fetched::Data(NewsDigest {
//!         date: "2025-08-01".to_string(),
//!         lunar_date: "六月初八".to_string(),
//!         day_of_week: "星期五".to_string(),
//!         news: vec!["短消息".to_string()],
//!     }),
//!     answer: Fetched::Unreachable,
//!     generated_at: "2025-08-01 07:30:00".to_string(),
//! };
//! let body = report.render(&ReportOptions::default());
//! assert!(body.contains(" 1. 短消息\n"));
//! assert!(body.contains("❌ 无法获取答案之书"));
//! ```
//!
//! # Settings Example
//! ```
//! use digest_layout::Settings;
//!
//! let settings = Settings::from_lookup(|key| match key {
//!     "LINE_WIDTH" => Some("40".to_string()),
//!     "RECEIVER_EMAILS" => Some("a@example.com, b@example.com".to_string()),
//!     _ => None,
//! })
//! .unwrap();
//! assert_eq!(settings.report.line_width, 40);
//! assert_eq!(settings.delivery.recipients.len(), 2);
//! ```

mod config;
mod error;
mod layout;
mod report;
mod text;
mod types;

pub use config::{parse_recipients, DeliverySettings, Settings};
pub use error::ReportError;
pub use layout::{format_numbered_entry, pad, wrap, Align, DisplayWidthFormatter};
pub use report::{
    moon_icon, news_subject, render_answer_section, render_news_section, render_weather_report,
    unavailable_section, unreachable_section, uv_description, weather_icon, weather_subject,
    DailyReport, ANSWER_SERVICE, NEWS_SERVICE,
};
pub use text::{display_width, is_cjk_ideograph, WidthPolicy};
pub use types::{
    Answer, DailyForecast, Fetched, NewsDigest, ReportOptions, DEFAULT_LINE_WIDTH,
    DEFAULT_NEWS_COUNT,
};
