//! Settings loaded from environment-style key/value sources
//!
//! Keys:
//! - `LINE_WIDTH`, `NEWS_COUNT`: report layout
//! - `ENABLE_EMAIL`, `SMTP_SERVER`, `SMTP_PORT`, `SENDER_EMAIL`,
//!   `SENDER_PASSWORD`, `RECEIVER_EMAILS`: mail delivery
//!
//! The layout core never reads these itself; callers load [`Settings`] once
//! and pass [`ReportOptions`] down explicitly.

use std::fmt;
use std::str::FromStr;

use winnow::combinator::separated;
use winnow::token::take_while;
use winnow::PResult;
use winnow::Parser;

use crate::error::ReportError;
use crate::types::{ReportOptions, DEFAULT_LINE_WIDTH, DEFAULT_NEWS_COUNT};

pub const DEFAULT_SMTP_SERVER: &str = "smtp.qq.com";
pub const DEFAULT_SMTP_PORT: u16 = 587;

/// Mail delivery settings
#[derive(Clone, PartialEq, Eq)]
pub struct DeliverySettings {
    pub enabled: bool,
    pub smtp_server: String,
    pub smtp_port: u16,
    pub sender_email: String,
    pub sender_password: String,
    pub recipients: Vec<String>,
}

impl DeliverySettings {
    /// Hints for every setting that keeps delivery from running
    pub fn missing(&self) -> Vec<&'static str> {
        let mut hints = Vec::new();
        if !self.enabled {
            hints.push("设置 ENABLE_EMAIL=true 启用邮件发送");
        }
        if self.sender_email.is_empty() {
            hints.push("请配置 SENDER_EMAIL");
        }
        if self.sender_password.is_empty() {
            hints.push("请配置 SENDER_PASSWORD");
        }
        if self.recipients.is_empty() {
            hints.push("请配置 RECEIVER_EMAILS (多个邮箱用逗号分隔)");
        }
        hints
    }

    /// Enabled and fully configured
    pub fn is_ready(&self) -> bool {
        self.missing().is_empty()
    }
}

impl fmt::Debug for DeliverySettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let password = if self.sender_password.is_empty() {
            ""
        } else {
            "<redacted>"
        };
        f.debug_struct("DeliverySettings")
            .field("enabled", &self.enabled)
            .field("smtp_server", &self.smtp_server)
            .field("smtp_port", &self.smtp_port)
            .field("sender_email", &self.sender_email)
            .field("sender_password", &password)
            .field("recipients", &self.recipients)
            .finish()
    }
}

impl Default for DeliverySettings {
    fn default() -> Self {
        Self {
            enabled: true,
            smtp_server: DEFAULT_SMTP_SERVER.to_string(),
            smtp_port: DEFAULT_SMTP_PORT,
            sender_email: String::new(),
            sender_password: String::new(),
            recipients: Vec::new(),
        }
    }
}

/// Everything the report program reads from its environment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub report: ReportOptions,
    pub delivery: DeliverySettings,
}

impl Settings {
    /// Load settings from the process environment
    pub fn from_env() -> Result<Self, ReportError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings from any key lookup, falling back to defaults for absent keys
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ReportError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let report = ReportOptions {
            line_width: parse_number(&lookup, "LINE_WIDTH", DEFAULT_LINE_WIDTH)?,
            news_count: parse_number(&lookup, "NEWS_COUNT", DEFAULT_NEWS_COUNT)?,
            ..ReportOptions::default()
        };

        let delivery = DeliverySettings {
            enabled: lookup("ENABLE_EMAIL")
                .map(|v| v.to_lowercase() == "true")
                .unwrap_or(true),
            smtp_server: lookup("SMTP_SERVER").unwrap_or_else(|| DEFAULT_SMTP_SERVER.to_string()),
            smtp_port: parse_number(&lookup, "SMTP_PORT", DEFAULT_SMTP_PORT)?,
            sender_email: lookup("SENDER_EMAIL").unwrap_or_default(),
            sender_password: lookup("SENDER_PASSWORD").unwrap_or_default(),
            recipients: parse_recipients(&lookup("RECEIVER_EMAILS").unwrap_or_default())?,
        };

        Ok(Settings { report, delivery })
    }
}

/// Parse an integer setting, using `default` when the key is absent
fn parse_number<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ReportError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + fmt::Display,
    T::Err: fmt::Display,
{
    let Some(raw) = lookup(key) else {
        tracing::debug!(key, %default, "setting absent, using default");
        return Ok(default);
    };

    raw.trim()
        .parse()
        .map_err(|err: T::Err| ReportError::InvalidSetting {
            key: key.to_string(),
            value: raw.clone(),
            message: err.to_string(),
        })
}

/// One comma-free field of a recipient list
fn recipient_field<'s>(input: &mut &'s str) -> PResult<&'s str> {
    take_while(0.., |c: char| c != ',').parse_next(input)
}

/// Comma separated fields, possibly empty
fn recipient_list<'s>(input: &mut &'s str) -> PResult<Vec<&'s str>> {
    separated(0.., recipient_field, ',').parse_next(input)
}

/// Split a comma separated address list, trimming entries and dropping empty ones
pub fn parse_recipients(input: &str) -> Result<Vec<String>, ReportError> {
    let fields = recipient_list
        .parse(input)
        .map_err(|err| ReportError::InvalidSetting {
            key: "RECEIVER_EMAILS".to_string(),
            value: input.to_string(),
            message: err.to_string(),
        })?;

    Ok(fields
        .into_iter()
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .map(str::to_string)
        .collect())
}
