//! Plain-text weather forecast report
//!
//! Each forecast day becomes a block of label/value rows. Labels share one
//! left-aligned column; long values wrap under the value column.

use crate::error::ReportError;
use crate::layout::{Align, DisplayWidthFormatter};
use crate::types::{DailyForecast, ReportOptions};

/// Indent before the label column
const ROW_INDENT: &str = "  ";
/// Gap between the label and value columns
const COLUMN_GAP: &str = "  ";

/// Icon for a weather description, 🌈 when unknown
pub fn weather_icon(text: &str) -> &'static str {
    match text {
        "晴" => "☀️",
        "多云" => "⛅",
        "小雨" => "🌦️",
        "中雨" => "🌧️",
        "大雨" => "💦",
        "阴" => "☁️",
        _ => "🌈",
    }
}

/// Icon for a moon phase, 🌙 when unknown
pub fn moon_icon(phase: &str) -> &'static str {
    match phase {
        "下弦月" => "🌗",
        "残月" => "🌘",
        "新月" => "🌑",
        "上弦月" => "🌓",
        "满月" => "🌕",
        _ => "🌙",
    }
}

/// UV index as "{level} ({index})"; non-numeric or out of range indexes read 未知
pub fn uv_description(uv_index: &str) -> String {
    let level = match uv_index.trim().parse::<u32>() {
        Ok(0..=1) => "很低",
        Ok(2) => "低",
        Ok(3..=5) => "中等",
        Ok(6..=7) => "高",
        Ok(8..=9) => "很高",
        Ok(10..=11) => "极高",
        _ => "未知",
    };
    format!("{} ({})", level, uv_index)
}

/// Label/value rows shown for one day
fn detail_rows(day: &DailyForecast) -> Vec<(&'static str, String)> {
    vec![
        (
            "天气",
            format!(
                "{} {} / {} {}",
                day.text_day,
                weather_icon(&day.text_day),
                day.text_night,
                weather_icon(&day.text_night)
            ),
        ),
        ("温度", format!("{}°C / {}°C", day.temp_max, day.temp_min)),
        ("降水量", format!("{} mm", day.precip)),
        ("紫外线", uv_description(&day.uv_index)),
        ("湿度", format!("{}% 💧", day.humidity)),
        ("能见度", format!("{} km 👁️", day.vis)),
        ("气压", format!("{} hPa", day.pressure)),
        ("云量", format!("{}%", day.cloud)),
        (
            "白天风向",
            format!(
                "{} {} ({}公里/小时)",
                day.wind_dir_day, day.wind_scale_day, day.wind_speed_day
            ),
        ),
        (
            "夜晚风向",
            format!(
                "{} {} ({}公里/小时)",
                day.wind_dir_night, day.wind_scale_night, day.wind_speed_night
            ),
        ),
    ]
}

/// Render one day's block, rows terminated by newlines
fn render_day(day: &DailyForecast, formatter: &DisplayWidthFormatter, line_width: usize) -> String {
    let rows = detail_rows(day);
    let label_width = rows
        .iter()
        .map(|(label, _)| formatter.display_width(label))
        .max()
        .unwrap_or(0);
    let value_column = ROW_INDENT.len() + label_width + COLUMN_GAP.len();
    let value_width = line_width.saturating_sub(value_column);
    let continuation = " ".repeat(value_column);

    let mut output = format!("{} {} {}\n", day.date, moon_icon(&day.moon_phase), day.moon_phase);
    for (label, value) in &rows {
        let label = formatter.pad(label, label_width, Align::Left);
        for (i, segment) in formatter.wrap(value, value_width).iter().enumerate() {
            if i == 0 {
                output.push_str(&format!("{}{}{}{}\n", ROW_INDENT, label, COLUMN_GAP, segment));
            } else {
                output.push_str(&format!("{}{}\n", continuation, segment));
            }
        }
    }
    output
}

/// First and last forecast dates
fn date_range(days: &[DailyForecast]) -> Result<(&str, &str), ReportError> {
    match (days.first(), days.last()) {
        (Some(first), Some(last)) => Ok((first.date.as_str(), last.date.as_str())),
        _ => Err(ReportError::EmptyInput("forecast days")),
    }
}

/// Render a multi-day forecast as plain text
///
/// # Arguments
/// * `days` - Forecast days in date order
/// * `updated_at` - Timestamp printed in the footer
/// * `options` - Line width and width policy
///
/// # Returns
/// * `Ok(String)` - Rendered report
/// * `Err(ReportError::EmptyInput)` - No forecast days given
pub fn render_weather_report(
    days: &[DailyForecast],
    updated_at: &str,
    options: &ReportOptions,
) -> Result<String, ReportError> {
    let (start, end) = date_range(days)?;
    let formatter = options.formatter();
    let rule = options.rule();
    let title = formatter.pad("📊 天气预报报告", options.line_width, Align::Center);
    let range = formatter.pad(&format!("{} - {}", start, end), options.line_width, Align::Center);

    let mut output = String::new();
    output.push_str(&format!("{}\n", title.trim_end()));
    output.push_str(&format!("{}\n", range.trim_end()));
    output.push_str(&format!("{}\n", rule));

    for day in days {
        output.push_str(&render_day(day, &formatter, options.line_width));
        output.push('\n');
    }

    output.push_str(&format!("{}\n", rule));
    output.push_str(&format!(
        "数据更新时间: {} | 祝你度过愉快的一天! 🌈\n",
        updated_at
    ));

    Ok(output)
}

/// Mail subject for a forecast covering `days`
pub fn weather_subject(days: &[DailyForecast]) -> Result<String, ReportError> {
    let (start, end) = date_range(days)?;
    Ok(format!("📊 天气预报 {} - {}", start, end))
}
