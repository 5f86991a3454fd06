use digest_layout::{
    display_width, format_numbered_entry, news_subject, pad, parse_recipients,
    render_answer_section, render_news_section, render_weather_report, wrap, Align, Answer,
    DailyForecast, DailyReport, DisplayWidthFormatter, Fetched, NewsDigest, ReportError,
    ReportOptions, Settings, WidthPolicy,
};
use insta::assert_snapshot;

fn digest() -> NewsDigest {
    NewsDigest {
        date: "2025-08-01".to_string(),
        lunar_date: "六月初八".to_string(),
        day_of_week: "星期五".to_string(),
        news: vec![
            "新华社：今日多地高温".to_string(),
            "Rust发布1.80版本新增LazyLock支持".to_string(),
        ],
    }
}

fn forecast_day() -> DailyForecast {
    DailyForecast {
        date: "2025-08-01".to_string(),
        text_day: "多云".to_string(),
        text_night: "大雨".to_string(),
        temp_max: "31".to_string(),
        temp_min: "22".to_string(),
        wind_dir_day: "南风".to_string(),
        wind_scale_day: "1-3".to_string(),
        wind_speed_day: "3".to_string(),
        wind_dir_night: "北风".to_string(),
        wind_scale_night: "1-3".to_string(),
        wind_speed_night: "2".to_string(),
        precip: "0.0".to_string(),
        uv_index: "7".to_string(),
        humidity: "65".to_string(),
        vis: "25".to_string(),
        moon_phase: "满月".to_string(),
        pressure: "1002".to_string(),
        cloud: "10".to_string(),
    }
}

#[test]
fn test_display_width_examples() {
    assert_eq!(display_width(""), 0);
    assert_eq!(display_width("A"), 1);
    assert_eq!(display_width("中"), 2);
    assert_eq!(display_width("中A"), 3);
}

#[test]
fn test_pad_examples() {
    assert_eq!(pad("AB", 5, Align::Left), "AB   ");
    assert_eq!(pad("AB", 5, Align::Right), "   AB");
    assert_eq!(pad("中", 5, Align::Center), " 中  ");
}

#[test]
fn test_wrap_returns_input_when_it_fits() {
    let text = "中文 and ASCII";
    assert_eq!(wrap(text, display_width(text)), vec![text]);
}

#[test]
fn test_numbered_entry_short_text() {
    assert_eq!(format_numbered_entry(1, "短消息", 20), " 1. 短消息");
}

#[test]
fn test_numbered_entry_long_text() {
    let out = format_numbered_entry(3, "今天天气很好适合出门散步", 10);
    let lines: Vec<&str> = out.lines().collect();
    assert!(lines.len() > 1);
    assert!(lines[0].starts_with(" 3. "));
    for line in &lines[1..] {
        assert!(line.starts_with("    "));
        assert!(!line[4..].starts_with(' '));
    }
    for line in &lines {
        assert!(display_width(line) <= 10, "{:?} overflows", line);
    }
}

#[test]
fn test_news_section_snapshot() {
    let options = ReportOptions {
        line_width: 20,
        ..ReportOptions::default()
    };
    let output = render_news_section(&digest(), &options);
    assert!(output.starts_with('\n'));
    assert_snapshot!(output.trim(), @r"
    🌅 每日60秒早报
    ====================
    📅 2025-08-01 六月初八 星期五
    📊 共2条新闻
    ====================
    📰 今日要闻
     1. 新华社：今日多地
        高温
     2. Rust发布1.80版本
        新增LazyLock支持

    ====================
    💡 每天60秒，知晓天下事
    ");
}

#[test]
fn test_weather_report_snapshot() {
    let output = render_weather_report(
        &[forecast_day()],
        "2025-08-01 08:00:00",
        &ReportOptions::default(),
    )
    .unwrap();
    let (header, body) = output.split_once("====").unwrap();
    assert!(header.contains("📊 天气预报报告"));
    assert!(header.contains("2025-08-01 - 2025-08-01"));
    assert_snapshot!(body.trim_start_matches('=').trim(), @r"
    2025-08-01 🌕 满月
      天气      多云 ⛅ / 大雨 💦
      温度      31°C / 22°C
      降水量    0.0 mm
      紫外线    高 (7)
      湿度      65% 💧
      能见度    25 km 👁️
      气压      1002 hPa
      云量      10%
      白天风向  南风 1-3 (3公里/小时)
      夜晚风向  北风 1-3 (2公里/小时)

    ====================================
    数据更新时间: 2025-08-01 08:00:00 | 祝你度过愉快的一天! 🌈
    ");
}

#[test]
fn test_weather_header_centered() {
    let output = render_weather_report(
        &[forecast_day()],
        "now",
        &ReportOptions::default(),
    )
    .unwrap();
    let first = output.lines().next().unwrap();
    // 36 columns minus a 14-column title leaves 11 spaces on the left
    assert_eq!(first, format!("{}📊 天气预报报告", " ".repeat(11)));
}

#[test]
fn test_empty_weather_report() {
    let result = render_weather_report(&[], "now", &ReportOptions::default());
    assert!(matches!(result, Err(ReportError::EmptyInput(_))));
}

#[test]
fn test_answer_section() {
    let answer = Answer {
        answer: "顺其自然".to_string(),
        answer_en: "Let it be".to_string(),
    };
    let output = render_answer_section(&answer, &ReportOptions::default());
    assert!(output.contains("\n顺其自然\n\n    Let it be\n"));
}

#[test]
fn test_daily_report_sections_in_order() {
    let report = DailyReport {
        news: Fetched::Data(digest()),
        answer: Fetched::Data(Answer {
            answer: "顺其自然".to_string(),
            answer_en: "Let it be".to_string(),
        }),
        generated_at: "2025-08-01 07:30:00".to_string(),
    };
    let output = report.render(&ReportOptions::default());
    let title = output.find("✨ 每日智慧报告 ✨").unwrap();
    let news = output.find("🌅 每日60秒早报").unwrap();
    let answer = output.find("📖 答案之书").unwrap();
    let closing = output.find("🌟 祝您有美好的一天！ 🌟").unwrap();
    assert!(title < news && news < answer && answer < closing);
    assert!(output.contains("生成时间: 2025-08-01 07:30:00\n"));
}

#[test]
fn test_daily_report_malformed_news() {
    let report = DailyReport {
        news: Fetched::Malformed,
        answer: Fetched::Unreachable,
        generated_at: "2025-08-01 07:30:00".to_string(),
    };
    let output = report.render(&ReportOptions::default());
    assert!(output.contains("❌ 60秒资讯获取失败\n请检查网络连接或稍后重试\n"));
    assert!(output.contains("❌ 无法获取答案之书"));
}

#[test]
fn test_east_asian_policy_through_options() {
    let options = ReportOptions {
        line_width: 12,
        width_policy: WidthPolicy::EastAsian,
        ..ReportOptions::default()
    };
    let digest = NewsDigest {
        news: vec!["ひらがなのニュース".to_string()],
        ..NewsDigest::default()
    };
    let output = render_news_section(&digest, &options);
    assert!(output.contains(" 1. ひらがな\n    のニュー\n    ス\n"));

    let cjk = DisplayWidthFormatter::default();
    assert_eq!(
        cjk.format_numbered_entry(1, "ひらがなのニュース", 14),
        " 1. ひらがなのニュース"
    );
}

#[test]
fn test_settings_drive_rendering() {
    let settings = Settings::from_lookup(|key| match key {
        "LINE_WIDTH" => Some("20".to_string()),
        "NEWS_COUNT" => Some("1".to_string()),
        _ => None,
    })
    .unwrap();
    let output = render_news_section(&digest(), &settings.report);
    assert!(output.contains("====================\n"));
    assert!(output.contains(" 1. 新华社"));
    assert!(!output.contains(" 2. "));
}

#[test]
fn test_recipients_and_subject() {
    assert_eq!(
        parse_recipients("a@example.com,b@example.com").unwrap(),
        vec!["a@example.com", "b@example.com"]
    );
    assert_eq!(news_subject("2025-08-01"), "📰 每日资讯 - 2025-08-01");
}
