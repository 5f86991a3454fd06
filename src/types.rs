use crate::layout::DisplayWidthFormatter;
use crate::text::WidthPolicy;

/// Default column budget for plain-text reports
pub const DEFAULT_LINE_WIDTH: usize = 36;
/// Default number of news items shown
pub const DEFAULT_NEWS_COUNT: usize = 15;

/// One day of the "60 seconds" news digest
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewsDigest {
    pub date: String,
    pub lunar_date: String,
    pub day_of_week: String,
    pub news: Vec<String>,
}

/// Answer-book entry, Chinese answer with its English original
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Answer {
    pub answer: String,
    pub answer_en: String,
}

/// One forecast day, values kept as the weather API reports them
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DailyForecast {
    pub date: String,
    pub text_day: String,
    pub text_night: String,
    pub temp_max: String,
    pub temp_min: String,
    pub wind_dir_day: String,
    pub wind_scale_day: String,
    /// km/h
    pub wind_speed_day: String,
    pub wind_dir_night: String,
    pub wind_scale_night: String,
    /// km/h
    pub wind_speed_night: String,
    /// Total precipitation, mm
    pub precip: String,
    pub uv_index: String,
    /// Relative humidity, percent
    pub humidity: String,
    /// Visibility, km
    pub vis: String,
    pub moon_phase: String,
    /// hPa
    pub pressure: String,
    /// Cloud cover, percent
    pub cloud: String,
}

/// Outcome of fetching one report section
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fetched<T> {
    /// Payload decoded successfully
    Data(T),
    /// Service answered but the payload had no usable data
    Malformed,
    /// Request failed before any payload arrived
    Unreachable,
}

impl<T> Fetched<T> {
    pub fn as_ref(&self) -> Fetched<&T> {
        match self {
            Fetched::Data(data) => Fetched::Data(data),
            Fetched::Malformed => Fetched::Malformed,
            Fetched::Unreachable => Fetched::Unreachable,
        }
    }
}

impl<T> From<Option<T>> for Fetched<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(data) => Fetched::Data(data),
            None => Fetched::Unreachable,
        }
    }
}

/// Options for rendering reports
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    /// Column budget of every report line
    pub line_width: usize,
    /// Maximum number of news items rendered
    pub news_count: usize,
    /// Narrow/wide classification used for layout
    pub width_policy: WidthPolicy,
}

impl ReportOptions {
    /// Formatter configured with this report's width policy
    pub fn formatter(&self) -> DisplayWidthFormatter {
        DisplayWidthFormatter::new(self.width_policy)
    }

    /// Horizontal rule spanning the full line width
    pub fn rule(&self) -> String {
        "=".repeat(self.line_width)
    }
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            line_width: DEFAULT_LINE_WIDTH,
            news_count: DEFAULT_NEWS_COUNT,
            width_policy: WidthPolicy::default(),
        }
    }
}
