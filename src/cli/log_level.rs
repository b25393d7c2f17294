use clap::ValueEnum;
use tracing::level_filters::LevelFilter;

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum LogLevel {
    Debug,
    Info,
    #[default]
    Warn,
    Error,
    Silent,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Silent => LevelFilter::OFF,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case(LogLevel::Debug, LevelFilter::DEBUG)]
    #[case(LogLevel::Warn, LevelFilter::WARN)]
    #[case(LogLevel::Silent, LevelFilter::OFF)]
    fn converts_to_level_filter(#[case] level: LogLevel, #[case] expected: LevelFilter) {
        assert_eq!(LevelFilter::from(level), expected);
    }

    #[test]
    fn default_is_warn() {
        assert!(matches!(LogLevel::default(), LogLevel::Warn));
    }
}
