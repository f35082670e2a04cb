use std::borrow::Cow;

/// Errors raised while setting up logging for a tool run.
#[nlpd_derive::nlpd_error]
pub enum LoggerError {
    /// The configured level is not a tracing level name.
    #[error("Invalid log level '{level}'{}", format_context(.context))]
    InvalidLevel { level: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Log directory error{}: {source}", format_context(.context))]
    Directory { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Log file error{}: {source}", format_context(.context))]
    Appender { source: tracing_appender::rolling::InitError, context: Option<Cow<'static, str>> },

    /// Another subscriber already owns this process.
    #[error("Tracing subscriber error{}: {source}", format_context(.context))]
    Subscriber {
        source: tracing_subscriber::util::TryInitError,
        context: Option<Cow<'static, str>>,
    },
}
