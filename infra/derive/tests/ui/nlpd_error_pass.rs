use nlpd_derive::nlpd_error;
use std::borrow::Cow;

#[nlpd_error]
pub enum SelectionError {
    #[error("Parse error{}: {source}", format_context(.context))]
    Parse {
        #[source]
        source: std::num::ParseIntError,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse(raw: &str) -> Result<u32, SelectionError> {
    raw.parse::<u32>().context("num_layers")
}

fn main() {
    let _ = parse("12");
}
