#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),
    #[error(transparent)]
    YAML(#[from] serde_yaml::Error),
    #[error(transparent)]
    Regex(#[from] fancy_regex::Error),
    #[error(transparent)]
    AhoCorasick(#[from] aho_corasick::BuildError),
    #[error("matcher #{index} in `{table}` must set exactly one of `keyword` or `pattern`")]
    InvalidMatcher { table: &'static str, index: usize },
    #[error("unknown device category `{0}`")]
    UnknownCategory(String),
    #[error("no presentation entry for category `{0}`")]
    MissingCategory(&'static str),
    #[error("presentation field `{field}` is empty for `{entry}`")]
    EmptyField { entry: String, field: &'static str },
}

pub type Result<T> = std::result::Result<T, Error>;
