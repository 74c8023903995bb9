use bertcodec_term::TermError;

/// Errors that can occur while mapping between values and BERT terms.
#[derive(Debug, thiserror::Error)]
pub enum BertError {
    /// A regex carries flags with no BERT option, or a decoded option is unknown.
    #[error("unsupported regex option: {0}")]
    UnsupportedOption(String),

    /// A tuple headed by `bert` matches no known tag shape.
    #[error("invalid bert tag: {0}")]
    InvalidBertTag(String),

    /// A dict key or regex pattern is not valid UTF-8.
    #[error("invalid utf-8 in {context}: {source}")]
    InvalidUtf8 {
        context: &'static str,
        #[source]
        source: std::str::Utf8Error,
    },

    /// The primitive term codec failed.
    #[error("term codec error: {0}")]
    Term(#[from] TermError),
}

pub type Result<T> = std::result::Result<T, BertError>;
