/// Three-byte format tag of a verbatim plain-text reply.
pub const TEXT_FORMAT: &str = "txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Text the client should display unmodified, tagged with its format.
    Verbatim { format: &'static str, body: String },
    Error(String),
}

impl Reply {
    #[must_use]
    pub fn text(body: String) -> Self {
        Self::Verbatim {
            format: TEXT_FORMAT,
            body,
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Body of a verbatim reply, `None` for errors.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Verbatim { body, .. } => Some(body),
            Self::Error(_) => None,
        }
    }
}
