use std::sync::Arc;

/// An error that can occur in rowboat.
///
/// Kept at one word via `Arc` so `Result<T>` stays cheap to move around.
#[derive(Clone)]
pub struct Error {
    inner: Arc<ErrorInner>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
}

#[derive(Debug)]
enum ErrorKind {
    /// Invalid clause input caught before any SQL is compiled.
    Validation(String),

    /// Lookup against an unregistered model or relation name.
    Configuration(String),

    /// Statement execution failure surfaced by the connection adapter.
    /// Never caught or retried locally.
    Driver(anyhow::Error),

    /// Bridge for everything else.
    Anyhow(anyhow::Error),
}

impl Error {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::from(ErrorKind::Validation(message.into()))
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::from(ErrorKind::Configuration(message.into()))
    }

    pub fn driver(cause: impl Into<anyhow::Error>) -> Self {
        Self::from(ErrorKind::Driver(cause.into()))
    }

    pub fn msg(message: impl std::fmt::Display) -> Self {
        Self::from(ErrorKind::Anyhow(anyhow::anyhow!("{message}")))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self.inner.kind, ErrorKind::Validation(_))
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self.inner.kind, ErrorKind::Configuration(_))
    }

    pub fn is_driver(&self) -> bool {
        matches!(self.inner.kind, ErrorKind::Driver(_))
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match &self.inner.kind {
            ErrorKind::Validation(msg) => write!(f, "validation error: {msg}"),
            ErrorKind::Configuration(msg) => write!(f, "configuration error: {msg}"),
            ErrorKind::Driver(err) => write!(f, "driver error: {err}"),
            ErrorKind::Anyhow(err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if f.alternate() {
            f.debug_struct("Error").field("kind", &self.inner.kind).finish()
        } else {
            core::fmt::Display::fmt(self, f)
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.inner.kind {
            ErrorKind::Driver(err) | ErrorKind::Anyhow(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self {
            inner: Arc::new(ErrorInner { kind }),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::from(ErrorKind::Anyhow(err))
    }
}
