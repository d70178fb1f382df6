use strum::EnumMessage;
use strum_macros::{Display, EnumMessage};

/// Why an operation could not visit its input.
///
/// An operation checks its inputs before it invokes any callback: the
/// sequence first, then the callback. If both are absent the sequence is
/// reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumMessage)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Error {
    /// Sequence absent.
    ///
    /// No sequence was supplied. This is distinct from an empty sequence,
    /// which is valid input and visits nothing.
    #[strum(to_string = "sequence is absent")]
    MissingSequence,
    /// Callback absent.
    ///
    /// No callback, predicate or reducer was supplied, so there is no rule
    /// to apply to the elements.
    #[strum(to_string = "callback is absent")]
    MissingCallback,
}

impl Error {
    /// Attach the neutral result of the failed operation.
    pub fn with_neutral<V>(self, neutral: V) -> NeutralError<V> {
        NeutralError {
            error: self,
            neutral,
        }
    }

    pub fn message(&self) -> &str {
        self.documentation_pieces().0
    }

    pub fn note(&self) -> &str {
        self.documentation_pieces().1
    }

    fn documentation_pieces(&self) -> (&str, &str) {
        if let Some(documentation) = self.get_documentation() {
            let mut pieces = documentation.splitn(2, "\n\n");
            let first = pieces.next().unwrap_or("");
            let second = pieces.next().unwrap_or("");
            (first, second)
        } else {
            ("", "")
        }
    }
}

impl std::error::Error for Error {}

/// A failure kind together with the neutral result of the operation.
///
/// The neutral result is what the operation produces when it cannot
/// proceed: an empty `Vec` for `map` and `filter`, `()` for `for_each`,
/// and the untouched initial accumulator for the folds. No callback has
/// been invoked when this is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeutralError<V> {
    error: Error,
    neutral: V,
}

impl<V> NeutralError<V> {
    /// The failure kind.
    pub fn error(&self) -> Error {
        self.error
    }

    /// The neutral result, by reference.
    pub fn neutral(&self) -> &V {
        &self.neutral
    }

    /// Take the neutral result, discarding the failure kind.
    pub fn into_neutral(self) -> V {
        self.neutral
    }
}

impl<V> std::fmt::Display for NeutralError<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl<V: std::fmt::Debug> std::error::Error for NeutralError<V> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

impl<V> From<NeutralError<V>> for Error {
    fn from(e: NeutralError<V>) -> Self {
        e.error
    }
}

pub type Result<V> = std::result::Result<V, NeutralError<V>>;

/// Collapse a [`Result`] to its value.
///
/// Callers that treat invalid input the same as empty input use this to
/// get the neutral result without inspecting the failure.
pub trait NeutralExt<V> {
    fn or_neutral(self) -> V;
}

impl<V> NeutralExt<V> for Result<V> {
    fn or_neutral(self) -> V {
        match self {
            Ok(value) => value,
            Err(e) => e.into_neutral(),
        }
    }
}
