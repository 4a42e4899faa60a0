use std::fmt::Display;

/// The single line this tool prints to stdout for its supervisor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// Credential works; this is who it belongs to.
    Valid { first_name: String, id: u64 },
    /// Credential could not be loaded or was rejected.
    Invalid(String),
    /// Something broke outside of the check itself.
    Error(String),
}

impl Status {
    pub fn invalid(e: impl Display) -> Self {
        Self::Invalid(e.to_string())
    }

    pub fn error(e: impl Display) -> Self {
        Self::Error(e.to_string())
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Status::Valid { .. })
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Status::Valid { .. } => "VALID",
            Status::Invalid(_) => "INVALID",
            Status::Error(_) => "ERROR",
        }
    }

    /// Process exit code to go along with this status.
    pub fn exit_code(&self) -> u8 {
        match self {
            Status::Valid { .. } => 0,
            Status::Invalid(_) => 1,
            Status::Error(_) => 2,
        }
    }
}

/// Squash a free-text field so it can't break the line protocol:
/// no line breaks, no field separators.
fn field(text: &str) -> String {
    text.trim()
        .chars()
        .map(|c| match c {
            '\r' | '\n' => ' ',
            '|' => '/',
            c => c,
        })
        .collect()
}

impl Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Valid { first_name, id } => {
                write!(f, "{}|{}|{}", self.tag(), field(first_name), id)
            }
            Status::Invalid(msg) | Status::Error(msg) => {
                write!(f, "{}|{}", self.tag(), field(msg))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Status;

    #[test]
    fn formats_tags() {
        let valid = Status::Valid {
            first_name: "Herbert".to_owned(),
            id: 123456789,
        };
        assert_eq!(valid.to_string(), "VALID|Herbert|123456789");
        assert!(valid.is_valid());
        assert_eq!(valid.exit_code(), 0);

        let invalid = Status::invalid("Unauthorized");
        assert_eq!(invalid.to_string(), "INVALID|Unauthorized");
        assert!(!invalid.is_valid());
        assert_eq!(invalid.exit_code(), 1);

        let error = Status::error("no runtime");
        assert_eq!(error.to_string(), "ERROR|no runtime");
        assert_eq!(error.exit_code(), 2);
    }

    #[test]
    fn stays_on_one_line() {
        let status = Status::invalid("api said:\nnope\r\nreally nope\n");
        let line = status.to_string();
        assert_eq!(line.lines().count(), 1);
        assert_eq!(line, "INVALID|api said: nope  really nope");
    }

    #[test]
    fn keeps_field_count() {
        let status = Status::Valid {
            first_name: "a|b".to_owned(),
            id: 1,
        };
        assert_eq!(status.to_string().split('|').count(), 3);

        let status = Status::invalid("x | y | z");
        assert_eq!(status.to_string(), "INVALID|x / y / z");
    }
}
