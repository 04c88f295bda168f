/// Whether a delimiter opens or closes a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Opening,
    Closing,
}

/// One colon delimiter recognized on one line.
///
/// `colon_count` is always at least 2. `name` is set for openings only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimiterToken {
    pub line: usize,
    pub colon_count: usize,
    pub role: Role,
    pub name: Option<String>,
}

impl DelimiterToken {
    pub fn opening(line: usize, colon_count: usize, name: impl Into<String>) -> Self {
        Self {
            line,
            colon_count,
            role: Role::Opening,
            name: Some(name.into()),
        }
    }

    pub fn closing(line: usize, colon_count: usize) -> Self {
        Self {
            line,
            colon_count,
            role: Role::Closing,
            name: None,
        }
    }

    pub fn is_opening(&self) -> bool {
        self.role == Role::Opening
    }
}
