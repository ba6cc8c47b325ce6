//! Sort-specification parsing.
//!
//! The `sort` query parameter is a comma-joined list of `field direction`
//! tokens, e.g. `fullname asc,dob desc`. Tokens are matched against a column
//! whitelist; anything unrecognized is dropped, so arbitrary input can never
//! reach the ORDER BY clause.

/// Public sort field names and the columns they map to.
const SORTABLE: &[(&str, &str)] = &[
    ("fullname", "full_name"),
    ("peopleid", "people_id"),
    ("dob", "date_of_birth"),
    ("status", "status"),
    ("manager", "manager"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    fn parse(raw: &str) -> Option<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// One parsed `field direction` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortToken {
    field: &'static str,
    column: &'static str,
    pub direction: Direction,
}

impl SortToken {
    #[must_use]
    pub fn field(&self) -> &'static str {
        self.field
    }
}

/// An ordered sequence of sort tokens. Empty means default (unordered).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortSpec {
    tokens: Vec<SortToken>,
}

impl SortSpec {
    /// Parse the raw sort string. Tokens with an unknown field or an
    /// unrecognized direction are skipped; a missing direction means
    /// ascending.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let tokens = raw
            .split(',')
            .filter_map(|token| {
                let mut parts = token.split_whitespace();
                let field = parts.next()?;
                let (field, column) = SORTABLE
                    .iter()
                    .find(|(name, _)| name.eq_ignore_ascii_case(field))
                    .copied()?;

                let direction = match parts.next() {
                    Some(raw_direction) => Direction::parse(raw_direction)?,
                    None => Direction::Asc,
                };

                // Trailing garbage invalidates the whole token.
                if parts.next().is_some() {
                    return None;
                }

                Some(SortToken {
                    field,
                    column,
                    direction,
                })
            })
            .collect();

        Self { tokens }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[must_use]
    pub fn tokens(&self) -> &[SortToken] {
        &self.tokens
    }

    /// Canonical form of the spec, suitable for round-tripping through the
    /// next request's pagination links.
    #[must_use]
    pub fn normalize(&self) -> String {
        self.tokens
            .iter()
            .map(|token| format!("{} {}", token.field, token.direction.as_str()))
            .collect::<Vec<_>>()
            .join(",")
    }

    /// ORDER BY clause assembled from whitelisted column names only, or
    /// `None` when the spec is empty.
    #[must_use]
    pub(crate) fn order_clause(&self) -> Option<String> {
        if self.tokens.is_empty() {
            return None;
        }

        let columns = self
            .tokens
            .iter()
            .map(|token| format!("{} {}", token.column, token.direction.as_sql()))
            .collect::<Vec<_>>()
            .join(", ");

        Some(format!("ORDER BY {columns}"))
    }
}
