//! `GET /items` query construction
//!
//! KNOWN ISSUE: `sortBy` is appended to the SQL text verbatim. Any column
//! name, direction, or expression the caller sends reaches the database
//! unescaped. Only `title` is a bound parameter.

const BASE_QUERY: &str = "SELECT * FROM sneakers";

/// Query string of `GET /items`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemsParams {
    /// Case-insensitive title substring
    pub title: Option<String>,
    /// Raw ORDER BY text, from the `sortBy` key
    pub sort_by: Option<String>,
}

/// SQL text plus the optional `$1` binding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemsQuery {
    pub sql: String,
    pub title_pattern: Option<String>,
}

impl ItemsParams {
    /// Collect the known keys from decoded query pairs.
    ///
    /// A repeated key keeps its first value, even an empty one; unknown keys
    /// are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "title" if params.title.is_none() => params.title = Some(value),
                "sortBy" if params.sort_by.is_none() => params.sort_by = Some(value),
                _ => {}
            }
        }
        params
    }

    fn title(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.is_empty())
    }

    fn sort_by(&self) -> Option<&str> {
        self.sort_by.as_deref().filter(|s| !s.is_empty())
    }

    /// Build the catalog query. Empty parameters count as absent.
    pub fn to_query(&self) -> ItemsQuery {
        let mut sql = String::from(BASE_QUERY);

        let title_pattern = self.title().map(|title| {
            sql.push_str(" WHERE title ILIKE $1");
            format!("%{title}%")
        });

        if let Some(sort_by) = self.sort_by() {
            sql.push_str(" ORDER BY ");
            sql.push_str(sort_by);
        }

        ItemsQuery { sql, title_pattern }
    }
}
