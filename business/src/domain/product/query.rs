pub const DEFAULT_LIMIT: u32 = 10;
pub const DEFAULT_OFFSET: u64 = 0;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QueryError {
    #[error("query.invalid_limit: {0}")]
    InvalidLimit(String),
    #[error("query.invalid_offset: {0}")]
    InvalidOffset(String),
}

/// A page request against the product collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub limit: u32,
    pub offset: u64,
    pub search: String,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: DEFAULT_OFFSET,
            search: String::new(),
        }
    }
}

impl ListQuery {
    /// Query for a 1-based page. `offset = (page - 1) * page_size`.
    pub fn for_page(current_page: u32, page_size: u32, search: &str) -> Self {
        let page = current_page.max(1);
        let limit = page_size.max(1);
        Self {
            limit,
            offset: u64::from(page - 1) * u64::from(limit),
            search: search.to_string(),
        }
    }

    /// Parses raw query-string values; absent or empty values fall back to defaults.
    pub fn from_raw(
        limit: Option<&str>,
        offset: Option<&str>,
        search: Option<&str>,
    ) -> Result<Self, QueryError> {
        let limit = match limit.map(str::trim).filter(|l| !l.is_empty()) {
            None => DEFAULT_LIMIT,
            Some(raw) => match raw.parse::<u32>() {
                Ok(value) if value > 0 => value,
                _ => return Err(QueryError::InvalidLimit(raw.to_string())),
            },
        };

        let offset = match offset.map(str::trim).filter(|o| !o.is_empty()) {
            None => DEFAULT_OFFSET,
            Some(raw) => raw
                .parse::<u64>()
                .map_err(|_| QueryError::InvalidOffset(raw.to_string()))?,
        };

        Ok(Self {
            limit,
            offset,
            search: search.unwrap_or_default().to_string(),
        })
    }

    /// Only parameters that differ from their defaults go on the wire.
    pub fn to_wire_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if self.limit != DEFAULT_LIMIT {
            params.push(("limit", self.limit.to_string()));
        }
        if self.offset != DEFAULT_OFFSET {
            params.push(("offset", self.offset.to_string()));
        }
        if !self.search.is_empty() {
            params.push(("search", self.search.clone()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn should_emit_no_params_when_query_is_default() {
        assert!(ListQuery::default().to_wire_params().is_empty());
    }

    #[test]
    fn should_emit_only_non_default_params() {
        let query = ListQuery::for_page(3, 10, "lamp");

        assert_eq!(
            query.to_wire_params(),
            vec![("offset", "20".to_string()), ("search", "lamp".to_string())]
        );
    }

    #[test]
    fn should_emit_limit_when_page_size_changes() {
        let query = ListQuery::for_page(1, 25, "");

        assert_eq!(query.to_wire_params(), vec![("limit", "25".to_string())]);
    }

    #[test]
    fn should_use_defaults_when_raw_values_are_missing() {
        let query = ListQuery::from_raw(None, Some(""), None).unwrap();

        assert_eq!(query, ListQuery::default());
    }

    #[test]
    fn should_parse_raw_values() {
        let query = ListQuery::from_raw(Some("20"), Some("40"), Some("desk")).unwrap();

        assert_eq!(query.limit, 20);
        assert_eq!(query.offset, 40);
        assert_eq!(query.search, "desk");
    }

    #[test]
    fn should_reject_zero_limit() {
        let result = ListQuery::from_raw(Some("0"), None, None);

        assert_eq!(result, Err(QueryError::InvalidLimit("0".to_string())));
    }

    #[test]
    fn should_reject_non_numeric_offset() {
        let result = ListQuery::from_raw(None, Some("-5"), None);

        assert!(matches!(result, Err(QueryError::InvalidOffset(_))));
    }

    #[test]
    fn should_clamp_page_zero_to_first_page() {
        assert_eq!(ListQuery::for_page(0, 10, "").offset, 0);
    }

    proptest! {
        #[test]
        fn offset_always_matches_page_and_size(page in 1u32..10_000, size in 1u32..500) {
            let query = ListQuery::for_page(page, size, "");
            prop_assert_eq!(query.offset, u64::from(page - 1) * u64::from(size));
            prop_assert_eq!(query.limit, size);
        }
    }
}
