use std::fmt;

/// Query parameters the gateway appends to the callback URL.
///
/// Only `track_id` decides anything; the rest are kept for logging.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallbackQuery {
    pub track_id: Option<String>,
    pub success: Option<String>,
    pub status: Option<String>,
    pub payment_id: Option<String>,
}

impl CallbackQuery {
    /// Parse a raw query string, with or without the leading `?`.
    /// Blank values count as absent.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut parsed = Self::default();

        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            let slot = match &*key {
                "trackId" => &mut parsed.track_id,
                "success" => &mut parsed.success,
                "status" => &mut parsed.status,
                "paymentId" => &mut parsed.payment_id,
                _ => continue,
            };
            *slot = Some(value.to_string());
        }

        parsed
    }
}

impl From<&str> for CallbackQuery {
    fn from(query: &str) -> Self {
        Self::parse(query)
    }
}

impl fmt::Display for CallbackQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        let pairs = [
            ("trackId", &self.track_id),
            ("success", &self.success),
            ("status", &self.status),
            ("paymentId", &self.payment_id),
        ];
        for (key, value) in pairs {
            if let Some(value) = value {
                serializer.append_pair(key, value);
            }
        }
        write!(f, "{}", serializer.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_gateway_query() {
        let query = CallbackQuery::parse("?success=1&status=2&trackId=3851234&paymentId=77");

        assert_eq!(query.track_id.as_deref(), Some("3851234"));
        assert_eq!(query.success.as_deref(), Some("1"));
        assert_eq!(query.status.as_deref(), Some("2"));
        assert_eq!(query.payment_id.as_deref(), Some("77"));
    }

    #[test]
    fn test_blank_track_id_is_absent() {
        assert_eq!(CallbackQuery::parse("trackId=&success=0").track_id, None);
        assert_eq!(CallbackQuery::parse("trackId=%20%20").track_id, None);
        assert_eq!(CallbackQuery::parse("").track_id, None);
    }

    #[test]
    fn test_display_is_parseable() {
        let query = CallbackQuery {
            track_id: Some("a b&c".into()),
            success: Some("1".into()),
            status: None,
            payment_id: None,
        };
        assert_eq!(CallbackQuery::parse(&query.to_string()), query);
    }
}
