use {
    crate::config::WEBRING,
    serde_json::{Map, Value},
};

/// One member of the webring list. Feeds disagree on what the URL field is called,
/// so everything except `name` is kept as-is and probed later.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PeerRecord {
    pub name: Option<String>,
    pub fields: Map<String, Value>,
}

impl PeerRecord {
    /// Anything that isn't a JSON object becomes an empty record, so it still occupies its slot in the ring.
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::default();
        };
        let name = obj
            .get("name")
            .and_then(Value::as_str)
            .map(str::to_owned);
        let fields = obj
            .iter()
            .filter(|(key, _)| key.as_str() != "name")
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        Self { name, fields }
    }

    pub fn new(name: Option<&str>, field: &str, url: &str) -> Self {
        let mut fields = Map::new();
        fields.insert(field.to_string(), Value::String(url.to_string()));
        Self {
            name: name.map(str::to_owned),
            fields,
        }
    }

    /// First non-empty string among `WEBRING.url_fields`, in priority order.
    pub fn candidate_url(&self) -> Option<&str> {
        WEBRING.url_fields.iter().find_map(|field| {
            self.fields
                .get(*field)
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
        })
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("(unnamed)")
    }
}
