use url::form_urlencoded;

/// Parameters of one jobs-list request, derived from filters and cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobQuery {
    pub search: String,
    pub source: String,
    pub status: String,
    pub page: u32,
    pub per_page: u32,
}

impl JobQuery {
    /// Pairs in wire order.
    pub fn pairs(&self) -> [(&'static str, String); 5] {
        [
            ("search", self.search.clone()),
            ("source", self.source.clone()),
            ("status", self.status.clone()),
            ("page", self.page.to_string()),
            ("per_page", self.per_page.to_string()),
        ]
    }

    /// Form-urlencoded query string, e.g.
    /// `search=engineer&source=all&status=all&page=1&per_page=50`.
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in self.pairs() {
            serializer.append_pair(key, &value);
        }
        serializer.finish()
    }
}
