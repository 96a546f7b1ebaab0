use url::Url;

use super::Query;

/// Filters for the `/assets` listing.
///
/// Unset fields are left to the API defaults (100 assets ordered by rank).
#[derive(Clone, Default)]
pub struct AssetsQuery {
    pub search: Option<String>,
    pub ids: Vec<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl Query for AssetsQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if let Some(search) = &self.search {
            url.query_pairs_mut().append_pair("search", search.as_str());
        };
        if !self.ids.is_empty() {
            url.query_pairs_mut()
                .append_pair("ids", self.ids.join(",").as_str());
        }
        if let Some(limit) = self.limit {
            url.query_pairs_mut()
                .append_pair("limit", &limit.to_string());
        };
        if let Some(offset) = self.offset {
            url.query_pairs_mut()
                .append_pair("offset", &offset.to_string());
        };
        url
    }
}

impl AssetsQuery {
    pub fn with_search(mut self, search: &str) -> Self {
        self.search = Some(search.to_string());
        self
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.ids.push(id.to_string());
        self
    }

    pub fn with_ids(mut self, ids: &[&str]) -> Self {
        self.ids.extend(ids.iter().map(|id| id.to_string()));
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_query_adds_nothing() {
        let url = Url::parse("https://api.coincap.io/v2/assets").unwrap();
        insta::assert_snapshot!(
            AssetsQuery::default().add_to_url(&url).to_string(),
            @"https://api.coincap.io/v2/assets"
        );
    }

    #[test]
    fn full_query() {
        let url = Url::parse("https://api.coincap.io/v2/assets").unwrap();
        insta::assert_snapshot!(
            AssetsQuery::default()
                .with_search("bit coin")
                .with_ids(&["bitcoin", "ethereum"])
                .with_limit(10)
                .with_offset(20)
                .add_to_url(&url)
                .to_string(),
            @"https://api.coincap.io/v2/assets?search=bit+coin&ids=bitcoin%2Cethereum&limit=10&offset=20"
        );
    }
}
