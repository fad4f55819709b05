use gloo::net::http::Request;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::config;
use crate::debug_log;
use crate::error::ApiError;
use crate::models::{Company, Convention, VideoPage};

/// Query for one page of a convention's videos.
#[derive(Clone, Debug, PartialEq)]
pub struct VideoQuery {
    pub company: String,
    pub convention: String,
    pub page: u32,
    pub per_page: u32,
}

/// Thin client over the portal's read-only HTTP API.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(&config().api_base_url)
    }
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn clients_url(&self) -> Result<Url, ApiError> {
        self.endpoint("/api/clients", &[])
    }

    pub fn conventions_url(&self, company: &str) -> Result<Url, ApiError> {
        self.endpoint("/api/conventions", &[("company", company.to_string())])
    }

    pub fn videos_url(&self, query: &VideoQuery) -> Result<Url, ApiError> {
        self.endpoint(
            "/api/videos",
            &[
                ("company", query.company.clone()),
                ("convention", query.convention.clone()),
                ("page", query.page.to_string()),
                ("per_page", query.per_page.to_string()),
            ],
        )
    }

    fn endpoint(&self, path: &str, params: &[(&str, String)]) -> Result<Url, ApiError> {
        let raw = format!("{}{}", self.base_url, path);
        let url = if params.is_empty() {
            Url::parse(&raw)
        } else {
            Url::parse_with_params(&raw, params.iter().map(|(k, v)| (*k, v.as_str())))
        };
        url.map_err(|e| ApiError::Config(format!("{raw}: {e}")))
    }

    pub async fn fetch_clients(&self) -> Result<Vec<Company>, ApiError> {
        self.get_json(self.clients_url()?).await
    }

    pub async fn fetch_conventions(&self, company: &str) -> Result<Vec<Convention>, ApiError> {
        self.get_json(self.conventions_url(company)?).await
    }

    pub async fn fetch_videos(&self, query: &VideoQuery) -> Result<VideoPage, ApiError> {
        let page: VideoPage = self.get_json(self.videos_url(query)?).await?;
        if !page.pagination.is_consistent_with(query.per_page) {
            gloo::console::warn!(format!(
                "Server reported {} pages for {} items at {} per page (expected {})",
                page.pagination.total_pages,
                page.pagination.total_items,
                query.per_page,
                page.pagination.expected_pages(query.per_page),
            ));
        }
        Ok(page)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        debug_log!("GET {url}");
        let response = Request::get(url.as_str())
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode_response(status, &body)
    }
}

/// Maps a status code and raw body onto the decoded payload or an `ApiError`.
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::from_status(status, body));
    }
    serde_json::from_str(body).map_err(|e| ApiError::Malformed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(page: u32) -> VideoQuery {
        VideoQuery {
            company: "AcmeCo".into(),
            convention: "Expo25".into(),
            page,
            per_page: 12,
        }
    }

    #[test]
    fn builds_endpoint_urls() {
        let api = ApiClient::new("http://127.0.0.1:5000/");
        assert_eq!(api.clients_url().unwrap().as_str(), "http://127.0.0.1:5000/api/clients");
        assert_eq!(
            api.videos_url(&query(1)).unwrap().as_str(),
            "http://127.0.0.1:5000/api/videos?company=AcmeCo&convention=Expo25&page=1&per_page=12"
        );
    }

    #[test]
    fn query_values_are_encoded() {
        let api = ApiClient::new("http://127.0.0.1:5000");
        let url = api.conventions_url("Acme & Sons").unwrap();
        assert_eq!(url.query(), Some("company=Acme+%26+Sons"));
        let pairs: Vec<_> = url.query_pairs().collect();
        assert_eq!(pairs[0].1, "Acme & Sons");
    }

    #[test]
    fn bad_base_url_is_an_error() {
        let api = ApiClient::new("not a url");
        assert!(matches!(api.clients_url(), Err(ApiError::Config(_))));
    }

    #[test]
    fn decodes_first_page_of_three() {
        let videos: Vec<String> = (1..=12)
            .map(|i| format!(r#"{{"id":"v{i}","title":"Clip {i}","price":9.99}}"#))
            .collect();
        let body = format!(
            r#"{{"videos":[{}],"pagination":{{"total_items":30,"total_pages":3}}}}"#,
            videos.join(",")
        );
        let page: VideoPage = decode_response(200, &body).unwrap();
        assert_eq!(page.videos.len(), 12);
        assert_eq!(page.videos[0].id, "v1");
        assert_eq!(page.pagination, crate::models::PaginationInfo { total_items: 30, total_pages: 3 });
    }

    #[test]
    fn missing_pagination_is_malformed() {
        let err = decode_response::<VideoPage>(200, r#"{"videos":[]}"#).unwrap_err();
        assert!(matches!(err, ApiError::Malformed(_)));
        assert_eq!(err.user_message("Failed to fetch videos"), "Failed to fetch videos");
    }

    #[test]
    fn non_2xx_carries_server_message() {
        let err = decode_response::<VideoPage>(404, r#"{"error":"convention not found"}"#).unwrap_err();
        assert_eq!(err.user_message("Failed to fetch videos"), "convention not found");
    }

    #[test]
    fn decodes_company_list() {
        let companies: Vec<Company> = decode_response(200, r#"[{"name":"AcmeCo"},{"name":"Globex"}]"#).unwrap();
        assert_eq!(companies.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(), ["AcmeCo", "Globex"]);
    }
}
