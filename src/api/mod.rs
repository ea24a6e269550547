mod collection;

#[allow(unused_imports)]
pub(crate) use collection::add_to_collection_if_missing;

use crate::config::EnvConfig;
use crate::models::{Entity, EntityKind};
use serde::de::DeserializeOwned;
use std::marker::PhantomData;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ApiErrorKind {
    Unauthorized,
    Network,
    Http,
    Parse,
    /// `update`/`partial_update` called with an unsaved record.
    MissingId,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    fn network(e: reqwest::Error) -> Self {
        Self {
            kind: ApiErrorKind::Network,
            message: e.to_string(),
        }
    }

    fn parse(e: impl std::fmt::Display) -> Self {
        Self {
            kind: ApiErrorKind::Parse,
            message: e.to_string(),
        }
    }

    fn unauthorized() -> Self {
        Self {
            kind: ApiErrorKind::Unauthorized,
            message: "Unauthorized".to_string(),
        }
    }

    fn http(status: reqwest::StatusCode, body: String, ctx: &str) -> Self {
        Self {
            kind: ApiErrorKind::Http,
            message: format!("{ctx} ({status}): {body}"),
        }
    }

    pub(crate) fn missing_id(kind: EntityKind) -> Self {
        Self {
            kind: ApiErrorKind::MissingId,
            message: format!("{} has no id; create it instead", kind.title()),
        }
    }
}

pub(crate) type ApiResult<T> = Result<T, ApiError>;

/// Status plus (possibly empty) body, handed back to callers unmodified.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct HttpResponse<T> {
    pub status: u16,
    pub body: Option<T>,
}

/// Opaque paging/sorting options forwarded to `GET {base}`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct RequestOptions {
    pub page: Option<u32>,
    pub size: Option<u32>,
    /// Each entry becomes its own `sort=` pair, e.g. `"id,asc"`.
    pub sort: Vec<String>,
    pub extra: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page".to_string(), page.to_string()));
        }
        if let Some(size) = self.size {
            pairs.push(("size".to_string(), size.to_string()));
        }
        for s in &self.sort {
            pairs.push(("sort".to_string(), s.clone()));
        }
        pairs.extend(self.extra.iter().cloned());
        pairs
    }

    /// `?page=0&sort=id%2Casc`, or an empty string when there is nothing to send.
    pub fn to_query_string(&self) -> String {
        let pairs = self.query_pairs();
        if pairs.is_empty() {
            return String::new();
        }
        let joined = pairs
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        format!("?{joined}")
    }
}

/// Empty and literal `null` bodies both mean "no record".
pub(crate) fn parse_body<T: DeserializeOwned>(text: &str) -> ApiResult<Option<T>> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    serde_json::from_str::<Option<T>>(text).map_err(ApiError::parse)
}

/// CRUD surface of one entity resource.
///
/// Implemented by [`EntityClient`] and by the in-memory fake in tests.
pub(crate) trait EntityService<E: Entity> {
    async fn find(&self, id: i64) -> ApiResult<HttpResponse<E>>;

    async fn query(&self, options: &RequestOptions) -> ApiResult<HttpResponse<Vec<E>>>;

    async fn create(&self, record: &E) -> ApiResult<HttpResponse<E>>;

    async fn update(&self, record: &E) -> ApiResult<HttpResponse<E>>;

    #[allow(dead_code)]
    async fn partial_update(&self, record: &E) -> ApiResult<HttpResponse<E>>;

    async fn delete(&self, id: i64) -> ApiResult<HttpResponse<()>>;
}

#[derive(Clone)]
pub(crate) struct EntityClient<E> {
    pub(crate) resource_url: String,
    pub(crate) token: Option<String>,
    http: reqwest::Client,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> EntityClient<E> {
    pub fn new(config: &EnvConfig, token: Option<String>) -> Self {
        Self {
            resource_url: config.endpoint_for(&E::KIND.resource_path()),
            token,
            http: reqwest::Client::new(),
            _entity: PhantomData,
        }
    }

    pub(crate) fn record_url(&self, id: i64) -> String {
        format!("{}/{}", self.resource_url, id)
    }

    fn get_auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    fn request(&self, method: reqwest::Method, url: String) -> reqwest::RequestBuilder {
        let mut req = self.http.request(method, url);
        if let Some(header) = self.get_auth_header() {
            req = req.header("Authorization", header);
        }
        req
    }

    async fn send(req: reqwest::RequestBuilder, ctx: &str) -> ApiResult<(u16, String)> {
        let res = req.send().await.map_err(ApiError::network)?;
        let status = res.status();

        if status.is_success() {
            let text = res.text().await.map_err(ApiError::network)?;
            Ok((status.as_u16(), text))
        } else if status.as_u16() == 401 {
            Err(ApiError::unauthorized())
        } else {
            let body = res.text().await.unwrap_or_default();
            Err(ApiError::http(status, body, ctx))
        }
    }

    async fn send_json<T: DeserializeOwned>(
        req: reqwest::RequestBuilder,
        ctx: &str,
    ) -> ApiResult<HttpResponse<T>> {
        let (status, text) = Self::send(req, ctx).await?;
        Ok(HttpResponse {
            status,
            body: parse_body(&text)?,
        })
    }

    fn require_id(record: &E) -> ApiResult<i64> {
        record
            .identifier()
            .ok_or_else(|| ApiError::missing_id(E::KIND))
    }
}

impl<E: Entity> EntityService<E> for EntityClient<E> {
    async fn find(&self, id: i64) -> ApiResult<HttpResponse<E>> {
        let req = self.request(reqwest::Method::GET, self.record_url(id));
        Self::send_json(req, "Find failed").await
    }

    async fn query(&self, options: &RequestOptions) -> ApiResult<HttpResponse<Vec<E>>> {
        let url = format!("{}{}", self.resource_url, options.to_query_string());
        let req = self.request(reqwest::Method::GET, url);
        Self::send_json(req, "Query failed").await
    }

    async fn create(&self, record: &E) -> ApiResult<HttpResponse<E>> {
        let req = self
            .request(reqwest::Method::POST, self.resource_url.clone())
            .json(record);
        Self::send_json(req, "Create failed").await
    }

    async fn update(&self, record: &E) -> ApiResult<HttpResponse<E>> {
        let id = Self::require_id(record)?;
        let req = self
            .request(reqwest::Method::PUT, self.record_url(id))
            .json(record);
        Self::send_json(req, "Update failed").await
    }

    async fn partial_update(&self, record: &E) -> ApiResult<HttpResponse<E>> {
        let id = Self::require_id(record)?;
        let body = serde_json::to_string(record).map_err(ApiError::parse)?;
        let req = self
            .request(reqwest::Method::PATCH, self.record_url(id))
            .header("Content-Type", "application/merge-patch+json")
            .body(body);
        Self::send_json(req, "Partial update failed").await
    }

    async fn delete(&self, id: i64) -> ApiResult<HttpResponse<()>> {
        let req = self.request(reqwest::Method::DELETE, self.record_url(id));
        let (status, _) = Self::send(req, "Delete failed").await?;
        Ok(HttpResponse { status, body: None })
    }
}

#[cfg(test)]
pub(crate) mod fake {
    //! In-memory [`EntityService`] used by view flow tests.

    use super::*;
    use std::cell::RefCell;

    fn ok<T>(body: Option<T>) -> HttpResponse<T> {
        HttpResponse { status: 200, body }
    }

    #[derive(Clone, Debug, PartialEq, Eq)]
    pub(crate) enum Call {
        Find(i64),
        Query,
        Create,
        Update(i64),
        PartialUpdate(i64),
        Delete(i64),
    }

    pub(crate) struct FakeService<E> {
        pub rows: RefCell<Vec<E>>,
        pub calls: RefCell<Vec<Call>>,
        /// `find` answers with an empty body when set.
        pub find_empty: bool,
        /// Every call fails with a network error when set.
        pub fail: bool,
        next_id: RefCell<i64>,
    }

    impl<E: Entity> FakeService<E> {
        pub fn with_rows(rows: Vec<E>) -> Self {
            Self {
                rows: RefCell::new(rows),
                calls: RefCell::new(vec![]),
                find_empty: false,
                fail: false,
                next_id: RefCell::new(1000),
            }
        }

        pub fn failing() -> Self {
            Self {
                fail: true,
                ..Self::with_rows(vec![])
            }
        }

        pub fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }

        fn record(&self, call: Call) -> ApiResult<()> {
            self.calls.borrow_mut().push(call);
            if self.fail {
                Err(ApiError {
                    kind: ApiErrorKind::Network,
                    message: "connection refused".to_string(),
                })
            } else {
                Ok(())
            }
        }
    }

    impl<E: Entity> EntityService<E> for FakeService<E> {
        async fn find(&self, id: i64) -> ApiResult<HttpResponse<E>> {
            self.record(Call::Find(id))?;
            if self.find_empty {
                return Ok(ok(None));
            }
            let found = self
                .rows
                .borrow()
                .iter()
                .find(|r| r.identifier() == Some(id))
                .cloned();
            Ok(ok(found))
        }

        async fn query(&self, _options: &RequestOptions) -> ApiResult<HttpResponse<Vec<E>>> {
            self.record(Call::Query)?;
            Ok(ok(Some(self.rows.borrow().clone())))
        }

        async fn create(&self, record: &E) -> ApiResult<HttpResponse<E>> {
            self.record(Call::Create)?;
            let id = {
                let mut next = self.next_id.borrow_mut();
                *next += 1;
                *next
            };
            let created = E::from_parts(
                Some(id),
                record.region().map(str::to_string),
                record.promet(),
            );
            self.rows.borrow_mut().push(created.clone());
            Ok(HttpResponse {
                status: 201,
                body: Some(created),
            })
        }

        async fn update(&self, record: &E) -> ApiResult<HttpResponse<E>> {
            let id = record
                .identifier()
                .ok_or_else(|| ApiError::missing_id(E::KIND))?;
            self.record(Call::Update(id))?;
            Ok(ok(Some(record.clone())))
        }

        async fn partial_update(&self, record: &E) -> ApiResult<HttpResponse<E>> {
            let id = record
                .identifier()
                .ok_or_else(|| ApiError::missing_id(E::KIND))?;
            self.record(Call::PartialUpdate(id))?;
            Ok(ok(Some(record.clone())))
        }

        async fn delete(&self, id: i64) -> ApiResult<HttpResponse<()>> {
            self.record(Call::Delete(id))?;
            self.rows.borrow_mut().retain(|r| r.identifier() != Some(id));
            Ok(HttpResponse {
                status: 204,
                body: None,
            })
        }
    }
}
