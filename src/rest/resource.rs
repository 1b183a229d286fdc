//! Generic CRUD over one REST collection.
//!
//! A [`RestResource`] names its envelope keys; a [`ResourceCollection`] binds
//! it to a transport and a collection path (`draft_orders`, or
//! `draft_orders/42/metafields` for a nested collection) and turns each
//! operation into a single round trip:
//!
//! | operation | request |
//! |---|---|
//! | `list` / `list_page` | `GET {base}.json` |
//! | `count` | `GET {base}/count.json` |
//! | `find` | `GET {base}/{id}.json` |
//! | `create` | `POST {base}.json` with `{KEY: resource}` |
//! | `update` | `PUT {base}/{id}.json` with `{KEY: resource}` |
//! | `delete` | `DELETE {base}/{id}.json` |
//! | `post_action` | `POST {base}/{id}/{action}.json` with `{}` |

use std::collections::HashMap;
use std::marker::PhantomData;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::clients::{HttpError, HttpMethod, HttpResponse, RestError};
use crate::rest::{to_query, ResourceError, ResourceResponse, RestTransport};

/// A resource exchanged with the Admin API inside a JSON envelope.
pub trait RestResource: Serialize + DeserializeOwned {
    /// Type name used in errors and logs (e.g. "DraftOrder").
    const NAME: &'static str;

    /// Envelope key of a single resource (e.g. "draft_order").
    const KEY: &'static str;

    /// Envelope key of a collection (e.g. "draft_orders").
    const PLURAL: &'static str;

    /// The server-assigned id, if known.
    fn id(&self) -> Option<u64>;
}

/// Returns `id` if it is set and non-zero.
///
/// # Errors
///
/// Returns [`ResourceError::MissingId`] otherwise.
pub(crate) fn require_id(
    id: Option<u64>,
    resource: &'static str,
    operation: &'static str,
) -> Result<u64, ResourceError> {
    id.filter(|id| *id != 0)
        .ok_or(ResourceError::MissingId {
            resource,
            operation,
        })
}

/// Wraps `value` as `{key: value}`.
pub(crate) fn envelope<S: Serialize>(key: &str, value: &S) -> Result<Value, ResourceError> {
    let mut body = serde_json::Map::new();
    body.insert(key.to_string(), serde_json::to_value(value)?);
    Ok(Value::Object(body))
}

/// CRUD operations for resource `R` at one collection path.
#[derive(Debug)]
pub struct ResourceCollection<'c, T, R> {
    transport: &'c T,
    base: String,
    resource: PhantomData<fn() -> R>,
}

impl<'c, T, R> ResourceCollection<'c, T, R>
where
    T: RestTransport,
    R: RestResource,
{
    /// Binds `R` to `transport` at the collection path `base`.
    #[must_use]
    pub fn new(transport: &'c T, base: impl Into<String>) -> Self {
        Self {
            transport,
            base: base.into(),
            resource: PhantomData,
        }
    }

    /// Returns the collection path without the `.json` suffix.
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// `{base}/{suffix}.json`
    pub(crate) fn path(&self, suffix: impl std::fmt::Display) -> String {
        format!("{}/{suffix}.json", self.base)
    }

    /// Fetches one page and keeps its pagination and rate limit metadata.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] on transport failure, non-2xx status, or a
    /// response without the collection envelope.
    pub async fn list_page<O: Serialize>(
        &self,
        options: Option<&O>,
    ) -> Result<ResourceResponse<Vec<R>>, ResourceError> {
        let query = options.map(to_query).transpose()?;
        let path = format!("{}.json", self.base);
        let response = self.send("list", HttpMethod::Get, path, None, query).await?;

        ResourceResponse::from_http_response(response, R::PLURAL)
    }

    /// Fetches one page of resources.
    ///
    /// # Errors
    ///
    /// See [`ResourceCollection::list_page`].
    pub async fn list<O: Serialize>(&self, options: Option<&O>) -> Result<Vec<R>, ResourceError> {
        Ok(self.list_page(options).await?.into_inner())
    }

    /// Counts the resources matching `options`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingEnvelope`] if the response has no
    /// numeric `count`.
    pub async fn count<O: Serialize>(&self, options: Option<&O>) -> Result<u64, ResourceError> {
        let query = options.map(to_query).transpose()?;
        let response = self
            .send("count", HttpMethod::Get, self.path("count"), None, query)
            .await?;

        response
            .body
            .get("count")
            .and_then(Value::as_u64)
            .ok_or_else(|| ResourceError::MissingEnvelope {
                key: "count",
                code: response.code,
                request_id: response.request_id().map(String::from),
            })
    }

    /// Fetches a single resource.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] for id zero, before any I/O.
    pub async fn find<O: Serialize>(&self, id: u64, options: Option<&O>) -> Result<R, ResourceError> {
        let id = require_id(Some(id), R::NAME, "find")?;
        let query = options.map(to_query).transpose()?;
        let response = self
            .send("find", HttpMethod::Get, self.path(id), None, query)
            .await?;

        Self::decode(response)
    }

    /// Creates `resource` and returns the stored version.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] on transport failure or non-2xx status.
    pub async fn create(&self, resource: &R) -> Result<R, ResourceError> {
        let body = envelope(R::KEY, resource)?;
        let path = format!("{}.json", self.base);
        let response = self
            .send("create", HttpMethod::Post, path, Some(body), None)
            .await?;

        Self::decode(response)
    }

    /// Saves changes to an existing resource.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] when the resource's id is unset or
    /// zero, before any I/O.
    pub async fn update(&self, resource: &R) -> Result<R, ResourceError> {
        let id = require_id(resource.id(), R::NAME, "update")?;
        let body = envelope(R::KEY, resource)?;
        let response = self
            .send("update", HttpMethod::Put, self.path(id), Some(body), None)
            .await?;

        Self::decode(response)
    }

    /// Deletes a resource.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] for id zero, before any I/O.
    pub async fn delete(&self, id: u64) -> Result<(), ResourceError> {
        let id = require_id(Some(id), R::NAME, "delete")?;
        self.send("delete", HttpMethod::Delete, self.path(id), None, None)
            .await?;
        Ok(())
    }

    /// Triggers `action` on a resource with an empty body and returns the
    /// updated resource.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] for id zero, before any I/O.
    pub async fn post_action(&self, id: u64, action: &'static str) -> Result<R, ResourceError> {
        let id = require_id(Some(id), R::NAME, action)?;
        let response = self
            .send(
                action,
                HttpMethod::Post,
                self.path(format!("{id}/{action}")),
                Some(Value::Object(serde_json::Map::new())),
                None,
            )
            .await?;

        Self::decode(response)
    }

    /// Sends one request and checks its status.
    pub(crate) async fn send(
        &self,
        operation: &'static str,
        method: HttpMethod,
        path: String,
        body: Option<Value>,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, ResourceError> {
        tracing::debug!(resource = R::NAME, operation, %method, %path, "resource request");

        let query = query.filter(|q| !q.is_empty());
        let body = body.unwrap_or_else(|| Value::Object(serde_json::Map::new()));
        let response = match method {
            HttpMethod::Get => self.transport.get(&path, query).await?,
            HttpMethod::Post => self.transport.post(&path, body, query).await?,
            HttpMethod::Put => self.transport.put(&path, body, query).await?,
            HttpMethod::Delete => self.transport.delete(&path, query).await?,
        };

        if response.is_ok() {
            Ok(response)
        } else {
            tracing::debug!(
                resource = R::NAME,
                operation,
                status = response.code,
                "resource request failed"
            );
            Err(RestError::Http(HttpError::Response(response.into_error())).into())
        }
    }

    fn decode(response: HttpResponse) -> Result<R, ResourceError> {
        Ok(ResourceResponse::<R>::from_http_response(response, R::KEY)?.into_inner())
    }
}
