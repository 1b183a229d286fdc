//! Metafields nested under an owner resource.
//!
//! [`Metafields`] is bound to one owner, named by its collection path and id:
//! `Metafields::new(&client, "draft_orders", 42)` operates on
//! `draft_orders/42/metafields`. Any owner that exposes nested metafields
//! works the same way (`"products"`, `"customers"`, ...).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rest::{
    require_id, ResourceCollection, ResourceError, ResourceResponse, RestResource, RestTransport,
};

/// Custom data attached to a resource.
///
/// `value` is kept as raw JSON because Shopify sends strings for most types
/// and numbers for integer types.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Metafield {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,

    /// Metafield type, e.g. `single_line_text_field` or `number_integer`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<u64>,

    /// Singular owner type, e.g. `draft_order`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_resource: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_graphql_api_id: Option<String>,
}

impl RestResource for Metafield {
    const NAME: &'static str = "Metafield";
    const KEY: &'static str = "metafield";
    const PLURAL: &'static str = "metafields";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// Filters for listing and counting metafields.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct MetafieldListOptions {
    /// Page size (max 250).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,
    /// Comma-separated list of fields to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
    /// Cursor from a previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_info: Option<String>,
}

/// Options for fetching a single metafield.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct MetafieldGetOptions {
    /// Comma-separated list of fields to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

/// Metafield operations scoped to one owner.
#[derive(Debug)]
pub struct Metafields<'c, T> {
    transport: &'c T,
    owner: &'c str,
    owner_id: u64,
}

impl<'c, T: RestTransport> Metafields<'c, T> {
    /// Scopes metafield operations to `{owner}/{owner_id}/metafields`.
    #[must_use]
    pub const fn new(transport: &'c T, owner: &'c str, owner_id: u64) -> Self {
        Self {
            transport,
            owner,
            owner_id,
        }
    }

    fn collection(
        &self,
        operation: &'static str,
    ) -> Result<ResourceCollection<'c, T, Metafield>, ResourceError> {
        let owner_id = require_id(Some(self.owner_id), Metafield::NAME, operation)?;
        Ok(ResourceCollection::new(
            self.transport,
            format!("{}/{owner_id}/metafields", self.owner),
        ))
    }

    /// Lists the owner's metafields.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] for owner id zero, and any
    /// transport or decoding error.
    pub async fn list(
        &self,
        options: Option<&MetafieldListOptions>,
    ) -> Result<Vec<Metafield>, ResourceError> {
        self.collection("list")?.list(options).await
    }

    /// Lists one page of the owner's metafields with its cursors.
    ///
    /// # Errors
    ///
    /// See [`Metafields::list`].
    pub async fn list_page(
        &self,
        options: Option<&MetafieldListOptions>,
    ) -> Result<ResourceResponse<Vec<Metafield>>, ResourceError> {
        self.collection("list")?.list_page(options).await
    }

    /// Counts the owner's metafields.
    ///
    /// # Errors
    ///
    /// See [`Metafields::list`].
    pub async fn count(&self, options: Option<&MetafieldListOptions>) -> Result<u64, ResourceError> {
        self.collection("count")?.count(options).await
    }

    /// Fetches one metafield.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if either id is zero.
    pub async fn get(
        &self,
        metafield_id: u64,
        options: Option<&MetafieldGetOptions>,
    ) -> Result<Metafield, ResourceError> {
        self.collection("find")?.find(metafield_id, options).await
    }

    /// Creates a metafield on the owner.
    ///
    /// # Errors
    ///
    /// Returns a transport error such as a 422 for a duplicate key.
    pub async fn create(&self, metafield: &Metafield) -> Result<Metafield, ResourceError> {
        self.collection("create")?.create(metafield).await
    }

    /// Saves changes to `metafield`, addressed by its own id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] before any I/O when the metafield
    /// has no id.
    pub async fn update(&self, metafield: &Metafield) -> Result<Metafield, ResourceError> {
        self.collection("update")?.update(metafield).await
    }

    /// Deletes a metafield.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if either id is zero.
    pub async fn delete(&self, metafield_id: u64) -> Result<(), ResourceError> {
        self.collection("delete")?.delete(metafield_id).await
    }
}
