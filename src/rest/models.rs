//! Data models for the shop management API.
//!
//! Response models derive [`Deserialize`] and request models derive
//! [`Serialize`]; shared value types (prices, stock, themes) derive both.
//! Field names follow the wire format of the API, which mixes snake_case
//! and camelCase on the shop resource and is uniformly camelCase on
//! catalogs.

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Brand colors within a shop theme.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ThemeColors {
    /// Primary brand color.
    pub primary: String,
    /// Secondary brand color.
    pub secondary: String,
}

/// Visual theme of a shop's public storefront.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    /// Brand colors, when configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<ThemeColors>,
    /// Menu layout identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu: Option<String>,
    /// Look-and-feel preset identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub look_and_feel: Option<String>,
    /// Logo image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

/// A shop as returned by the API.
#[derive(Clone, Debug, Deserialize)]
pub struct Shop {
    /// Unique shop identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Display name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// Owner's name.
    pub owner: String,
    /// Contact email.
    pub email: Option<String>,
    /// Phone country code.
    pub mobile_country_code: Option<String>,
    /// Phone number.
    pub mobile_number: Option<String>,
    /// Storefront theme.
    pub theme: Option<Theme>,
    /// QR code image data, when generated.
    pub qr_code: Option<String>,
    /// QR code target URL, when generated.
    pub qr_code_url: Option<String>,
    /// Creation timestamp.
    #[serde(rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update timestamp.
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload for creating a shop.
#[derive(Clone, Debug, Serialize)]
pub struct ShopCreate {
    /// Display name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// Owner's name.
    pub owner: String,
    /// Contact email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Phone country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_country_code: Option<String>,
    /// Phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_number: Option<String>,
    /// Storefront theme.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
}

/// Payload for updating a shop. Unset fields are left unchanged.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ShopUpdate {
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Street address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Owner's name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// Contact email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Phone country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_country_code: Option<String>,
    /// Phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_number: Option<String>,
    /// Storefront theme.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
}

/// Price of a catalog item.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    /// ISO currency code.
    pub currency: String,
    /// Unit price.
    pub value: f64,
    /// Active discount percentage, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_percentage: Option<f64>,
    /// Price after discount, when the server computes it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discounted_price: Option<f64>,
}

/// Availability window of a catalog item.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    /// Whether the item is currently orderable.
    pub is_available: bool,
    /// Daily availability start time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    /// Daily availability end time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    /// Days of the week the item is offered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_days: Option<Vec<String>>,
    /// Whether the item is seasonal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seasonal_available: Option<bool>,
    /// Season name for seasonal items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season: Option<String>,
}

/// Stock level of a catalog item.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Stock {
    /// Quantity on hand.
    pub quantity: f64,
    /// Unit of measure for the quantity.
    pub unit: String,
    /// Quantity at which restocking is due.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reorder_level: Option<f64>,
}

/// Lifecycle status of a catalog item.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum CatalogStatus {
    /// Offered for sale.
    Active,
    /// Temporarily withdrawn.
    Inactive,
    /// Permanently withdrawn.
    Discontinued,
}

impl CatalogStatus {
    /// Returns the wire representation, used in query parameters.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
            Self::Discontinued => "DISCONTINUED",
        }
    }
}

impl fmt::Display for CatalogStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalog item as returned by the API.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    /// Unique catalog item identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Item name.
    pub name: String,
    /// Item description.
    pub description: Option<String>,
    /// Category the item belongs to.
    pub category: String,
    /// The shop offering this item.
    pub shop_id: String,
    /// Unit of sale.
    pub unit: String,
    /// Pricing.
    pub price: Option<Price>,
    /// Availability window.
    pub availability: Option<Availability>,
    /// Stock level.
    pub stock: Option<Stock>,
    /// Lifecycle status.
    pub status: CatalogStatus,
    /// Creation timestamp.
    pub created_at: Option<DateTime<Utc>>,
    /// Last update timestamp.
    pub updated_at: Option<DateTime<Utc>>,
    /// Free-form item metadata.
    pub metadata: Option<HashMap<String, serde_json::Value>>,
}

/// Payload for creating a catalog item.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogCreate {
    /// Item name.
    pub name: String,
    /// Item description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Category the item belongs to.
    pub category: String,
    /// The shop offering this item.
    pub shop_id: String,
    /// Unit of sale.
    pub unit: String,
    /// Pricing.
    pub price: Price,
    /// Availability window.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<Availability>,
    /// Stock level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<Stock>,
    /// Lifecycle status; defaults server-side when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CatalogStatus>,
    /// Free-form item metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, serde_json::Value>>,
}

/// Payload for updating a catalog item. Unset fields are left unchanged.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogUpdate {
    /// Item name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Item description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Pricing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,
    /// Availability window.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<Availability>,
    /// Stock level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<Stock>,
    /// Lifecycle status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CatalogStatus>,
}

/// Response of the QR code generation and retrieval endpoints.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QrCodeResponse {
    /// Status indicator from the server.
    pub status: String,
    /// Human-readable status message.
    pub message: Option<String>,
    /// The shop the code belongs to.
    pub shop_id: String,
    /// The shop's display name.
    pub shop_name: Option<String>,
    /// URL the QR code resolves to.
    pub qr_code_url: Option<String>,
    /// QR code image data.
    pub qr_code: Option<String>,
}

/// A shop's public menu: the shop header plus its catalog items.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopMenu {
    /// The shop this menu belongs to.
    pub shop_id: String,
    /// The shop's display name.
    pub shop_name: String,
    /// Street address.
    pub address: String,
    /// Owner's name.
    pub owner: String,
    /// Number of items in the menu.
    pub total_items: u32,
    /// When the menu snapshot was assembled.
    pub fetched_at: DateTime<Utc>,
    /// The menu's catalog items.
    pub catalogs: Vec<Catalog>,
}

/// A user account attached to a shop.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopUser {
    /// The user's identifier.
    pub user_id: String,
    /// The shop the user belongs to.
    pub shop_id: Option<String>,
    /// The user's role within the shop.
    pub role: Option<String>,
    /// Creation timestamp.
    pub created_at: Option<DateTime<Utc>>,
}

/// Payload for attaching a user to a shop.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopUserCreate {
    /// The user's identifier.
    pub user_id: String,
    /// The user's role within the shop.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Response of the account creation endpoint.
#[derive(Clone, Debug, Deserialize)]
pub struct CreateUserResponse {
    /// Status indicator from the server.
    pub status: String,
    /// Human-readable status message.
    pub message: String,
    /// Identifier of the created user.
    #[serde(rename = "userId")]
    pub user_id: String,
}

/// Generic acknowledgement body returned by delete and reset operations.
#[derive(Clone, Debug, Deserialize)]
pub struct ApiMessage {
    /// Status indicator from the server.
    pub status: Option<String>,
    /// Human-readable status message.
    pub message: Option<String>,
    /// Additional detail, when the server includes it.
    pub details: Option<String>,
}
