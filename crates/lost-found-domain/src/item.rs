//! Item Entity
//!
//! A single lost or found posting shown in the feed.

use serde::{Deserialize, Serialize};

/// Whether the poster lost the item or found it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Lost,
    Found,
}

impl ItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Lost => "lost",
            ItemType::Found => "found",
        }
    }

    /// Badge text on item cards
    pub fn label(&self) -> &'static str {
        match self {
            ItemType::Lost => "Lost",
            ItemType::Found => "Found",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "lost" => Some(ItemType::Lost),
            "found" => Some(ItemType::Found),
            _ => None,
        }
    }
}

/// A posting in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique within the catalog
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub location: String,
    /// Free text shown as-is ("2 days ago")
    pub date: String,
    /// Data URL or asset path
    pub image: Option<String>,
    pub contact_name: String,
}

/// A validated submission from the report form. Has no id until a backend assigns one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItem {
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub title: String,
    pub description: String,
    pub location: String,
    pub date: String,
    pub image: Option<String>,
}
