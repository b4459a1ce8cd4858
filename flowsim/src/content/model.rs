//! Typed records for every editable content slice.
//!
//! Each slice is an independent value tree, serialized as JSON under
//! its own key in the backing store. Field names serialize in
//! camelCase, matching the export format of the original authoring
//! tool, so previously exported slices load unchanged.

use crate::content::icon::IconKey;
use serde::{Deserialize, Serialize};

/// Global landing-page configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    pub hero_label: String,
    pub hero_title: String,
    pub hero_highlight: String,
    pub hero_subtitle: String,
}

/// One card in the landing-page module grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeModule {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub icon_key: IconKey,
    /// Reading progress shown on the card, in percent.
    pub progress: u8,
    pub href: String,
    pub color: String,
}

/// A switching platform entry in the hardware section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub series: String,
    pub role: String,
    pub icon_key: IconKey,
    pub desc: String,
    pub specs: Vec<String>,
    pub scale: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<ProductVariant>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub key_features: Vec<ProductFeature>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datasheet_url: Option<String>,
}

/// A concrete SKU of a [`Product`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariant {
    pub name: String,
    pub chip: String,
    pub capacity: String,
    pub ports: String,
    pub form_factor: String,
}

/// A highlighted headline figure of a [`Product`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFeature {
    pub label: String,
    pub value: String,
    pub subtext: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_key: Option<IconKey>,
}

/// One bar of a performance comparison chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    pub name: String,
    /// Fabric efficiency in percent (performance chart).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub efficiency: Option<f64>,
    /// Failover delay in milliseconds (failover chart).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay: Option<f64>,
    /// Bar color, as a CSS color string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
}

/// One of the protocol cards (RoCEv2, UET) in the protocols section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProtocolConcept {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub icon_key: IconKey,
    pub color: String,
    pub mechanisms: Vec<ProtocolMechanism>,
}

/// A single mechanism (PFC, ECN, packet spraying, ...) listed on a
/// protocol card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProtocolMechanism {
    pub name: String,
    pub desc: String,
    pub icon_key: IconKey,
}

/// One checklist entry of the AI vs HPC section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HpcItem {
    pub title: String,
    pub icon_key: IconKey,
    pub points: Vec<String>,
}

/// A themed group of planned improvements on the roadmap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapCategory {
    pub category: String,
    pub color: String,
    pub icon_key: IconKey,
    pub items: Vec<RoadmapItem>,
}

/// A single planned improvement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapItem {
    pub title: String,
    pub desc: String,
    pub icon_key: IconKey,
}
