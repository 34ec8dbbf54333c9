use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Raised when a free-text value does not name a member of a closed attribute
/// vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized {attribute} '{value}'")]
pub struct UnknownAttributeValue {
    pub attribute: &'static str,
    pub value: String,
}

fn parse_labelled<T: Copy>(
    attribute: &'static str,
    candidates: &[T],
    label: fn(T) -> &'static str,
    raw: &str,
) -> Result<T, UnknownAttributeValue> {
    let trimmed = raw.trim();
    candidates
        .iter()
        .copied()
        .find(|candidate| label(*candidate).eq_ignore_ascii_case(trimmed))
        .ok_or_else(|| UnknownAttributeValue {
            attribute,
            value: raw.to_string(),
        })
}

/// Physical state of the product being packaged.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum ProductState {
    Liquid,
    Solid,
    Powder,
    Paste,
    #[serde(rename = "Semi-solid")]
    SemiSolid,
    Gas,
}

impl ProductState {
    pub const ALL: [Self; 6] = [
        Self::Liquid,
        Self::Solid,
        Self::Powder,
        Self::Paste,
        Self::SemiSolid,
        Self::Gas,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Liquid => "Liquid",
            Self::Solid => "Solid",
            Self::Powder => "Powder",
            Self::Paste => "Paste",
            Self::SemiSolid => "Semi-solid",
            Self::Gas => "Gas",
        }
    }
}

impl fmt::Display for ProductState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ProductState {
    type Err = UnknownAttributeValue;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        parse_labelled("product state", &Self::ALL, Self::label, raw)
    }
}

/// Flow characteristics; `NotApplicable` covers solids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Viscosity {
    Low,
    Medium,
    High,
    #[serde(rename = "N/A")]
    NotApplicable,
}

impl Viscosity {
    pub const ALL: [Self; 4] = [Self::Low, Self::Medium, Self::High, Self::NotApplicable];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::NotApplicable => "N/A",
        }
    }
}

impl fmt::Display for Viscosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Chemical nature of the product.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum PhLevel {
    Acidic,
    Neutral,
    Basic,
}

impl PhLevel {
    pub const ALL: [Self; 3] = [Self::Acidic, Self::Neutral, Self::Basic];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Acidic => "Acidic",
            Self::Neutral => "Neutral",
            Self::Basic => "Basic",
        }
    }
}

impl fmt::Display for PhLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PhLevel {
    type Err = UnknownAttributeValue;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        parse_labelled("pH level", &Self::ALL, Self::label, raw)
    }
}

/// How strongly a product degrades under oxygen, moisture, or light exposure.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum SensitivityLevel {
    None,
    Low,
    Medium,
    High,
}

impl SensitivityLevel {
    pub const ALL: [Self; 4] = [Self::None, Self::Low, Self::Medium, Self::High];

    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for SensitivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SensitivityLevel {
    type Err = UnknownAttributeValue;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        parse_labelled("sensitivity level", &Self::ALL, Self::label, raw)
    }
}

/// Qualitative barrier strength a material offers against one ingress kind.
///
/// Catalog data for barrier levels historically carried inconsistent casing,
/// so deserialization is case-insensitive; serialization always emits the
/// canonical title-case label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum BarrierLevel {
    Low,
    Medium,
    High,
    Excellent,
}

impl BarrierLevel {
    pub const ALL: [Self; 4] = [Self::Low, Self::Medium, Self::High, Self::Excellent];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Excellent => "Excellent",
        }
    }
}

impl fmt::Display for BarrierLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BarrierLevel {
    type Err = UnknownAttributeValue;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        parse_labelled("barrier level", &Self::ALL, Self::label, raw)
    }
}

impl<'de> Deserialize<'de> for BarrierLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// The three ingress kinds a material guards against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BarrierKind {
    Oxygen,
    Moisture,
    Light,
}

impl BarrierKind {
    pub const ALL: [Self; 3] = [Self::Oxygen, Self::Moisture, Self::Light];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Oxygen => "Oxygen",
            Self::Moisture => "Moisture",
            Self::Light => "Light",
        }
    }
}

impl fmt::Display for BarrierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Required storage conditions.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum StorageTemperature {
    Frozen,
    Cold,
    Cool,
    Ambient,
    Hot,
}

impl StorageTemperature {
    pub const ALL: [Self; 5] = [
        Self::Frozen,
        Self::Cold,
        Self::Cool,
        Self::Ambient,
        Self::Hot,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Frozen => "Frozen",
            Self::Cold => "Cold",
            Self::Cool => "Cool",
            Self::Ambient => "Ambient",
            Self::Hot => "Hot",
        }
    }
}

impl fmt::Display for StorageTemperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StorageTemperature {
    type Err = UnknownAttributeValue;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        parse_labelled("storage temperature", &Self::ALL, Self::label, raw)
    }
}

/// Budget tier; also the cost category a material is sold at.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum CostTier {
    Economy,
    Standard,
    Premium,
}

impl CostTier {
    pub const ALL: [Self; 3] = [Self::Economy, Self::Standard, Self::Premium];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Economy => "Economy",
            Self::Standard => "Standard",
            Self::Premium => "Premium",
        }
    }
}

impl fmt::Display for CostTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CostTier {
    type Err = UnknownAttributeValue;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        parse_labelled("cost tier", &Self::ALL, Self::label, raw)
    }
}

/// How heavily environmental impact weighs against cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SustainabilityPriority {
    #[serde(rename = "Cost focused")]
    CostFocused,
    Balanced,
    #[serde(rename = "Eco-focused")]
    EcoFocused,
}

impl SustainabilityPriority {
    pub const ALL: [Self; 3] = [Self::CostFocused, Self::Balanced, Self::EcoFocused];

    pub const fn label(self) -> &'static str {
        match self {
            Self::CostFocused => "Cost focused",
            Self::Balanced => "Balanced",
            Self::EcoFocused => "Eco-focused",
        }
    }
}

impl fmt::Display for SustainabilityPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SustainabilityPriority {
    type Err = UnknownAttributeValue;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        parse_labelled("sustainability priority", &Self::ALL, Self::label, raw)
    }
}

/// How long the packaged product must remain stable.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum ShelfLifeRequirement {
    Days,
    Weeks,
    Months,
    Years,
}

impl ShelfLifeRequirement {
    pub const ALL: [Self; 4] = [Self::Days, Self::Weeks, Self::Months, Self::Years];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Days => "Days",
            Self::Weeks => "Weeks",
            Self::Months => "Months",
            Self::Years => "Years",
        }
    }
}

impl fmt::Display for ShelfLifeRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ShelfLifeRequirement {
    type Err = UnknownAttributeValue;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        parse_labelled("shelf life requirement", &Self::ALL, Self::label, raw)
    }
}

/// How easily the product itself is damaged in transit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FragilityLevel {
    Robust,
    Moderate,
    Fragile,
    #[serde(rename = "Very Fragile")]
    VeryFragile,
}

impl FragilityLevel {
    pub const ALL: [Self; 4] = [
        Self::Robust,
        Self::Moderate,
        Self::Fragile,
        Self::VeryFragile,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Robust => "Robust",
            Self::Moderate => "Moderate",
            Self::Fragile => "Fragile",
            Self::VeryFragile => "Very Fragile",
        }
    }
}

impl fmt::Display for FragilityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Market positioning of the brand behind the product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrandPositioning {
    Value,
    Mainstream,
    Premium,
    Luxury,
}

impl BrandPositioning {
    pub const ALL: [Self; 4] = [
        Self::Value,
        Self::Mainstream,
        Self::Premium,
        Self::Luxury,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Value => "Value",
            Self::Mainstream => "Mainstream",
            Self::Premium => "Premium",
            Self::Luxury => "Luxury",
        }
    }
}

impl fmt::Display for BrandPositioning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Profile attributes addressable by recommendation-rule triggers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum AttributeKind {
    ProductState,
    Viscosity,
    PhLevel,
    OxygenSensitivity,
    MoistureSensitivity,
    LightSensitivity,
    StorageTemperature,
    BudgetRange,
    SustainabilityPriority,
    ShelfLifeRequirement,
    TargetMarket,
    IndustryCategory,
    FragilityLevel,
    BrandPositioning,
}

/// The structured description of a product's packaging-relevant properties,
/// used as scoring input.
///
/// Every field is optional: scoring consumes absent values through the
/// per-factor default accessors below rather than failing, so a sparse
/// profile always scores.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttributeProfile {
    pub product_state: Option<ProductState>,
    pub viscosity: Option<Viscosity>,
    pub ph_level: Option<PhLevel>,
    pub oxygen_sensitivity: Option<SensitivityLevel>,
    pub moisture_sensitivity: Option<SensitivityLevel>,
    pub light_sensitivity: Option<SensitivityLevel>,
    pub storage_temperature: Option<StorageTemperature>,
    pub budget_range: Option<CostTier>,
    pub sustainability_priority: Option<SustainabilityPriority>,
    pub shelf_life_requirement: Option<ShelfLifeRequirement>,
    pub target_market: Option<String>,
    pub industry_category: Option<String>,
    pub fragility_level: Option<FragilityLevel>,
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub safety_requirements: BTreeSet<String>,
    pub brand_positioning: Option<BrandPositioning>,
}

impl AttributeProfile {
    /// Starting profile for keyword-based inference when no stored profile
    /// exists for a product.
    pub fn baseline() -> Self {
        Self {
            product_state: Some(ProductState::Liquid),
            viscosity: Some(Viscosity::Medium),
            ph_level: Some(PhLevel::Neutral),
            oxygen_sensitivity: Some(SensitivityLevel::Medium),
            moisture_sensitivity: Some(SensitivityLevel::Medium),
            light_sensitivity: Some(SensitivityLevel::Medium),
            storage_temperature: Some(StorageTemperature::Ambient),
            budget_range: Some(CostTier::Standard),
            sustainability_priority: Some(SustainabilityPriority::Balanced),
            shelf_life_requirement: Some(ShelfLifeRequirement::Months),
            target_market: None,
            industry_category: None,
            fragility_level: Some(FragilityLevel::Moderate),
            safety_requirements: BTreeSet::new(),
            brand_positioning: Some(BrandPositioning::Mainstream),
        }
    }

    /// pH used by the scorer when the profile carries none.
    pub fn ph_level_or_default(&self) -> PhLevel {
        self.ph_level.unwrap_or(PhLevel::Neutral)
    }

    /// Storage temperature used by the scorer when the profile carries none.
    pub fn storage_temperature_or_default(&self) -> StorageTemperature {
        self.storage_temperature.unwrap_or(StorageTemperature::Ambient)
    }

    /// Budget used by the scorer when the profile carries none.
    pub fn budget_range_or_default(&self) -> CostTier {
        self.budget_range.unwrap_or(CostTier::Standard)
    }

    /// Sensitivity for one barrier kind; absent sensitivities count as `None`.
    pub fn sensitivity(&self, kind: BarrierKind) -> SensitivityLevel {
        let level = match kind {
            BarrierKind::Oxygen => self.oxygen_sensitivity,
            BarrierKind::Moisture => self.moisture_sensitivity,
            BarrierKind::Light => self.light_sensitivity,
        };
        level.unwrap_or(SensitivityLevel::None)
    }

    /// Canonical display value for a rule-trigger comparison, or `None` when
    /// the profile does not carry the attribute.
    pub fn attribute(&self, kind: AttributeKind) -> Option<String> {
        match kind {
            AttributeKind::ProductState => self.product_state.map(|v| v.label().to_string()),
            AttributeKind::Viscosity => self.viscosity.map(|v| v.label().to_string()),
            AttributeKind::PhLevel => self.ph_level.map(|v| v.label().to_string()),
            AttributeKind::OxygenSensitivity => {
                self.oxygen_sensitivity.map(|v| v.label().to_string())
            }
            AttributeKind::MoistureSensitivity => {
                self.moisture_sensitivity.map(|v| v.label().to_string())
            }
            AttributeKind::LightSensitivity => {
                self.light_sensitivity.map(|v| v.label().to_string())
            }
            AttributeKind::StorageTemperature => {
                self.storage_temperature.map(|v| v.label().to_string())
            }
            AttributeKind::BudgetRange => self.budget_range.map(|v| v.label().to_string()),
            AttributeKind::SustainabilityPriority => {
                self.sustainability_priority.map(|v| v.label().to_string())
            }
            AttributeKind::ShelfLifeRequirement => {
                self.shelf_life_requirement.map(|v| v.label().to_string())
            }
            AttributeKind::TargetMarket => self.target_market.clone(),
            AttributeKind::IndustryCategory => self.industry_category.clone(),
            AttributeKind::FragilityLevel => self.fragility_level.map(|v| v.label().to_string()),
            AttributeKind::BrandPositioning => {
                self.brand_positioning.map(|v| v.label().to_string())
            }
        }
    }
}
