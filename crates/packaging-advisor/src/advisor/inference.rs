use crate::catalog::domain::{
    AttributeProfile, BrandPositioning, CostTier, PhLevel, ProductState, SensitivityLevel,
    ShelfLifeRequirement, StorageTemperature, SustainabilityPriority, Viscosity,
};
use crate::catalog::records::Catalog;

/// Derive a fully-populated attribute profile for a product.
///
/// A product with a saved profile in the catalog short-circuits keyword
/// matching: the stored profile is reused with only `budget_range` and
/// `shelf_life_requirement` overwritten by the caller-supplied values, since
/// explicit user input always wins over stored history for those two fields.
///
/// Otherwise the profile starts from [`AttributeProfile::baseline`] and the
/// first category whose keywords appear in the product name or purpose applies
/// its override block (categories are mutually exclusive; earlier table
/// entries win). Cross-cutting adjustments for budget and shelf life run last
/// and override any category-specific value.
pub fn infer_profile(
    product_name: &str,
    purpose: &str,
    cost: CostTier,
    shelf_life: ShelfLifeRequirement,
    catalog: &Catalog,
) -> AttributeProfile {
    if let Some(stored) = catalog
        .products
        .get(product_name)
        .and_then(|product| product.attribute_profile.clone())
    {
        let mut profile = stored;
        profile.budget_range = Some(cost);
        profile.shelf_life_requirement = Some(shelf_life);
        return profile;
    }

    let mut profile = AttributeProfile::baseline();

    let haystack = format!("{product_name} {purpose}").to_lowercase();
    if let Some(category) = CATEGORY_RULES.iter().find(|rule| rule.matches(&haystack)) {
        category.overrides.apply(&mut profile);
        for refinement in category.refinements {
            if refinement.matches(&haystack) {
                refinement.overrides.apply(&mut profile);
            }
        }
    }

    // Explicit user input wins over any category default for these two
    // fields, which also keeps save-then-reinfer round trips stable.
    profile.budget_range = Some(cost);
    profile.shelf_life_requirement = Some(shelf_life);

    match cost {
        CostTier::Premium => {
            profile.brand_positioning = Some(BrandPositioning::Premium);
        }
        CostTier::Economy => {
            profile.brand_positioning = Some(BrandPositioning::Value);
            profile.sustainability_priority = Some(SustainabilityPriority::CostFocused);
        }
        CostTier::Standard => {}
    }

    if matches!(
        shelf_life,
        ShelfLifeRequirement::Months | ShelfLifeRequirement::Years
    ) {
        profile.oxygen_sensitivity = Some(SensitivityLevel::High);
        profile.moisture_sensitivity = Some(SensitivityLevel::High);
    }

    profile
}

/// Field overrides a category (or sub-keyword refinement) applies on top of
/// the baseline profile. `None` leaves the current value untouched.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ProfileOverrides {
    product_state: Option<ProductState>,
    viscosity: Option<Viscosity>,
    ph_level: Option<PhLevel>,
    oxygen_sensitivity: Option<SensitivityLevel>,
    moisture_sensitivity: Option<SensitivityLevel>,
    light_sensitivity: Option<SensitivityLevel>,
    storage_temperature: Option<StorageTemperature>,
    shelf_life_requirement: Option<ShelfLifeRequirement>,
    industry_category: Option<&'static str>,
    safety_requirements: &'static [&'static str],
}

impl ProfileOverrides {
    const EMPTY: Self = Self {
        product_state: None,
        viscosity: None,
        ph_level: None,
        oxygen_sensitivity: None,
        moisture_sensitivity: None,
        light_sensitivity: None,
        storage_temperature: None,
        shelf_life_requirement: None,
        industry_category: None,
        safety_requirements: &[],
    };

    fn apply(&self, profile: &mut AttributeProfile) {
        if let Some(value) = self.product_state {
            profile.product_state = Some(value);
        }
        if let Some(value) = self.viscosity {
            profile.viscosity = Some(value);
        }
        if let Some(value) = self.ph_level {
            profile.ph_level = Some(value);
        }
        if let Some(value) = self.oxygen_sensitivity {
            profile.oxygen_sensitivity = Some(value);
        }
        if let Some(value) = self.moisture_sensitivity {
            profile.moisture_sensitivity = Some(value);
        }
        if let Some(value) = self.light_sensitivity {
            profile.light_sensitivity = Some(value);
        }
        if let Some(value) = self.storage_temperature {
            profile.storage_temperature = Some(value);
        }
        if let Some(value) = self.shelf_life_requirement {
            profile.shelf_life_requirement = Some(value);
        }
        if let Some(value) = self.industry_category {
            profile.industry_category = Some(value.to_string());
        }
        for requirement in self.safety_requirements {
            profile.safety_requirements.insert((*requirement).to_string());
        }
    }
}

/// Sub-keyword branch inside a category block.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Refinement {
    keywords: &'static [&'static str],
    overrides: ProfileOverrides,
}

impl Refinement {
    fn matches(&self, haystack: &str) -> bool {
        self.keywords.iter().any(|keyword| haystack.contains(keyword))
    }
}

/// One product-category entry of the inference table.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CategoryRule {
    pub(crate) name: &'static str,
    keywords: &'static [&'static str],
    overrides: ProfileOverrides,
    refinements: &'static [Refinement],
}

impl CategoryRule {
    pub(crate) fn matches(&self, haystack: &str) -> bool {
        self.keywords.iter().any(|keyword| haystack.contains(keyword))
    }
}

/// Ordered category table; the first matching entry applies exclusively.
/// Keywords are matched case-insensitively as substrings of name + purpose.
pub(crate) static CATEGORY_RULES: [CategoryRule; 10] = [
    CategoryRule {
        name: "beverages",
        keywords: &[
            "juice", "beverage", "drink", "soda", "water", "tea", "coffee", "milk", "brew",
        ],
        overrides: ProfileOverrides {
            product_state: Some(ProductState::Liquid),
            viscosity: Some(Viscosity::Low),
            ph_level: Some(PhLevel::Acidic),
            oxygen_sensitivity: Some(SensitivityLevel::Medium),
            light_sensitivity: Some(SensitivityLevel::Medium),
            storage_temperature: Some(StorageTemperature::Ambient),
            shelf_life_requirement: Some(ShelfLifeRequirement::Months),
            industry_category: Some("Food"),
            ..ProfileOverrides::EMPTY
        },
        refinements: &[
            Refinement {
                keywords: &["milk"],
                overrides: ProfileOverrides {
                    ph_level: Some(PhLevel::Neutral),
                    light_sensitivity: Some(SensitivityLevel::High),
                    storage_temperature: Some(StorageTemperature::Cold),
                    shelf_life_requirement: Some(ShelfLifeRequirement::Weeks),
                    ..ProfileOverrides::EMPTY
                },
            },
            Refinement {
                keywords: &["water"],
                overrides: ProfileOverrides {
                    ph_level: Some(PhLevel::Neutral),
                    oxygen_sensitivity: Some(SensitivityLevel::Low),
                    light_sensitivity: Some(SensitivityLevel::Low),
                    ..ProfileOverrides::EMPTY
                },
            },
            Refinement {
                keywords: &["soda", "sparkling", "carbonated"],
                overrides: ProfileOverrides {
                    oxygen_sensitivity: Some(SensitivityLevel::High),
                    ..ProfileOverrides::EMPTY
                },
            },
        ],
    },
    CategoryRule {
        name: "dairy",
        keywords: &["yogurt", "yoghurt", "cheese", "butter", "cream", "dairy", "kefir"],
        overrides: ProfileOverrides {
            product_state: Some(ProductState::SemiSolid),
            viscosity: Some(Viscosity::High),
            ph_level: Some(PhLevel::Neutral),
            oxygen_sensitivity: Some(SensitivityLevel::Medium),
            light_sensitivity: Some(SensitivityLevel::High),
            storage_temperature: Some(StorageTemperature::Cold),
            shelf_life_requirement: Some(ShelfLifeRequirement::Weeks),
            industry_category: Some("Food"),
            ..ProfileOverrides::EMPTY
        },
        refinements: &[
            Refinement {
                keywords: &["yogurt", "yoghurt", "kefir"],
                overrides: ProfileOverrides {
                    ph_level: Some(PhLevel::Acidic),
                    ..ProfileOverrides::EMPTY
                },
            },
            Refinement {
                keywords: &["butter"],
                overrides: ProfileOverrides {
                    product_state: Some(ProductState::Solid),
                    oxygen_sensitivity: Some(SensitivityLevel::High),
                    ..ProfileOverrides::EMPTY
                },
            },
        ],
    },
    CategoryRule {
        name: "oils and sauces",
        keywords: &[
            "oil", "sauce", "ketchup", "mayonnaise", "dressing", "vinegar", "syrup", "honey",
        ],
        overrides: ProfileOverrides {
            product_state: Some(ProductState::Liquid),
            viscosity: Some(Viscosity::High),
            ph_level: Some(PhLevel::Neutral),
            oxygen_sensitivity: Some(SensitivityLevel::High),
            light_sensitivity: Some(SensitivityLevel::High),
            storage_temperature: Some(StorageTemperature::Ambient),
            shelf_life_requirement: Some(ShelfLifeRequirement::Months),
            industry_category: Some("Food"),
            ..ProfileOverrides::EMPTY
        },
        refinements: &[
            Refinement {
                keywords: &["ketchup", "vinegar", "sauce", "dressing"],
                overrides: ProfileOverrides {
                    ph_level: Some(PhLevel::Acidic),
                    viscosity: Some(Viscosity::Medium),
                    ..ProfileOverrides::EMPTY
                },
            },
            Refinement {
                keywords: &["honey", "syrup"],
                overrides: ProfileOverrides {
                    moisture_sensitivity: Some(SensitivityLevel::High),
                    ..ProfileOverrides::EMPTY
                },
            },
        ],
    },
    CategoryRule {
        name: "grains and dry goods",
        keywords: &[
            "rice", "flour", "pasta", "cereal", "grain", "oat", "lentil", "sugar", "salt", "spice",
        ],
        overrides: ProfileOverrides {
            product_state: Some(ProductState::Solid),
            viscosity: Some(Viscosity::NotApplicable),
            oxygen_sensitivity: Some(SensitivityLevel::Low),
            moisture_sensitivity: Some(SensitivityLevel::High),
            light_sensitivity: Some(SensitivityLevel::Low),
            storage_temperature: Some(StorageTemperature::Ambient),
            shelf_life_requirement: Some(ShelfLifeRequirement::Months),
            industry_category: Some("Food"),
            ..ProfileOverrides::EMPTY
        },
        refinements: &[Refinement {
            keywords: &["flour", "sugar", "salt", "spice"],
            overrides: ProfileOverrides {
                product_state: Some(ProductState::Powder),
                ..ProfileOverrides::EMPTY
            },
        }],
    },
    CategoryRule {
        name: "snacks",
        keywords: &[
            "chip", "crisp", "snack", "cracker", "cookie", "biscuit", "nut", "pretzel", "popcorn",
        ],
        overrides: ProfileOverrides {
            product_state: Some(ProductState::Solid),
            viscosity: Some(Viscosity::NotApplicable),
            oxygen_sensitivity: Some(SensitivityLevel::High),
            moisture_sensitivity: Some(SensitivityLevel::High),
            light_sensitivity: Some(SensitivityLevel::Medium),
            storage_temperature: Some(StorageTemperature::Ambient),
            shelf_life_requirement: Some(ShelfLifeRequirement::Months),
            industry_category: Some("Food"),
            ..ProfileOverrides::EMPTY
        },
        refinements: &[],
    },
    CategoryRule {
        name: "meat and protein",
        keywords: &[
            "meat", "chicken", "beef", "pork", "fish", "salmon", "jerky", "sausage", "protein",
        ],
        overrides: ProfileOverrides {
            product_state: Some(ProductState::Solid),
            viscosity: Some(Viscosity::NotApplicable),
            oxygen_sensitivity: Some(SensitivityLevel::High),
            moisture_sensitivity: Some(SensitivityLevel::Medium),
            light_sensitivity: Some(SensitivityLevel::Medium),
            storage_temperature: Some(StorageTemperature::Cold),
            shelf_life_requirement: Some(ShelfLifeRequirement::Days),
            industry_category: Some("Food"),
            safety_requirements: &["Tamper evident"],
            ..ProfileOverrides::EMPTY
        },
        refinements: &[Refinement {
            keywords: &["jerky", "dried", "cured"],
            overrides: ProfileOverrides {
                storage_temperature: Some(StorageTemperature::Ambient),
                shelf_life_requirement: Some(ShelfLifeRequirement::Months),
                moisture_sensitivity: Some(SensitivityLevel::High),
                ..ProfileOverrides::EMPTY
            },
        }],
    },
    CategoryRule {
        name: "frozen",
        keywords: &["frozen", "ice cream", "gelato", "popsicle"],
        overrides: ProfileOverrides {
            product_state: Some(ProductState::Solid),
            oxygen_sensitivity: Some(SensitivityLevel::Low),
            moisture_sensitivity: Some(SensitivityLevel::High),
            light_sensitivity: Some(SensitivityLevel::Low),
            storage_temperature: Some(StorageTemperature::Frozen),
            shelf_life_requirement: Some(ShelfLifeRequirement::Months),
            industry_category: Some("Food"),
            ..ProfileOverrides::EMPTY
        },
        refinements: &[Refinement {
            keywords: &["ice cream", "gelato"],
            overrides: ProfileOverrides {
                product_state: Some(ProductState::SemiSolid),
                ..ProfileOverrides::EMPTY
            },
        }],
    },
    CategoryRule {
        name: "canned",
        keywords: &["canned", "soup", "stew", "preserved", "tinned"],
        overrides: ProfileOverrides {
            product_state: Some(ProductState::Liquid),
            viscosity: Some(Viscosity::Medium),
            ph_level: Some(PhLevel::Neutral),
            oxygen_sensitivity: Some(SensitivityLevel::Low),
            light_sensitivity: Some(SensitivityLevel::Low),
            storage_temperature: Some(StorageTemperature::Ambient),
            shelf_life_requirement: Some(ShelfLifeRequirement::Years),
            industry_category: Some("Food"),
            ..ProfileOverrides::EMPTY
        },
        refinements: &[Refinement {
            keywords: &["tomato"],
            overrides: ProfileOverrides {
                ph_level: Some(PhLevel::Acidic),
                ..ProfileOverrides::EMPTY
            },
        }],
    },
    CategoryRule {
        name: "confectionery",
        keywords: &["chocolate", "candy", "sweet", "gum", "toffee", "caramel", "confection"],
        overrides: ProfileOverrides {
            product_state: Some(ProductState::Solid),
            viscosity: Some(Viscosity::NotApplicable),
            oxygen_sensitivity: Some(SensitivityLevel::Medium),
            moisture_sensitivity: Some(SensitivityLevel::High),
            light_sensitivity: Some(SensitivityLevel::Medium),
            storage_temperature: Some(StorageTemperature::Cool),
            shelf_life_requirement: Some(ShelfLifeRequirement::Months),
            industry_category: Some("Food"),
            ..ProfileOverrides::EMPTY
        },
        refinements: &[Refinement {
            keywords: &["chocolate"],
            overrides: ProfileOverrides {
                light_sensitivity: Some(SensitivityLevel::High),
                ..ProfileOverrides::EMPTY
            },
        }],
    },
    CategoryRule {
        name: "baby food",
        keywords: &["baby", "infant", "formula", "toddler"],
        overrides: ProfileOverrides {
            product_state: Some(ProductState::Paste),
            viscosity: Some(Viscosity::High),
            ph_level: Some(PhLevel::Neutral),
            oxygen_sensitivity: Some(SensitivityLevel::High),
            moisture_sensitivity: Some(SensitivityLevel::Medium),
            light_sensitivity: Some(SensitivityLevel::Medium),
            storage_temperature: Some(StorageTemperature::Ambient),
            shelf_life_requirement: Some(ShelfLifeRequirement::Months),
            industry_category: Some("Food"),
            safety_requirements: &["Tamper evident"],
            ..ProfileOverrides::EMPTY
        },
        refinements: &[Refinement {
            keywords: &["formula", "powder"],
            overrides: ProfileOverrides {
                product_state: Some(ProductState::Powder),
                moisture_sensitivity: Some(SensitivityLevel::High),
                ..ProfileOverrides::EMPTY
            },
        }],
    },
];
