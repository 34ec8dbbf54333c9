use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use super::domain::{BarrierLevel, CostTier, PhLevel, ProductState, StorageTemperature};
use super::records::{Material, MaterialCharacteristics, SustainabilityTraits};

/// Error raised while bulk-loading materials from a CSV export.
#[derive(Debug, thiserror::Error)]
pub enum MaterialImportError {
    #[error("failed to read material export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid material CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row} ({name}): {detail}")]
    Invalid {
        row: usize,
        name: String,
        detail: String,
    },
}

/// Parse a material CSV export into catalog entries, keyed by material name.
///
/// Multi-valued cells (product states, pH tolerance, temperature range) are
/// `;`-separated. Any unparseable cell fails the whole import with the row
/// number so catalog edits stay all-or-nothing.
pub fn import_materials_from_reader<R: Read>(
    reader: R,
) -> Result<BTreeMap<String, Material>, MaterialImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut materials = BTreeMap::new();
    for (index, record) in csv_reader.deserialize::<MaterialRow>().enumerate() {
        let row = record?;
        // Header occupies line 1.
        let line = index + 2;
        let material = row.to_material(line)?;
        materials.insert(row.name, material);
    }

    Ok(materials)
}

pub fn import_materials_from_path(
    path: impl AsRef<Path>,
) -> Result<BTreeMap<String, Material>, MaterialImportError> {
    let file = File::open(path)?;
    import_materials_from_reader(file)
}

#[derive(Debug, Deserialize)]
struct MaterialRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Material Type")]
    material_type: String,
    #[serde(rename = "Cost Category")]
    cost_category: String,
    #[serde(rename = "Product States")]
    product_states: String,
    #[serde(rename = "Oxygen Barrier")]
    oxygen_barrier: String,
    #[serde(rename = "Moisture Barrier")]
    moisture_barrier: String,
    #[serde(rename = "Light Barrier")]
    light_barrier: String,
    #[serde(rename = "pH Tolerance")]
    ph_tolerance: String,
    #[serde(rename = "Temperature Range")]
    temperature_range: String,
    #[serde(rename = "Recyclable")]
    recyclable: String,
    #[serde(rename = "PCR Available")]
    pcr_available: String,
    #[serde(rename = "Biodegradable")]
    biodegradable: String,
}

impl MaterialRow {
    fn to_material(&self, row: usize) -> Result<Material, MaterialImportError> {
        let invalid = |detail: String| MaterialImportError::Invalid {
            row,
            name: self.name.clone(),
            detail,
        };

        let characteristics = MaterialCharacteristics {
            cost_category: parse_cell::<CostTier>(&self.cost_category).map_err(&invalid)?,
            product_state_compatibility: parse_set::<ProductState>(&self.product_states)
                .map_err(&invalid)?,
            oxygen_barrier: parse_cell::<BarrierLevel>(&self.oxygen_barrier).map_err(&invalid)?,
            moisture_barrier: parse_cell::<BarrierLevel>(&self.moisture_barrier)
                .map_err(&invalid)?,
            light_barrier: parse_cell::<BarrierLevel>(&self.light_barrier).map_err(&invalid)?,
            chemical_resistance: None,
            ph_tolerance: parse_set::<PhLevel>(&self.ph_tolerance).map_err(&invalid)?,
            temperature_range: parse_set::<StorageTemperature>(&self.temperature_range)
                .map_err(&invalid)?,
        };

        let sustainability = SustainabilityTraits {
            recyclable: parse_flag(&self.recyclable).map_err(&invalid)?,
            pcr_available: parse_flag(&self.pcr_available).map_err(&invalid)?,
            biodegradable: parse_flag(&self.biodegradable).map_err(&invalid)?,
        };

        Ok(Material {
            material_type: self.material_type.clone(),
            characteristics,
            sustainability,
            pros: Vec::new(),
            cons: Vec::new(),
            technical_specs: BTreeMap::new(),
        })
    }
}

fn parse_cell<T>(raw: &str) -> Result<T, String>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse::<T>().map_err(|err| err.to_string())
}

fn parse_set<T>(raw: &str) -> Result<BTreeSet<T>, String>
where
    T: FromStr + Ord,
    T::Err: std::fmt::Display,
{
    raw.split(';')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| part.parse::<T>().map_err(|err| err.to_string()))
        .collect()
}

fn parse_flag(raw: &str) -> Result<bool, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" | "" => Ok(false),
        other => Err(format!("expected a boolean flag, found '{other}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const HEADER: &str = "Name,Material Type,Cost Category,Product States,Oxygen Barrier,Moisture Barrier,Light Barrier,pH Tolerance,Temperature Range,Recyclable,PCR Available,Biodegradable\n";

    #[test]
    fn imports_well_formed_rows() {
        let csv = format!(
            "{HEADER}Glass_Jar,Rigid glass container,Premium,Liquid;Paste,Excellent,Excellent,Low,Acidic;Neutral;Basic,Cold;Ambient,yes,yes,no\n"
        );

        let materials =
            import_materials_from_reader(Cursor::new(csv)).expect("import succeeds");

        assert_eq!(materials.len(), 1);
        let jar = &materials["Glass_Jar"];
        assert_eq!(jar.characteristics.cost_category, CostTier::Premium);
        assert_eq!(jar.characteristics.oxygen_barrier, BarrierLevel::Excellent);
        assert!(jar
            .characteristics
            .product_state_compatibility
            .contains(&ProductState::Paste));
        assert!(jar.sustainability.recyclable);
        assert!(!jar.sustainability.biodegradable);
    }

    #[test]
    fn unknown_vocabulary_fails_with_the_row_number() {
        let csv = format!(
            "{HEADER}Mystery,Unknown,Deluxe,Liquid,High,High,High,Neutral,Ambient,no,no,no\n"
        );

        let error = import_materials_from_reader(Cursor::new(csv))
            .expect_err("deluxe is not a cost tier");

        match error {
            MaterialImportError::Invalid { row, ref name, .. } => {
                assert_eq!(row, 2);
                assert_eq!(name, "Mystery");
            }
            other => panic!("expected invalid row error, got {other:?}"),
        }
    }

    #[test]
    fn multi_valued_cells_trim_whitespace() {
        let csv = format!(
            "{HEADER}Pouch,Flexible pouch,Economy,Solid; Powder ,Low,Low,Medium,Neutral,Ambient,true,false,true\n"
        );

        let materials =
            import_materials_from_reader(Cursor::new(csv)).expect("import succeeds");
        let pouch = &materials["Pouch"];

        assert!(pouch
            .characteristics
            .product_state_compatibility
            .contains(&ProductState::Powder));
    }
}
