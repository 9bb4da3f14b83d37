//! Catalog loading
//!
//! Loads the crop, livestock, pasture, and ward-climate catalogs from CSV
//! using Polars. Header-to-field mapping lives entirely in this module; the
//! rest of the crate works with the structured records in `records`.
//!
//! Parsing is deliberately lenient, matching the upstream catalogs: missing
//! numeric cells default to 0 and rows without the essential name columns
//! are skipped. Anything beyond that is the data pipeline's problem.

use crate::records::{ClimateRecord, CropVariety, LivestockRecord, PastureRecord};
use anyhow::{Context, Result};
use polars::prelude::*;
use std::path::Path;
use thiserror::Error;

/// Schema problems in a catalog file.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("column '{column}' missing from {file}")]
    MissingColumn { column: String, file: String },

    #[error("column '{column}' in {file} is not usable as {expected}")]
    ColumnType {
        column: String,
        file: String,
        expected: &'static str,
    },
}

/// All four catalogs, loaded and validated.
pub struct Catalog {
    pub crops: Vec<CropVariety>,
    pub livestock: Vec<LivestockRecord>,
    pub pasture: Vec<PastureRecord>,
    pub climate: Vec<ClimateRecord>,
}

impl Catalog {
    /// Load all catalogs from a directory containing `crops.csv`,
    /// `livestock.csv`, `pasture.csv`, and `climate.csv`.
    pub fn load_from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        println!("Loading catalogs from {}...", dir.display());

        let crops = load_crops(dir.join("crops.csv"))?;
        let livestock = load_livestock(dir.join("livestock.csv"))?;
        let pasture = load_pasture(dir.join("pasture.csv"))?;
        let climate = load_climate(dir.join("climate.csv"))?;

        println!("  Crop varieties: {}", crops.len());
        println!("  Livestock breeds: {}", livestock.len());
        println!("  Pasture varieties: {}", pasture.len());
        println!("  Ward climate records: {}", climate.len());

        Ok(Catalog {
            crops,
            livestock,
            pasture,
            climate,
        })
    }
}

/// Exact (case-insensitive) ward lookup by administrative names.
pub fn find_ward<'a>(
    records: &'a [ClimateRecord],
    county: &str,
    subcounty: &str,
    ward: &str,
) -> Option<&'a ClimateRecord> {
    records.iter().find(|rec| {
        rec.county.eq_ignore_ascii_case(county)
            && rec.subcounty.eq_ignore_ascii_case(subcounty)
            && rec.ward.eq_ignore_ascii_case(ward)
    })
}

/// Load the crop variety catalog.
pub fn load_crops(path: impl AsRef<Path>) -> Result<Vec<CropVariety>> {
    let path = path.as_ref();
    let file = path.display().to_string();
    let df = read_csv(path)?;

    let types = str_column(&df, "Type", &file)?;
    let crops = str_column(&df, "Crop", &file)?;
    let varieties = str_column(&df, "Variety", &file)?;
    let tex1 = str_column(&df, "tex1", &file)?;
    let tex2 = str_column(&df, "tex2", &file)?;
    let tex3 = str_column(&df, "tex3", &file)?;
    let min_ph = f64_column(&df, "minpH", &file)?;
    let max_ph = f64_column(&df, "maxpH", &file)?;
    let min_temp = f64_column(&df, "minTemp", &file)?;
    let max_temp = f64_column(&df, "maxTemp", &file)?;
    let min_rain = f64_column(&df, "minPrep", &file)?;
    let max_rain = f64_column(&df, "maxPrep", &file)?;
    let min_alti = f64_column(&df, "minAlti", &file)?;
    let max_alti = f64_column(&df, "maxAlti", &file)?;
    let drought = flag_column(&df, "drought_tolerant", &file)?;
    let pest = flag_column(&df, "pest_tolerant", &file)?;
    let seed = flag_column(&df, "availability", &file)?;
    let preference = flag_column(&df, "farmer_preference", &file)?;

    let mut records = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        // Rows without the essential name columns are skipped.
        if types[i].is_empty() || crops[i].is_empty() || varieties[i].is_empty() {
            continue;
        }

        let textures: Vec<String> = [&tex1[i], &tex2[i], &tex3[i]]
            .into_iter()
            .filter(|t| !t.is_empty())
            .cloned()
            .collect();

        records.push(CropVariety {
            crop_type: types[i].clone(),
            crop: crops[i].clone(),
            variety: varieties[i].clone(),
            textures,
            min_temp_c: min_temp[i],
            max_temp_c: max_temp[i],
            min_rainfall_mm: min_rain[i],
            max_rainfall_mm: max_rain[i],
            min_altitude_m: min_alti[i],
            max_altitude_m: max_alti[i],
            min_ph: min_ph[i],
            max_ph: max_ph[i],
            drought_tolerant: drought[i],
            pest_tolerant: pest[i],
            seed_available: seed[i],
            farmer_preferred: preference[i],
        });
    }

    Ok(records)
}

/// Load the livestock breed catalog.
pub fn load_livestock(path: impl AsRef<Path>) -> Result<Vec<LivestockRecord>> {
    let path = path.as_ref();
    let file = path.display().to_string();
    let df = read_csv(path)?;

    let categories = str_column(&df, "Livestock", &file)?;
    let breeds = str_column(&df, "Breed", &file)?;
    let aez = str_column(&df, "AEZ", &file)?;

    let mut records = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        if categories[i].is_empty() || breeds[i].is_empty() {
            continue;
        }
        records.push(LivestockRecord {
            category: categories[i].clone(),
            breed: breeds[i].clone(),
            aez: aez[i].clone(),
        });
    }

    Ok(records)
}

/// Load the pasture/fodder catalog.
pub fn load_pasture(path: impl AsRef<Path>) -> Result<Vec<PastureRecord>> {
    let path = path.as_ref();
    let file = path.display().to_string();
    let df = read_csv(path)?;

    // The upstream catalog names its category column "Pasture/fodder".
    let categories = str_column(&df, "Pasture/fodder", &file)?;
    let types = str_column(&df, "Type", &file)?;
    let varieties = str_column(&df, "Variety", &file)?;
    let aez = str_column(&df, "AEZ", &file)?;

    let mut records = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        if categories[i].is_empty() {
            continue;
        }
        records.push(PastureRecord {
            category: categories[i].clone(),
            pasture_type: types[i].clone(),
            variety: varieties[i].clone(),
            aez: aez[i].clone(),
        });
    }

    Ok(records)
}

/// Load the ward climate catalog.
pub fn load_climate(path: impl AsRef<Path>) -> Result<Vec<ClimateRecord>> {
    let path = path.as_ref();
    let file = path.display().to_string();
    let df = read_csv(path)?;

    let counties = str_column(&df, "county", &file)?;
    let subcounties = str_column(&df, "subcounty", &file)?;
    let wards = str_column(&df, "ward", &file)?;
    let lat = f64_column(&df, "lat", &file)?;
    let lon = f64_column(&df, "lon", &file)?;
    let altitude = f64_column(&df, "altitude", &file)?;
    let rainfall = f64_column(&df, "annual_Rain", &file)?;
    let temperature = f64_column(&df, "annual_Temp", &file)?;
    let soil_ph = f64_column(&df, "ke_ph", &file)?;

    let mut records = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        if wards[i].is_empty() {
            continue;
        }
        records.push(ClimateRecord {
            county: counties[i].clone(),
            subcounty: subcounties[i].clone(),
            ward: wards[i].clone(),
            latitude: lat[i],
            longitude: lon[i],
            altitude_m: altitude[i],
            annual_rainfall_mm: rainfall[i],
            annual_temp_c: temperature[i],
            soil_ph: soil_ph[i],
        });
    }

    Ok(records)
}

fn read_csv(path: &Path) -> Result<DataFrame> {
    CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.into()))
        .with_context(|| format!("Failed to create CSV reader: {}", path.display()))?
        .finish()
        .with_context(|| format!("Failed to load CSV: {}", path.display()))
}

fn str_column(df: &DataFrame, column: &str, file: &str) -> Result<Vec<String>> {
    let col = df.column(column).map_err(|_| CatalogError::MissingColumn {
        column: column.to_string(),
        file: file.to_string(),
    })?;
    // All-numeric columns can infer as numbers; cast back to string.
    let casted = col
        .cast(&DataType::String)
        .map_err(|_| CatalogError::ColumnType {
            column: column.to_string(),
            file: file.to_string(),
            expected: "string",
        })?;
    let ca = casted.str().map_err(|_| CatalogError::ColumnType {
        column: column.to_string(),
        file: file.to_string(),
        expected: "string",
    })?;
    Ok(ca
        .into_iter()
        .map(|v| v.map(|s| s.trim().to_string()).unwrap_or_default())
        .collect())
}

fn f64_column(df: &DataFrame, column: &str, file: &str) -> Result<Vec<f64>> {
    let col = df.column(column).map_err(|_| CatalogError::MissingColumn {
        column: column.to_string(),
        file: file.to_string(),
    })?;
    let casted = col
        .cast(&DataType::Float64)
        .map_err(|_| CatalogError::ColumnType {
            column: column.to_string(),
            file: file.to_string(),
            expected: "float",
        })?;
    let ca = casted.f64().map_err(|_| CatalogError::ColumnType {
        column: column.to_string(),
        file: file.to_string(),
        expected: "float",
    })?;
    // Missing cells default to 0, matching the upstream parser.
    Ok(ca.into_iter().map(|v| v.unwrap_or(0.0)).collect())
}

fn flag_column(df: &DataFrame, column: &str, file: &str) -> Result<Vec<bool>> {
    let values = f64_column(df, column, file)?;
    Ok(values.into_iter().map(|v| v == 1.0).collect())
}
