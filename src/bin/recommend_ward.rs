//! Ward Recommendation Driver
//!
//! Loads the CSV catalogs, resolves a ward by administrative names, and
//! prints its zone plus the crop, livestock, and pasture recommendations.
//!
//! Run with: cargo run --bin recommend_ward -- <data_dir> <county> <subcounty> <ward> [--json]

use anyhow::{bail, Result};
use farm_recommender_rust::{
    find_ward, grouping, rank_crops, recommend_livestock, recommend_pasture, shortlist_crops, Aez,
    Catalog,
};

const RANK_LIMIT: usize = 100;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let json = args.iter().any(|a| a == "--json");
    let positional: Vec<&String> = args.iter().filter(|a| *a != "--json").collect();

    if positional.len() != 4 {
        bail!("Usage: recommend_ward <data_dir> <county> <subcounty> <ward> [--json]");
    }
    let (data_dir, county, subcounty, ward_name) =
        (positional[0], positional[1], positional[2], positional[3]);

    let catalog = Catalog::load_from_dir(data_dir)?;

    let Some(ward) = find_ward(&catalog.climate, county, subcounty, ward_name) else {
        bail!("Ward not found: {}, {}, {}", ward_name, subcounty, county);
    };

    let zone = Aez::from_climate(ward.altitude_m, ward.annual_rainfall_mm);
    let crops = shortlist_crops(rank_crops(&catalog.crops, ward, RANK_LIMIT));
    let livestock = recommend_livestock(&catalog.livestock, ward);
    let pasture = recommend_pasture(&catalog.pasture, ward);

    if json {
        let payload = serde_json::json!({
            "ward": ward,
            "zone": zone,
            "crops": crops,
            "livestock": livestock,
            "pasture": pasture,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!("\n{} Ward ({}, {})", ward.ward, ward.subcounty, ward.county);
    println!("=========================================");
    println!(
        "Altitude {}m | Rainfall {}mm | Temp {}°C | Soil pH {}",
        ward.altitude_m, ward.annual_rainfall_mm, ward.annual_temp_c, ward.soil_ph
    );
    println!("Agro-ecological zone: {} ({})", zone, zone.band_name());

    println!("\nCrop recommendations ({}):", crops.len());
    for rec in &crops {
        println!(
            "  [{:>3}] {} - {} ({}) - {}",
            rec.suitability_score,
            rec.crop.crop,
            rec.crop.variety,
            rec.crop.crop_type,
            rec.suitability_label()
        );
        for factor in &rec.matching_factors {
            println!("        + {}", factor);
        }
        for warning in &rec.warnings {
            println!("        ! {}", warning);
        }
    }

    println!("\nLivestock suited to {} ({} breeds):", zone, livestock.len());
    for (category, recs) in grouping::group_livestock_by_category(&livestock) {
        let breeds: Vec<&str> = recs.iter().map(|r| r.record.breed.as_str()).collect();
        println!("  {}: {}", category, breeds.join(", "));
    }

    println!("\nPasture/fodder suited to {} ({} varieties):", zone, pasture.len());
    for (category, recs) in grouping::group_pasture_by_category(&pasture) {
        let names: Vec<String> = recs
            .iter()
            .map(|r| format!("{} {}", r.record.pasture_type, r.record.variety))
            .collect();
        println!("  {}: {}", category, names.join(", "));
    }

    Ok(())
}
