//! Offline territory check.
//!
//! Resolves well-known sample locations (or a single `--point`) against a
//! territory table without calling the geocoding provider.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use territory_lookup::models::Point;
use territory_lookup::pip::{resolve, TerritoryStore};

#[derive(Parser, Debug)]
#[command(name = "check")]
#[command(about = "Check territory assignment for sample locations")]
struct Args {
    /// Territory table JSON (defaults to the built-in table)
    #[arg(long)]
    territories: Option<PathBuf>,

    /// Resolve a single point given as "lng,lat"
    #[arg(long, allow_hyphen_values = true)]
    point: Option<String>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

struct Sample {
    name: &'static str,
    point: Point,
    /// Acceptable territory names; empty means outside every territory
    expected: &'static [&'static str],
}

const SAMPLES: &[Sample] = &[
    Sample {
        name: "Fort Collins (Downtown)",
        point: Point { lng: -105.0844, lat: 40.5853 },
        expected: &["A"],
    },
    Sample {
        name: "Loveland",
        point: Point { lng: -105.0749, lat: 40.3977 },
        expected: &["B"],
    },
    Sample {
        name: "Longmont",
        point: Point { lng: -105.1019, lat: 40.1672 },
        expected: &["B"],
    },
    Sample {
        name: "Boulder",
        point: Point { lng: -105.2705, lat: 40.0150 },
        expected: &["C"],
    },
    Sample {
        name: "Westminster",
        point: Point { lng: -105.0372, lat: 39.8366 },
        expected: &["C"],
    },
    Sample {
        name: "Denver (Downtown)",
        point: Point { lng: -104.9903, lat: 39.7392 },
        expected: &["C", "D"],
    },
    Sample {
        name: "Centennial",
        point: Point { lng: -104.8769, lat: 39.5807 },
        expected: &["D"],
    },
    Sample {
        name: "Los Angeles (Outside)",
        point: Point { lng: -118.2437, lat: 34.0522 },
        expected: &[],
    },
];

fn parse_point(s: &str) -> Result<Point> {
    let (lng, lat) = s
        .split_once(',')
        .context("Point must be given as \"lng,lat\"")?;
    let lng: f64 = lng.trim().parse().context("Invalid longitude")?;
    let lat: f64 = lat.trim().parse().context("Invalid latitude")?;
    let point = Point::new(lng, lat);
    if !point.is_finite() {
        anyhow::bail!("Point coordinates must be finite");
    }
    Ok(point)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let store = match &args.territories {
        Some(path) => TerritoryStore::from_path(path).context("Failed to load territories")?,
        None => TerritoryStore::load(),
    };

    if let Some(point) = &args.point {
        let point = parse_point(point)?;
        let result = resolve(point, store.territories());
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("Territory Lookup Check");
    println!("======================\n");

    let mut mismatches = 0;
    for sample in SAMPLES {
        let result = resolve(sample.point, store.territories());
        let territory = result.territory_name.as_deref();

        let ok = match territory {
            Some(name) => sample.expected.contains(&name),
            None => sample.expected.is_empty(),
        };
        if !ok {
            mismatches += 1;
        }

        println!("{} {}", if ok { "✓" } else { "?" }, sample.name);
        println!("  Coordinates: {}", sample.point);
        println!("  Territory: {}", territory.unwrap_or("None"));
        if sample.expected.is_empty() {
            println!("  Expected: None");
        } else {
            println!("  Expected: {}", sample.expected.join(" or "));
        }
        if result.found {
            println!("  Description: {}", result.description);
        }
        println!();
    }

    println!("======================");
    if mismatches > 0 {
        anyhow::bail!("{} sample location(s) resolved unexpectedly", mismatches);
    }
    println!("All sample locations resolved as expected.");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_point() {
        assert_eq!(
            parse_point("-105.0844, 40.5853").unwrap(),
            Point::new(-105.0844, 40.5853)
        );
        assert!(parse_point("-105.0844").is_err());
        assert!(parse_point("abc,1").is_err());
        assert!(parse_point("NaN,1").is_err());
    }

    #[test]
    fn test_samples_match_builtin_table() {
        let store = TerritoryStore::load();
        for sample in SAMPLES {
            let result = resolve(sample.point, store.territories());
            match result.territory_name.as_deref() {
                Some(name) => assert!(sample.expected.contains(&name), "{}", sample.name),
                None => assert!(sample.expected.is_empty(), "{}", sample.name),
            }
        }
    }
}
