//! # Seed Data Generator
//!
//! Populates the database with the tamalería's catalog and a sample day
//! of production, for development.
//!
//! ## Usage
//! ```bash
//! cargo run -p masa-db --bin seed
//!
//! # Specify database path
//! cargo run -p masa-db --bin seed -- --db ./data/masa.db
//! ```

use std::env;

use masa_core::day::today;
use masa_core::{Money, ReconcilePolicy, ReconcileStrategy, Variety, DEFAULT_UNIT_COST_CENTS};
use masa_db::{Database, DbConfig};

/// The catalog a corner tamalería actually sells: (name, price in
/// centavos, category).
const CATALOG: &[(&str, i64, Option<&str>)] = &[
    ("Tamal Rojo", 2200, Some("Tamales")),
    ("Tamal Rajas", 2200, Some("Tamales")),
    ("Tamal Verde", 2200, Some("Tamales")),
    ("Tamal Prensado", 2200, Some("Tamales")),
    ("Tamal Frijoles", 2200, Some("Tamales")),
    ("Tamal Dulce", 2200, Some("Tamales")),
    ("Guajolota", 3500, Some("Tortas")),
    ("Atole de Arroz", 2000, Some("Bebidas")),
    ("Champurrado", 2000, Some("Bebidas")),
    ("Café de Olla", 1800, Some("Bebidas")),
    ("Agua", 1500, Some("Bebidas")),
];

/// A plausible morning of production: (variety, pieces).
const PRODUCTION: &[(Variety, i64)] = &[
    (Variety::Rojo, 40),
    (Variety::Rajas, 30),
    (Variety::Verde, 30),
    (Variety::Prensado, 20),
    (Variety::Frijoles, 25),
    (Variety::Dulce, 15),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./masa.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("masa Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./masa.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 masa Seed Data Generator");
    println!("===========================");
    println!("Database: {}", db_path);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let existing = db.products().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    println!();
    println!("Seeding catalog...");
    for (name, price_cents, category) in CATALOG {
        db.products()
            .create(
                name,
                Money::from_cents(*price_cents),
                category.map(String::from),
            )
            .await?;
    }
    println!("  {} products", CATALOG.len());

    println!("Seeding today's production...");
    let policy = ReconcilePolicy::new(
        ReconcileStrategy::Production,
        Money::from_cents(DEFAULT_UNIT_COST_CENTS),
    );
    let day = today();
    let mut total = 0;
    for (variety, quantity) in PRODUCTION {
        db.production()
            .set_quantity(*variety, day, *quantity, &policy)
            .await?;
        total += quantity;
    }
    println!("  {} pieces across {} varieties", total, PRODUCTION.len());

    println!();
    println!("✓ Seed complete!");

    Ok(())
}
