//! # Seed Data Generator
//!
//! Populates the database with sample books for development.
//!
//! ## Usage
//! ```bash
//! # Seed the default database file
//! cargo run -p libris-db --bin seed
//!
//! # Specify database path
//! cargo run -p libris-db --bin seed -- --db ./data/libris.db
//! ```
//!
//! Ids are assigned sequentially starting at 1, one run only: seeding is
//! skipped when the database already contains books, since registration ids
//! are caller-chosen and must stay unique.

use std::env;

use libris_core::{Book, Category};
use libris_db::{Database, DbConfig};

/// Sample titles and authors per category.
const CATALOG: &[(Category, &[(&str, &str)])] = &[
    (
        Category::Literature,
        &[
            ("The Paper House", "M. Duarte"),
            ("Winter Letters", "H. Okonkwo"),
            ("A Field of Salt", "R. Castellan"),
        ],
    ),
    (
        Category::Fiction,
        &[
            ("The Cartographer's Son", "L. Imbert"),
            ("Glass Harbor", "P. Strand"),
            ("Nine Days North", "T. Vasquez"),
        ],
    ),
    (
        Category::Action,
        &[
            ("Redline", "K. Moreau"),
            ("The Last Convoy", "S. Adeyemi"),
        ],
    ),
    (
        Category::Thriller,
        &[
            ("The Quiet Floor", "D. Lindqvist"),
            ("Static", "J. Ferreira"),
        ],
    ),
    (
        Category::Technology,
        &[
            ("Go Deep", "Ada"),
            ("Systems at Scale", "N. Patel"),
            ("The Pragmatic Database", "C. Whitfield"),
        ],
    ),
    (
        Category::Drama,
        &[
            ("Three Sisters of Anyox", "E. Marchetti"),
            ("The Long Intermission", "B. Sorensen"),
        ],
    ),
    (
        Category::Poetry,
        &[
            ("Salt and Circuitry", "I. Nakamura"),
            ("Meridian Songs", "A. Diallo"),
        ],
    ),
    (
        Category::Others,
        &[
            ("A Shelf of One's Own", "F. Grant"),
            ("Inventory of Small Things", "W. Osei"),
        ],
    ),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./libris_dev.db");

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
                println!("Libris Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./libris_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Libris Seed Data Generator");
    println!("==========================");
    println!("Database: {}", db_path);
    println!();

    // Connect to database (creates the file and applies migrations)
    let db = Database::new(DbConfig::new(&db_path)).await?;

    println!("Connected, migrations applied");

    // Check existing books
    let existing = db.books().count().await?;
    if existing > 0 {
        println!("Database already has {} books", existing);
        println!("Skipping seed to avoid duplicate ids.");
        println!("Delete the database file to regenerate.");
        return Ok(());
    }

    println!();
    println!("Seeding books...");

    let mut next_id: i64 = 1;
    let mut seeded = 0;

    for (category, entries) in CATALOG {
        for (title, author) in *entries {
            let book = Book {
                id: next_id,
                title: title.to_string(),
                author: author.to_string(),
                // Deterministic pseudo-variety: $6.00 - $21.00 in 50c steps
                price_cents: 600 + (next_id % 31) * 50,
                category: *category,
                total_count: (next_id * 7) % 25,
            };

            if let Err(e) = db.books().insert(&book).await {
                eprintln!("Failed to insert id {}: {}", book.id, e);
                continue;
            }

            next_id += 1;
            seeded += 1;
        }
    }

    let in_stock = db
        .books()
        .find_all()
        .await?
        .iter()
        .filter(|b| b.in_stock())
        .count();
    println!(
        "Seeded {} books across {} categories ({} with stock on hand)",
        seeded,
        CATALOG.len(),
        in_stock
    );

    // Sanity-check the search path
    println!();
    println!("Verifying search...");
    for category in [Category::Technology, Category::Poetry] {
        let hits = db
            .books()
            .find_by_category_and_keyword("", category.code())
            .await?;
        println!("  {}: {} books", category, hits.len());
    }

    println!();
    println!("Seed complete!");

    Ok(())
}
