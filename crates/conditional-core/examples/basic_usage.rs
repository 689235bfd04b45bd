//! Basic usage example for conditional-core
//!
//! Run with: RUST_LOG=debug cargo run --example basic_usage

use conditional_core::{ConditionalCollection, ConditionalPeriod, ConditionalType, PeriodRegistry};

fn main() -> conditional_core::Result<()> {
    env_logger::init();

    println!("=== Conditional Core Basic Usage Example ===\n");

    // Example 1: Building a period from fields
    println!("1. Category Period (1..=3 gives 3 days):");
    let period = ConditionalPeriod::new(ConditionalType::Category, 1, 3, "P3D")?;
    println!("   String form: {}", period);
    println!("   Matches 2: {}", period.matches(2)?);
    println!("   Matches 4: {}\n", period.matches(4)?);

    // Example 2: Parsing a duration period
    println!("2. Duration Period (1 day..=2 days gives 3 days):");
    let period = ConditionalPeriod::parse("DP1DP2DP3D")?;
    println!("   Lower: {}, Upper: {}, Result: {}", period.lower(), period.upper(), period.result());
    println!("   Matches '36 hours': {}\n", period.matches("36 hours")?);

    // Example 3: First-match lookup in a collection
    println!("3. Collection Lookup:");
    let mut collection = ConditionalCollection::parse("C1-3P3D,C4-6P6D")?;
    collection.push("C7-10P9D", None)?;
    println!("   Collection: {}", collection);
    for value in [2, 5, 9, 12] {
        match collection.find(value)? {
            Some(found) => println!("   {} -> {} (result {})", value, found, found.result()),
            None => println!("   {} -> no match", value),
        }
    }
    println!("   JSON: {}\n", collection.to_json()?);

    // Example 4: Mixing types is rejected
    println!("4. Type Check:");
    match collection.push("DP1DP2DP3D", None) {
        Ok(_) => println!("   unexpected success"),
        Err(err) => println!("   {}\n", err),
    }

    // Example 5: Registry of named tables
    println!("5. Registry:");
    let registry = PeriodRegistry::from_yaml(
        r#"
version: "0.1"
tables:
  delivery: "C1-3P3D,C4-6P6D"
  retention:
    - DP1DP1MP1Y
"#,
    )?;
    if let Some(found) = registry.find("retention", "2 weeks")? {
        println!("   retention for 2 weeks: {}", found.result());
    }
    println!("\n{}", registry.to_yaml()?);

    println!("=== Example Complete ===");
    Ok(())
}
