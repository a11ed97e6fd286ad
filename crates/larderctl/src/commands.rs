//! Subcommand execution for larderctl.
//!
//! All commands operate directly on the builtin catalog; the matcher is
//! pure compute, so there is no daemon round-trip.

use anyhow::Result;
use larder_common::{Catalog, MatchEngine};
use owo_colors::OwoColorize;

pub fn search(catalog: &Catalog, query: &str, limit: Option<usize>, json: bool) -> Result<()> {
    let engine = MatchEngine::new(catalog);
    let mut hits = engine.search(query);
    if let Some(limit) = limit {
        hits.truncate(limit);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&hits)?);
        return Ok(());
    }

    if hits.is_empty() {
        println!("No catalog entries match '{}'", query.trim());
        return Ok(());
    }

    for hit in hits {
        println!(
            "{}  {}",
            hit.ingredient.name.green().bold(),
            format!("[{}]", hit.category_name).dimmed()
        );
        if !hit.ingredient.variations.is_empty() {
            println!("    also: {}", hit.ingredient.variations.join(", ").dimmed());
        }
    }
    Ok(())
}

pub fn normalize(catalog: &Catalog, name: &str, json: bool) -> Result<()> {
    let engine = MatchEngine::new(catalog);
    let canonical = engine.normalize(name);
    let recognized = !engine.search(name).is_empty();

    if json {
        println!(
            "{}",
            serde_json::json!({
                "input": name,
                "canonical": canonical,
                "recognized": recognized,
            })
        );
        return Ok(());
    }

    if recognized {
        println!("{} -> {}", name.trim(), canonical.green().bold());
    } else {
        println!(
            "{} -> {}  {}",
            name.trim(),
            canonical.yellow(),
            "(not in catalog, kept as-is)".dimmed()
        );
    }
    Ok(())
}

/// Returns whether the pair matched, so main can set the exit code.
pub fn check_match(catalog: &Catalog, a: &str, b: &str) -> bool {
    let engine = MatchEngine::new(catalog);

    if engine.matches(a, b) {
        println!(
            "{}  '{}' and '{}' refer to {}",
            "match".green().bold(),
            a,
            b,
            engine.normalize(a).bold()
        );
        true
    } else {
        println!(
            "{}  '{}' and '{}' are different ingredients",
            "no match".red().bold(),
            a,
            b
        );
        false
    }
}

pub fn categories(catalog: &Catalog, name: Option<&str>, json: bool) -> Result<()> {
    match name {
        Some(name) => {
            let entries = catalog.entries_in_category(name);
            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
                return Ok(());
            }
            if entries.is_empty() {
                println!("No category named '{}'", name);
                return Ok(());
            }
            for entry in entries {
                println!("{}", entry.name.green());
            }
        }
        None => {
            if json {
                let names: Vec<&str> =
                    catalog.categories().iter().map(|c| c.name.as_str()).collect();
                println!("{}", serde_json::to_string_pretty(&names)?);
                return Ok(());
            }
            for cat in catalog.categories() {
                println!(
                    "{}  {}",
                    cat.name.green().bold(),
                    format!("({} entries)", cat.entries.len()).dimmed()
                );
            }
        }
    }
    Ok(())
}
