use std::fs;
use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use rand::SeedableRng;
use rand::rngs::StdRng;

use cw_gen::{AbilityMethod, CharacterSheet, generate};

pub fn run(
    data: &Path,
    method: &str,
    seed: Option<u64>,
    output: Option<&Path>,
) -> Result<(), String> {
    let method = AbilityMethod::parse(method)
        .ok_or_else(|| format!("unknown ability method '{method}' (expected 'standard' or 'roll')"))?;
    let dataset = super::load_dataset(data)?;

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let character = generate(&dataset, method, &mut rng).map_err(|e| e.to_string())?;
    let sheet = CharacterSheet::from_character(&character);

    println!("  {}", sheet.summary.bold());
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    for (label, value) in sheet.entries() {
        table.add_row(vec![label, value]);
    }
    println!("{table}");

    if let Some(path) = output {
        fs::write(path, render_plain(&sheet))
            .map_err(|e| format!("failed to write '{}': {e}", path.display()))?;
        println!();
        println!("  Wrote {}", path.display());
    }

    Ok(())
}

/// Plain-text sheet for file export.
fn render_plain(sheet: &CharacterSheet) -> String {
    let rule = "*".repeat(15);
    let mut out = String::new();
    out.push_str(&sheet.summary);
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');
    for (label, value) in sheet.entries() {
        if label == "Ability scores" {
            out.push_str(label);
            out.push('\n');
            out.push_str(value);
            out.push('\n');
            out.push_str(&rule);
            out.push('\n');
        } else {
            out.push_str(label);
            out.push_str(": ");
            out.push_str(value);
            out.push('\n');
        }
    }
    out
}
