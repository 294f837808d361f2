//! Tabular view of the loaded scale catalog

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, CellAlignment, Color, Table};
use console::style;

use crate::scales::Catalog;

/// Build the catalog table: one row per scale, in catalog order
pub fn build_catalog_table(catalog: &Catalog) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Scale").add_attribute(Attribute::Bold),
        Cell::new("Symbol").add_attribute(Attribute::Bold),
        Cell::new("Melting").add_attribute(Attribute::Bold),
        Cell::new("Boiling").add_attribute(Attribute::Bold),
    ]);

    for (i, scale) in catalog.iter().enumerate() {
        // Degenerate scales cannot be converted from
        let point_color = if scale.is_degenerate() {
            Color::Red
        } else {
            Color::White
        };

        table.add_row(vec![
            Cell::new(i),
            Cell::new(&scale.name),
            Cell::new(format!("º{}", scale.abbreviation)),
            Cell::new(scale.melting_point)
                .fg(point_color)
                .set_alignment(CellAlignment::Right),
            Cell::new(scale.boiling_point)
                .fg(point_color)
                .set_alignment(CellAlignment::Right),
        ]);
    }

    table
}

/// Print the catalog table with a heading
pub fn display_catalog(catalog: &Catalog) {
    println!();
    println!(
        "    {} {}",
        style("🌡").cyan(),
        style("TEMPERATURE SCALES").white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
    println!();

    if catalog.is_empty() {
        println!("    {}", style("No scales loaded").yellow());
        return;
    }

    // Indent the table
    for line in build_catalog_table(catalog).to_string().lines() {
        println!("    {}", line);
    }
    println!();
}
