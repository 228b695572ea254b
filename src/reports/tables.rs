use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use homerow::combos::{expected_count, EnumerationMode};
use homerow::error::HrResult;
use homerow::keycodes::KeyCode;
use homerow::keymap::HomeRowKeymap;
use std::collections::BTreeMap;

pub fn groups(groups: &[Vec<KeyCode>], keymap: &HomeRowKeymap) -> HrResult<()> {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Size"),
        Cell::new("Keys").fg(Color::Cyan),
        Cell::new("Held").fg(Color::Green),
    ]);

    for i in 0..=1 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (i, group) in groups.iter().enumerate() {
        let keys: Vec<String> = group.iter().map(|k| k.to_string()).collect();
        let mods: Vec<String> = keymap
            .modifiers_for(group)?
            .iter()
            .map(|m| m.to_string())
            .collect();

        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(group.len()),
            Cell::new(keys.join(" + ")).fg(Color::Cyan),
            Cell::new(mods.join(" + ")).fg(Color::Green),
        ]);
    }
    println!("\n{}", table);
    Ok(())
}

pub fn size_summary(groups: &[Vec<KeyCode>], n: usize, max_size: usize, mode: EnumerationMode) {
    let mut by_size: BTreeMap<usize, usize> = BTreeMap::new();
    for group in groups {
        *by_size.entry(group.len()).or_default() += 1;
    }

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Size").add_attribute(Attribute::Bold),
        Cell::new("Kind"),
        Cell::new("Groups").fg(Color::Cyan),
    ]);

    for (size, count) in by_size.iter().rev() {
        let kind = if mode.is_ordered(*size) { "ordered" } else { "set" };
        table.add_row(vec![Cell::new(size), Cell::new(kind), Cell::new(count)]);
    }

    let expected = expected_count(n, max_size, mode);
    let total_cell = if expected == groups.len() {
        Cell::new(groups.len()).fg(Color::Green)
    } else {
        Cell::new(format!("{} (expected {})", groups.len(), expected)).fg(Color::Red)
    };
    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(""),
        total_cell.add_attribute(Attribute::Bold),
    ]);

    if let Some(col) = table.column_mut(2) {
        col.set_cell_alignment(CellAlignment::Right);
    }
    println!("\n{}", table);
}
