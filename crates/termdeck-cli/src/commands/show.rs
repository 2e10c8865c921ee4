//! The `termdeck show`, `workbooks` and `list` commands.

use anyhow::Result;
use comfy_table::{Cell, Table};

use termdeck_core::model::{list_workbooks, Entry};

use super::AppContext;

pub fn execute(ctx: &AppContext, workbook: &str) -> Result<()> {
    let entries = ctx.store.load_by_workbook(workbook);

    if entries.is_empty() {
        println!("No terms found in workbook '{}'.", workbook.trim());
        return Ok(());
    }

    println!("Workbook: {} ({} terms)", entries[0].workbook, entries.len());
    println!("{}", entry_table(ctx, &entries, false));
    Ok(())
}

pub fn workbooks(ctx: &AppContext) -> Result<()> {
    let entries = ctx.store.load_all();
    let names = list_workbooks(&entries);

    if names.is_empty() {
        println!("No workbooks yet.");
    }
    for name in names {
        let count = entries.iter().filter(|e| e.in_workbook(&name)).count();
        println!("{name} ({count})");
    }
    Ok(())
}

pub fn list(ctx: &AppContext, format: &str) -> Result<()> {
    let entries = ctx.store.load_all();

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&entries)?),
        "text" => {
            if entries.is_empty() {
                println!("No terms available.");
            } else {
                println!("{}", entry_table(ctx, &entries, true));
            }
        }
        other => anyhow::bail!("unknown format: {other} (expected text or json)"),
    }
    Ok(())
}

fn entry_table(ctx: &AppContext, entries: &[Entry], with_workbook: bool) -> Table {
    let show_examples = ctx.config.show_examples && entries.iter().any(Entry::has_example);

    let mut header = Vec::new();
    if with_workbook {
        header.push("Workbook");
    }
    header.extend(["Term", "Definition"]);
    if show_examples {
        header.push("Example");
    }

    let mut table = Table::new();
    table.set_header(header);

    for entry in entries {
        let mut row = Vec::new();
        if with_workbook {
            row.push(Cell::new(&entry.workbook));
        }
        row.push(Cell::new(&entry.term));
        row.push(Cell::new(&entry.definition));
        if show_examples {
            row.push(Cell::new(&entry.example));
        }
        table.add_row(row);
    }
    table
}
