//! Format catalog views as text.

use crate::catalog::types::{
    DeleteOutput, FindOutput, GroupOutput, ListOutput, SortOutput, StatsOutput,
};
use crate::store::FileRecord;
use crate::views::SortKey;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;

/// Format a section heading with bold/underline.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

fn record_table(records: &[FileRecord], numbered: bool) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    if numbered {
        table.set_header(vec!["#", "File", "Size (KB)", "Path"]);
    } else {
        table.set_header(vec!["File", "Size (KB)", "Path"]);
    }
    for (i, record) in records.iter().enumerate() {
        let mut row = Vec::with_capacity(4);
        if numbered {
            row.push((i + 1).to_string());
        }
        row.push(record.full_name());
        row.push(record.size_kb.to_string());
        row.push(record.path.clone());
        table.add_row(row);
    }
    table
}

/// Format the full catalog listing.
pub fn format_list_text(data: &ListOutput) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("All Files")));
    if data.records.is_empty() {
        out.push_str("No files found!\n");
        return out;
    }
    out.push_str(&format!("Total files: {}\n\n", data.total));
    out.push_str(&format!("{}\n", record_table(&data.records, true)));
    out
}

/// Format a sorted view.
pub fn format_sort_text(data: &SortOutput) -> String {
    let (title, subtitle) = match data.key {
        SortKey::Size => ("Files Sorted by Size", "Smallest to largest"),
        SortKey::Name => ("Files Sorted by Name (A-Z)", "Alphabetical order"),
        SortKey::Path => ("Files Sorted by Path", "Path order"),
    };
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading(title)));
    if data.records.is_empty() {
        out.push_str("No files found!\n");
        return out;
    }
    out.push_str(&format!("{}:\n\n", subtitle));
    out.push_str(&format!("{}\n", record_table(&data.records, false)));
    out
}

/// Format a group-by view.
pub fn format_group_text(data: &GroupOutput) -> String {
    let title = format!("Files Organized by {}", data.key);
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading(&title)));
    out.push_str(&format!("Groups found: {}\n\n", data.groups.len()));
    for group in &data.groups {
        let noun = if group.count == 1 { "file" } else { "files" };
        out.push_str(&format!("[{}] - {} {}\n", group.key, group.count, noun));
        out.push_str(&format!("{}\n\n", record_table(&group.records, false)));
    }
    out
}

/// Format a search result.
pub fn format_find_text(data: &FindOutput) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}\n\n",
        format_section_heading(&format!("Search Results for: {}", data.query))
    ));
    match &data.record {
        Some(record) => {
            out.push_str(&format!("[FOUND] {}\n", record.full_name()));
            out.push_str(&format!("Size: {} KB\n", record.size_kb));
            out.push_str(&format!("Path: {}\n", record.path));
            if let Some(ref created) = record.created {
                out.push_str(&format!("Created: {}\n", created));
            }
        }
        None => out.push_str("[NOT FOUND] File not in catalog.\n"),
    }
    out
}

/// Format aggregate statistics.
pub fn format_stats_text(data: &StatsOutput) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("File Statistics")));
    let Some(ref stats) = data.statistics else {
        out.push_str("No files to analyze.\n");
        return out;
    };
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Metric", "Value"]);
    table.add_row(vec!["Total files".to_string(), stats.count.to_string()]);
    table.add_row(vec![
        "Total size".to_string(),
        format!("{} KB", stats.total_size),
    ]);
    table.add_row(vec![
        "Average size".to_string(),
        format!("{} KB", stats.average_size),
    ]);
    table.add_row(vec![
        "Largest file".to_string(),
        format!("{} ({} KB)", stats.largest.full_name(), stats.largest.size_kb),
    ]);
    table.add_row(vec![
        "Smallest file".to_string(),
        format!(
            "{} ({} KB)",
            stats.smallest.full_name(),
            stats.smallest.size_kb
        ),
    ]);
    out.push_str(&format!("{}\n", table));
    out
}

/// Format a delete outcome.
pub fn format_delete_text(data: &DeleteOutput) -> String {
    match &data.record {
        Some(record) => format!(
            "[-] Deleted: {} ({} remaining)\n",
            record.full_name(),
            data.remaining
        ),
        None => format!("[ERROR] File not found: {}\n", data.name),
    }
}

/// Confirmation line printed when a record is added.
pub fn format_added_text(record: &FileRecord) -> String {
    format!("[+] File added: {}\n", record.full_name())
}
