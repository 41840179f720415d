//! Text rendering for the menu.

use crate::models::ContactRecord;

const NAME_HEADER: &str = "Contact Name";
const PHONE_HEADER: &str = "Contact Number";

/// The five numbered menu lines.
pub const MENU_LINES: [&str; 5] = [
    "1. View contacts",
    "2. Add a new contact",
    "3. Search for a contact by name",
    "4. Delete an existing contact",
    "5. Save and Exit",
];

/// Render contacts as a bordered two-column table, one row per record.
///
/// Column widths follow the longest entry, counted in characters.
pub fn render_table(records: &[ContactRecord]) -> String {
    let name_width = records
        .iter()
        .map(|r| r.name.as_str().chars().count())
        .chain(std::iter::once(NAME_HEADER.len()))
        .max()
        .unwrap_or(NAME_HEADER.len());
    let phone_width = records
        .iter()
        .map(|r| r.phone.as_str().len())
        .chain(std::iter::once(PHONE_HEADER.len()))
        .max()
        .unwrap_or(PHONE_HEADER.len());

    let border = format!(
        "+{}+{}+",
        "-".repeat(name_width + 2),
        "-".repeat(phone_width + 2)
    );

    let mut out = String::new();
    out.push_str(&border);
    out.push('\n');
    out.push_str(&format!(
        "| {:<nw$} | {:<pw$} |\n",
        NAME_HEADER,
        PHONE_HEADER,
        nw = name_width,
        pw = phone_width
    ));
    out.push_str(&border);
    out.push('\n');
    for record in records {
        out.push_str(&format!(
            "| {:<nw$} | {:<pw$} |\n",
            record.name.as_str(),
            record.phone.as_str(),
            nw = name_width,
            pw = phone_width
        ));
    }
    out.push_str(&border);
    out
}

/// Summary line printed after a search.
pub fn search_summary(count: usize, query: &str) -> String {
    match count {
        0 => format!("The contact {} does not exist.", query),
        1 => format!("1 entry matches the given search: {}", query),
        n => format!("{} entries match the given search: {}", n, query),
    }
}
