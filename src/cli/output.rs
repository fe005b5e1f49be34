//! Output formatting utilities

use crate::domain::{Cheatsheet, Entry};

/// Format the outline of a cheatsheet: header, then categories and entries
pub fn format_outline(sheet: &Cheatsheet) -> String {
    let mut output = format!("{} ({})\n", sheet.title(), sheet.keyword());
    if !sheet.introduction().is_empty() {
        output.push_str(&format!("{}\n", sheet.introduction()));
    }

    for category in sheet.categories() {
        output.push_str(&format!("\n{}\n", category.id()));
        for entry in category.entries() {
            output.push_str(&format!("  - {}\n", entry.name()));
        }
    }

    output
}

/// Format the traversal as `category<TAB>entry` lines
pub fn format_entry_pairs(sheet: &Cheatsheet) -> String {
    sheet
        .entries()
        .map(|(category, entry)| format!("{}\t{}\n", category.id(), entry.name()))
        .collect()
}

/// Format one entry with its notes
pub fn format_entry(category: &str, entry: &Entry) -> String {
    let mut output = format!("# {} / {}\n", category, entry.name());
    if !entry.notes().is_empty() {
        output.push('\n');
        output.push_str(entry.notes());
        output.push('\n');
    }
    output
}

/// Format the list of built-in cheatsheets
pub fn format_builtin_list(sheets: &[Cheatsheet]) -> String {
    if sheets.is_empty() {
        return "No cheatsheets found".to_string();
    }

    let mut output = String::new();
    for sheet in sheets {
        output.push_str(&format!(
            "{:<12}{} ({} entries)\n",
            sheet.keyword(),
            sheet.title(),
            sheet.entry_count()
        ));
    }
    output
}

/// One-line summary printed after a successful validation
pub fn format_summary(sheet: &Cheatsheet) -> String {
    format!(
        "OK: {} ({} categories, {} entries)",
        sheet.title(),
        sheet.categories().len(),
        sheet.entry_count()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::builder::cheatsheet;

    fn sample() -> Cheatsheet {
        cheatsheet(|c| {
            c.title("Haddock Markup Cheatsheet")
                .keyword("haddock")
                .introduction("Haddock Markup Quick Reference");
            c.category(|cat| {
                cat.id("Lists");
                cat.entry(|e| {
                    e.name("Unordered Lists").notes("Use `*`.");
                });
                cat.entry(|e| {
                    e.name("Ordered Lists");
                });
            });
        })
        .unwrap()
    }

    #[test]
    fn test_format_outline() {
        let output = format_outline(&sample());
        assert_eq!(
            output,
            "Haddock Markup Cheatsheet (haddock)\n\
             Haddock Markup Quick Reference\n\
             \n\
             Lists\n  - Unordered Lists\n  - Ordered Lists\n"
        );
    }

    #[test]
    fn test_format_entry_pairs() {
        assert_eq!(
            format_entry_pairs(&sample()),
            "Lists\tUnordered Lists\nLists\tOrdered Lists\n"
        );
    }

    #[test]
    fn test_format_entry_with_notes() {
        let sheet = sample();
        let (category, entry) = sheet.find_entry("unordered lists").unwrap();
        assert_eq!(
            format_entry(category.id(), entry),
            "# Lists / Unordered Lists\n\nUse `*`.\n"
        );
    }

    #[test]
    fn test_format_entry_without_notes() {
        let sheet = sample();
        let (category, entry) = sheet.find_entry("Ordered Lists").unwrap();
        assert_eq!(format_entry(category.id(), entry), "# Lists / Ordered Lists\n");
    }

    #[test]
    fn test_format_empty_builtin_list() {
        assert_eq!(format_builtin_list(&[]), "No cheatsheets found");
    }

    #[test]
    fn test_format_builtin_list() {
        let output = format_builtin_list(&[sample()]);
        assert_eq!(
            output,
            "haddock     Haddock Markup Cheatsheet (2 entries)\n"
        );
    }

    #[test]
    fn test_format_summary() {
        assert_eq!(
            format_summary(&sample()),
            "OK: Haddock Markup Cheatsheet (1 categories, 2 entries)"
        );
    }
}
