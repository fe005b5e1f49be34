//! Notes text normalization

/// Strip heredoc-style indentation from a block of notes.
///
/// Leading and trailing blank lines are dropped, the whitespace prefix shared
/// by every non-blank line is removed, trailing whitespace is trimmed and
/// whitespace-only lines become empty. Tabs and spaces only match themselves,
/// so lines indented differently keep their indentation. The result has no
/// trailing newline.
pub fn dedent(text: &str) -> String {
    let lines: Vec<&str> = text.lines().map(str::trim_end).collect();

    let first = lines.iter().position(|line| !line.is_empty());
    let last = lines.iter().rposition(|line| !line.is_empty());
    let (first, last) = match (first, last) {
        (Some(first), Some(last)) => (first, last),
        _ => return String::new(),
    };
    let lines = &lines[first..=last];

    let prefix = lines
        .iter()
        .filter(|line| !line.is_empty())
        .map(|line| indentation(line))
        .reduce(common_prefix)
        .unwrap_or("");

    lines
        .iter()
        .map(|&line| line.strip_prefix(prefix).unwrap_or(line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Leading spaces and tabs of a line
fn indentation(line: &str) -> &str {
    &line[..line.len() - line.trim_start_matches([' ', '\t']).len()]
}

fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let len = a
        .bytes()
        .zip(b.bytes())
        .take_while(|(x, y)| x == y)
        .count();
    &a[..len]
}
