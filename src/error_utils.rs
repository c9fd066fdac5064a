//! Shared error utilities

use miette::NamedSource;
use std::path::Path;

/// File name used to label diagnostics (`tables/player_stats.hjson` -> `player_stats.hjson`)
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Create a NamedSource with proper formatting for error display
pub fn create_named_source(path: &Path, content: String) -> NamedSource<String> {
    NamedSource::new(path.display().to_string(), content)
}

/// Byte offset of a 1-based line/column position, clamped to the source length
pub fn line_col_to_offset(source: &str, line: usize, column: usize) -> usize {
    let target_line = line.saturating_sub(1);
    let mut line_start = source.len();
    let mut current_line = 0;

    if target_line == 0 {
        line_start = 0;
    } else {
        for (idx, ch) in source.char_indices() {
            if ch == '\n' {
                current_line += 1;
                if current_line == target_line {
                    line_start = idx + 1;
                    break;
                }
            }
        }
    }

    let column_offset: usize = source[line_start..]
        .chars()
        .take(column.saturating_sub(1))
        .take_while(|ch| *ch != '\n')
        .map(char::len_utf8)
        .sum();

    line_start + column_offset
}
