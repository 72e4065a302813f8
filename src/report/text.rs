//! Shared formatting for the plain-text reports

use crate::io::error::{Result, WithPath};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Width of the `=` banner framing a report title
pub const BANNER_WIDTH: usize = 60;
/// Width of the `-` rule inside report sections
pub const RULE_WIDTH: usize = 40;

/// A line of `width` copies of `ch`
pub fn rule(ch: char, width: usize) -> String {
    std::iter::repeat_n(ch, width).collect()
}

/// Integer with `,` between every group of three digits
pub fn group_thousands(value: usize) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Title framed by `=` banners, as opened by every text report
pub fn banner(title: &str) -> Vec<String> {
    vec![
        rule('=', BANNER_WIDTH),
        title.to_string(),
        rule('=', BANNER_WIDTH),
    ]
}

/// Write `lines` joined by newlines to `path`, creating parent directories
///
/// # Errors
///
/// Returns an error if the directory or file cannot be created or written
pub fn write_lines(path: &Path, lines: &[String]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
    }

    let file = File::create(path).with_path(path, "create file")?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(lines.join("\n").as_bytes())
        .with_path(path, "write report")?;
    writer.flush().with_path(path, "flush report")?;
    Ok(())
}
