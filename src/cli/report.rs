//! Report formatting and printing utilities.
//!
//! Separate from the library so `tagutil` can be used without any terminal
//! output. Every printer has a `_to` variant taking a writer for tests.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::scan::TagSite;
use crate::tag::{Tag, quote};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Column gap between aligned fields.
const GAP: usize = 2;

/// Print one line per key: the key, its quoted main value and its options.
pub fn print_tag(tag: &Tag) {
    print_tag_to(tag, &mut io::stdout().lock());
}

pub fn print_tag_to<W: Write>(tag: &Tag, writer: &mut W) {
    let key_width = tag.keys().map(UnicodeWidthStr::width).max().unwrap_or(0);

    for (key, values) in tag.iter() {
        let main = values.first().map_or("", String::as_str);
        let options = values.get(1..).unwrap_or_default();
        let padding = pad(key, key_width);

        if options.is_empty() {
            let _ = writeln!(writer, "{}{}{}", key.bold().cyan(), padding, quote(main));
        } else {
            let _ = writeln!(
                writer,
                "{}{}{} {}",
                key.bold().cyan(),
                padding,
                quote(main),
                options.join(", ").yellow()
            );
        }
    }
}

/// Print a warning when an annotation yielded no pairs.
pub fn print_empty_warning(raw: &str) {
    print_empty_warning_to(raw, &mut io::stderr().lock());
}

pub fn print_empty_warning_to<W: Write>(raw: &str, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} no key:\"value\" pairs found in {}",
        "warning:".bold().yellow(),
        quote(raw)
    );
}

/// Print scan results as aligned `file:line  field  annotation` rows.
pub fn print_sites(sites: &[TagSite]) {
    print_sites_to(sites, &mut io::stdout().lock());
}

pub fn print_sites_to<W: Write>(sites: &[TagSite], writer: &mut W) {
    let locations: Vec<String> = sites
        .iter()
        .map(|site| format!("{}:{}", site.file.display(), site.line))
        .collect();
    let location_width = locations.iter().map(|l| l.width()).max().unwrap_or(0);
    let field_width = sites.iter().map(|s| s.field.width()).max().unwrap_or(0);

    for (site, location) in sites.iter().zip(&locations) {
        let _ = writeln!(
            writer,
            "{}{}{}{}{}",
            location.blue(),
            pad(location, location_width),
            site.field.bold(),
            pad(&site.field, field_width),
            site.raw
        );
    }
}

/// Print the scan summary line.
pub fn print_scan_summary(files: usize, sites: usize) {
    print_scan_summary_to(files, sites, &mut io::stdout().lock());
}

pub fn print_scan_summary_to<W: Write>(files: usize, sites: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Scanned {} {} - found {} {}",
            files,
            plural(files, "file", "files"),
            sites,
            plural(sites, "annotation", "annotations")
        )
        .green()
    );
}

/// Print a warning about files that could not be read.
pub fn print_skipped_warning(count: usize, verbose: bool) {
    print_skipped_warning_to(count, verbose, &mut io::stderr().lock());
}

pub fn print_skipped_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be read (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}

fn pad(text: &str, width: usize) -> String {
    " ".repeat(width.saturating_sub(text.width()) + GAP)
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
