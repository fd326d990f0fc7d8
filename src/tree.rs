// Leaf-name extraction from a `tree`-style listing
//
// The backend prints a header line followed by one line per entry, drawn with
// box characters and optionally colourised:
//
//   Profile/work
//   ├── api_key
//   ├── nested
//   │   └── token
//   └── db_pass

use once_cell::sync::Lazy;
use regex::Regex;

static ANSI_ESCAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\x1b\[[0-9;]*[A-Za-z]").unwrap());

const BRANCH_MARKERS: [char; 2] = ['├', '└'];

fn is_decoration(c: char) -> bool {
    c.is_whitespace() || matches!(c, '├' | '└' | '│' | '─')
}

struct ListingLine<'a> {
    name: &'a str,
    nested: bool,
}

impl<'a> ListingLine<'a> {
    fn parse(line: &'a str) -> Option<Self> {
        let name = line.trim_matches(is_decoration);
        if name.is_empty() {
            return None;
        }
        // Anything drawn before the branch marker means we are inside a sub-namespace
        let nested = line
            .find(&BRANCH_MARKERS[..])
            .is_some_and(|pos| pos > 0);
        Some(Self { name, nested })
    }
}

/// Returns the names of the top-level leaf entries of `listing`.
///
/// The first line is the header and is dropped when more entries follow, or
/// when it is the only line and equals `header`. Sub-namespaces (a line ending
/// in `/`, or one followed by indented lines) and everything under them are
/// skipped. Names still containing `/` are reduced to their last segment.
pub fn leaf_names(listing: &str, header: &str) -> Vec<String> {
    let cleaned = ANSI_ESCAPE.replace_all(listing, "");
    let mut lines: Vec<&str> = cleaned.trim().lines().collect();
    // A lone header is an empty namespace, which must resolve to an empty profile
    if lines.len() > 1 || lines.first().is_some_and(|l| l.trim() == header) {
        lines.remove(0);
    }

    let parsed: Vec<ListingLine<'_>> = lines.iter().filter_map(|l| ListingLine::parse(l)).collect();

    let mut names = Vec::new();
    for (idx, line) in parsed.iter().enumerate() {
        if line.nested || line.name.ends_with('/') {
            continue;
        }
        if parsed.get(idx + 1).is_some_and(|next| next.nested) {
            continue;
        }
        let name = line.name.rsplit('/').next().unwrap_or(line.name).trim();
        if !name.is_empty() {
            names.push(name.to_string());
        }
    }
    names
}
