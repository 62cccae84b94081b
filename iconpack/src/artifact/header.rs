//! Declaration file header micro-format.
//!
//! The first two lines of a generated declaration identify the generator and
//! the fingerprint of the icon set it was rendered from:
//!
//! ```text
//! // Automatically generated by iconpack (format v1)
//! // 3a7bd3e2360a3d29eea436fcfb7e44c735d117c42d1c1835420b6b9942dd4f1b
//! ```
//!
//! Line 1 carries a format version. A file whose first line does not match
//! the current marker exactly is treated as having no fingerprint, so a
//! change to the header layout forces regeneration instead of misreading
//! line 2. Line 2 is exactly `// ` followed by the 64-digit hex fingerprint.

use crate::fingerprint::Fingerprint;

/// Generator marker at the start of line 1.
pub const GENERATOR_MARKER: &str = "// Automatically generated by iconpack";

/// Current header format version.
pub const FORMAT_VERSION: u32 = 1;

const FINGERPRINT_LINE_PREFIX: &str = "// ";

/// The full line 1 for the current format version.
pub fn marker_line() -> String {
    format!("{} (format v{})", GENERATOR_MARKER, FORMAT_VERSION)
}

/// Render the two header lines, each terminated by a newline.
pub fn render_header(fingerprint: &Fingerprint) -> String {
    format!(
        "{}\n{}{}\n",
        marker_line(),
        FINGERPRINT_LINE_PREFIX,
        fingerprint
    )
}

/// Extract the fingerprint from a declaration file's contents.
///
/// Returns `None` for foreign files, older header formats and malformed
/// fingerprint lines.
pub fn parse_header(text: &str) -> Option<Fingerprint> {
    let mut lines = text.lines();

    if lines.next()?.trim_end() != marker_line() {
        return None;
    }

    let line = lines.next()?.trim_end();
    Fingerprint::parse(line.strip_prefix(FINGERPRINT_LINE_PREFIX)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::IconCollection;

    fn fingerprint() -> Fingerprint {
        Fingerprint::compute(&[IconCollection::new("mdi")])
    }

    #[test]
    fn test_header_round_trip() {
        let header = render_header(&fingerprint());
        assert_eq!(parse_header(&header), Some(fingerprint()));
    }

    #[test]
    fn test_fingerprint_on_second_line() {
        let header = render_header(&fingerprint());
        let lines: Vec<&str> = header.lines().collect();

        assert_eq!(lines[0], "// Automatically generated by iconpack (format v1)");
        assert_eq!(lines[1], format!("// {}", fingerprint()));
    }

    #[test]
    fn test_crlf_line_endings_accepted() {
        let header = render_header(&fingerprint()).replace('\n', "\r\n");
        assert_eq!(parse_header(&header), Some(fingerprint()));
    }

    #[test]
    fn test_older_format_is_ignored() {
        let text = format!(
            "// Automatically generated by iconpack\n// {}\n",
            fingerprint()
        );
        assert_eq!(parse_header(&text), None);
    }

    #[test]
    fn test_malformed_headers_are_ignored() {
        assert_eq!(parse_header(""), None);
        assert_eq!(parse_header(&marker_line()), None);
        assert_eq!(parse_header(&format!("{}\n//deadbeef\n", marker_line())), None);
        assert_eq!(parse_header("export type Icon = string;\n"), None);
    }
}
