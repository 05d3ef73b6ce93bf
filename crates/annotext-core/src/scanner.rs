use crate::ast::Confidence;
use crate::confidence::parse_confidence_line;

/// Classification of one source line, decided before any inline formatting
/// is resolved. Banner, rule, and trailer lines are generator chrome and
/// never reach the document model.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum LineTag<'a> {
    Blank,
    Banner,
    Rule,
    Trailer,
    Confidence(Confidence),
    Unordered { content: &'a str },
    Ordered { index: u64, content: &'a str },
    Prose { content: &'a str },
}

pub(crate) fn classify(line: &str) -> LineTag<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineTag::Blank;
    }
    if is_banner_line(trimmed) {
        return LineTag::Banner;
    }
    if trimmed.contains("Analysis method:") {
        return LineTag::Trailer;
    }
    // Covers both the bare horizontal rule and a rule with trailing text.
    if trimmed.starts_with("---") {
        return LineTag::Rule;
    }
    if let Some(confidence) = parse_confidence_line(trimmed) {
        return LineTag::Confidence(confidence);
    }
    if let Some(content) = unordered_item(trimmed) {
        return LineTag::Unordered { content };
    }
    if let Some((index, content)) = ordered_item(trimmed) {
        return LineTag::Ordered { index, content };
    }
    LineTag::Prose { content: trimmed }
}

fn is_banner_line(trimmed: &str) -> bool {
    let plain = trimmed.replace("**", "");
    let plain = plain.trim();
    plain.eq_ignore_ascii_case("AI Root Cause Analysis")
        || plain.eq_ignore_ascii_case("Root Cause Analysis")
}

fn unordered_item(trimmed: &str) -> Option<&str> {
    let bytes = trimmed.as_bytes();
    if bytes.len() < 3 || !matches!(bytes[0], b'-' | b'*' | b'+') || bytes[1] != b' ' {
        return None;
    }
    let content = trimmed[2..].trim();
    if content.is_empty() { None } else { Some(content) }
}

fn ordered_item(trimmed: &str) -> Option<(u64, &str)> {
    let bytes = trimmed.as_bytes();
    let mut idx = 0;
    while idx < bytes.len() && bytes[idx].is_ascii_digit() {
        idx += 1;
    }
    // Nine digits is already far beyond anything the generator numbers.
    if idx == 0 || idx > 9 {
        return None;
    }
    if bytes.get(idx) != Some(&b'.') || bytes.get(idx + 1) != Some(&b' ') {
        return None;
    }
    let content = trimmed[idx + 2..].trim();
    if content.is_empty() {
        return None;
    }
    let index = trimmed[..idx].parse().ok()?;
    Some((index, content))
}

#[cfg(test)]
mod tests {
    use super::{LineTag, classify};

    #[test]
    fn banner_lines_match_ignoring_bold_and_case() {
        assert_eq!(classify("**AI Root Cause Analysis**"), LineTag::Banner);
        assert_eq!(classify("root cause analysis"), LineTag::Banner);
        assert_eq!(classify("  Root Cause Analysis  "), LineTag::Banner);
        assert!(matches!(
            classify("Root Cause Analysis of the outage"),
            LineTag::Prose { .. }
        ));
    }

    #[test]
    fn trailer_and_rule_lines_are_dropped_kinds() {
        assert_eq!(classify("*Analysis method: Pattern-based*"), LineTag::Trailer);
        assert_eq!(classify("---"), LineTag::Rule);
        assert_eq!(classify("-----"), LineTag::Rule);
        assert_eq!(classify("--- anything after"), LineTag::Rule);
        assert!(matches!(classify("--"), LineTag::Prose { .. }));
    }

    #[test]
    fn list_lines_tag_with_their_kind() {
        assert_eq!(classify("- first"), LineTag::Unordered { content: "first" });
        assert_eq!(classify("* second"), LineTag::Unordered { content: "second" });
        assert_eq!(classify("+ third"), LineTag::Unordered { content: "third" });
        assert_eq!(
            classify("12. twelfth"),
            LineTag::Ordered { index: 12, content: "twelfth" }
        );
        assert!(matches!(classify("1.missing space"), LineTag::Prose { .. }));
        assert!(matches!(classify("-no space"), LineTag::Prose { .. }));
        assert!(matches!(classify("**bold**"), LineTag::Prose { .. }));
    }

    #[test]
    fn confidence_lines_carry_their_capture() {
        match classify("**Confidence Level:** High (82%)") {
            LineTag::Confidence(conf) => {
                assert_eq!(conf.level, "High");
                assert_eq!(conf.percentage.as_deref(), Some("82"));
            }
            other => panic!("unexpected tag: {:?}", other),
        }
    }
}
