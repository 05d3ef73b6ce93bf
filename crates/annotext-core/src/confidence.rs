use crate::ast::Confidence;

/// Parses a `Confidence Level: <level> [(<percentage>%)]` annotation line.
/// The generator wraps the label in bold markers, sometimes with the colon
/// inside the markers, so `**` is ignored wherever it appears on the line.
/// Returns `None` when the line is not an annotation line at all.
pub(crate) fn parse_confidence_line(line: &str) -> Option<Confidence> {
    let plain = line.trim().replace("**", "");
    let rest = plain.trim().strip_prefix("Confidence Level:")?.trim();
    if rest.is_empty() {
        return None;
    }

    if let Some(open) = rest.rfind('(')
        && let Some(inner) = rest[open..].strip_prefix('(').and_then(|t| t.strip_suffix(')'))
        && let Some(pct) = inner.trim().strip_suffix('%')
    {
        let level = rest[..open].trim();
        if !level.is_empty() {
            return Some(Confidence {
                level: level.to_string(),
                percentage: Some(pct.trim().to_string()),
            });
        }
    }

    Some(Confidence {
        level: rest.to_string(),
        percentage: None,
    })
}
