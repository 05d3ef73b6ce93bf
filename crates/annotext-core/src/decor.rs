/// Removes decorative pictographs from generator output before any
/// line-level matching runs. Covers the fixed set the generator is known to
/// emit (checkmarks, warning signs, rockets, robot and face emoji, colored
/// circles, charts, bells, wrenches, stars) plus the general emoji blocks,
/// so banner and annotation lines match on plain text.
pub(crate) fn strip_decorations(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if !is_decoration(ch) {
            out.push(ch);
        }
    }
    out
}

pub(crate) fn is_decoration(ch: char) -> bool {
    matches!(ch,
        // Joiners and modifiers that only occur inside emoji sequences.
        '\u{200D}'
        | '\u{20E3}'
        | '\u{FE00}'..='\u{FE0F}'
        // Watches, hourglasses, media controls.
        | '\u{231A}'..='\u{231B}'
        | '\u{23E9}'..='\u{23FA}'
        // Miscellaneous symbols and dingbats (warning sign, check marks).
        | '\u{2600}'..='\u{27BF}'
        // Miscellaneous symbols and arrows (star).
        | '\u{2B00}'..='\u{2BFF}'
        // Mahjong tiles through Symbols and Pictographs Extended-A: covers
        // emoticons, transport, colored circles, charts, supplemental
        // symbols, and the regional indicators.
        | '\u{1F000}'..='\u{1FAFF}')
}
