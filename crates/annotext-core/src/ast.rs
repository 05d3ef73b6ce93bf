#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub confidence: Option<Confidence>,
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn empty() -> Self {
        Self {
            confidence: None,
            blocks: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.confidence.is_none() && self.blocks.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Block {
    Paragraph {
        html: String,
    },
    ListItem {
        html: String,
        ordered: bool,
        // The numeral as written in the source; items are never renumbered.
        index: Option<u64>,
    },
}

impl Block {
    pub fn html(&self) -> &str {
        match self {
            Block::Paragraph { html } => html,
            Block::ListItem { html, .. } => html,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Confidence {
    pub level: String,
    pub percentage: Option<String>,
}

impl Confidence {
    /// Badge emphasis bucket derived from the level text. The upstream
    /// generator writes High / Medium / Low; anything else is Unknown and
    /// still renders, with neutral styling.
    pub fn rank(&self) -> ConfidenceRank {
        let level = self.level.trim();
        if level.eq_ignore_ascii_case("high") {
            ConfidenceRank::High
        } else if level.eq_ignore_ascii_case("medium") {
            ConfidenceRank::Medium
        } else if level.eq_ignore_ascii_case("low") {
            ConfidenceRank::Low
        } else {
            ConfidenceRank::Unknown
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfidenceRank {
    High,
    Medium,
    Low,
    Unknown,
}

impl ConfidenceRank {
    pub fn as_str(self) -> &'static str {
        match self {
            ConfidenceRank::High => "high",
            ConfidenceRank::Medium => "medium",
            ConfidenceRank::Low => "low",
            ConfidenceRank::Unknown => "unknown",
        }
    }
}
