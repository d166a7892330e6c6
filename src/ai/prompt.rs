//! Fixed summarization prompt.
//!
//! The template does not depend on the provider. The input text is appended
//! verbatim after the `TEXT:` marker, with no trimming or escaping.

use std::fmt::Write as _;

/// Marker line that precedes the user-supplied text.
pub const TEXT_MARKER: &str = "TEXT:";

const INSTRUCTIONS: &str = "Summarize the following Terms of Service or Privacy Policy for a non-technical user.\n\
Give a bullet-point summary, and also give a badge list if you detect:";

/// Conditions the model is asked to flag in its output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Badge {
    SellsData,
    AutoRenews,
    TracksBehavior,
    NoEasyCancellation,
    GdprCompliant,
    KeepsDataForever,
    SharesWithThirdParties,
}

impl Badge {
    pub const ALL: [Badge; 7] = [
        Badge::SellsData,
        Badge::AutoRenews,
        Badge::TracksBehavior,
        Badge::NoEasyCancellation,
        Badge::GdprCompliant,
        Badge::KeepsDataForever,
        Badge::SharesWithThirdParties,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Badge::SellsData => "Sells Data",
            Badge::AutoRenews => "Auto-renews",
            Badge::TracksBehavior => "Tracks user behavior",
            Badge::NoEasyCancellation => "No easy cancellation",
            Badge::GdprCompliant => "GDPR compliant",
            Badge::KeepsDataForever => "Keeps your data forever",
            Badge::SharesWithThirdParties => "Shares with third parties",
        }
    }

    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Badge::SellsData => "\u{1F4B0}",
            Badge::AutoRenews => "\u{1F504}",
            Badge::TracksBehavior => "\u{1F440}",
            Badge::NoEasyCancellation => "\u{1F6AB}",
            Badge::GdprCompliant => "\u{2705}",
            Badge::KeepsDataForever => "\u{1F5C4}",
            Badge::SharesWithThirdParties => "\u{1F91D}",
        }
    }
}

/// Builds the single user message sent to the provider.
#[must_use]
pub fn build_prompt(text: &str) -> String {
    let mut prompt = String::with_capacity(INSTRUCTIONS.len() + text.len() + 256);
    prompt.push_str(INSTRUCTIONS);
    prompt.push('\n');

    for badge in Badge::ALL {
        let _ = writeln!(prompt, "- {} {}", badge.glyph(), badge.label());
    }

    prompt.push('\n');
    prompt.push_str(TEXT_MARKER);
    prompt.push('\n');
    prompt.push_str(text);
    prompt
}
