//! Railway line color tokens.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

/// Token for railways that match no palette entry.
pub const NEUTRAL_COLOR: &str = "bg-slate-500";

/// Opaque style token for a railway line, e.g. a CSS class.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ColorToken(Cow<'static, str>);

impl ColorToken {
    /// Token from a static string.
    pub const fn from_static(token: &'static str) -> Self {
        Self(Cow::Borrowed(token))
    }

    pub fn new(token: impl Into<String>) -> Self {
        Self(Cow::Owned(token.into()))
    }

    pub fn neutral() -> Self {
        Self::from_static(NEUTRAL_COLOR)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lookup from railway name to color token.
///
/// Must be total: names it does not know get a neutral default.
pub trait LineColors {
    fn color_for(&self, railway: &str) -> ColorToken;
}

impl<F> LineColors for F
where
    F: Fn(&str) -> ColorToken,
{
    fn color_for(&self, railway: &str) -> ColorToken {
        self(railway)
    }
}

/// One palette entry: every fragment must occur in the railway name.
#[derive(Debug, Clone)]
struct PaletteRule {
    fragments: &'static [&'static str],
    token: &'static str,
}

const fn rule(fragments: &'static [&'static str], token: &'static str) -> PaletteRule {
    PaletteRule { fragments, token }
}

/// Tokyo-area palette. First matching rule wins, so combined names
/// (e.g. 中央・総武) come before their parts.
const TOKYO_RULES: &[PaletteRule] = &[
    // JR lines
    rule(&["山手"], "bg-green-500"),
    rule(&["中央", "快速"], "bg-orange-500"),
    rule(&["中央", "総武"], "bg-yellow-500"),
    rule(&["京浜東北"], "bg-sky-500"),
    rule(&["埼京"], "bg-emerald-600"),
    rule(&["湘南新宿"], "bg-orange-600"),
    rule(&["総武快速"], "bg-blue-600"),
    rule(&["総武線快速"], "bg-blue-600"),
    rule(&["常磐"], "bg-cyan-500"),
    rule(&["東海道"], "bg-orange-400"),
    rule(&["横須賀"], "bg-blue-500"),
    rule(&["武蔵野"], "bg-orange-600"),
    rule(&["京葉"], "bg-red-500"),
    // Tokyo Metro
    rule(&["銀座"], "bg-orange-400"),
    rule(&["丸ノ内"], "bg-red-500"),
    rule(&["日比谷"], "bg-gray-400"),
    rule(&["東西"], "bg-sky-400"),
    rule(&["千代田"], "bg-green-600"),
    rule(&["有楽町"], "bg-yellow-600"),
    rule(&["半蔵門"], "bg-purple-500"),
    rule(&["南北"], "bg-emerald-400"),
    rule(&["副都心"], "bg-amber-700"),
    // Toei
    rule(&["浅草"], "bg-rose-400"),
    rule(&["三田"], "bg-blue-700"),
    rule(&["新宿"], "bg-lime-500"),
    rule(&["大江戸"], "bg-pink-600"),
];

/// Palette keyed by fragments of railway names.
///
/// Names are compared lower-cased, so Latin fragments match regardless of
/// case.
///
/// # Examples
///
/// ```
/// use route_viewer::timeline::{LineColors, RailwayPalette, NEUTRAL_COLOR};
///
/// let palette = RailwayPalette::tokyo();
/// assert_eq!(palette.color_for("JR山手線").as_str(), "bg-green-500");
/// assert_eq!(palette.color_for("JR中央線快速").as_str(), "bg-orange-500");
/// assert_eq!(palette.color_for("Unknown Line").as_str(), NEUTRAL_COLOR);
/// ```
#[derive(Debug, Clone)]
pub struct RailwayPalette {
    rules: Vec<PaletteRule>,
    fallback: &'static str,
}

impl RailwayPalette {
    /// The Tokyo-area JR, Metro and Toei palette.
    pub fn tokyo() -> Self {
        Self {
            rules: TOKYO_RULES.to_vec(),
            fallback: NEUTRAL_COLOR,
        }
    }

    /// A palette that colors every line with the neutral token.
    pub fn neutral() -> Self {
        Self {
            rules: Vec::new(),
            fallback: NEUTRAL_COLOR,
        }
    }

    /// Append a rule matching names that contain every fragment.
    pub fn with_rule(mut self, fragments: &'static [&'static str], token: &'static str) -> Self {
        self.rules.push(rule(fragments, token));
        self
    }
}

impl Default for RailwayPalette {
    fn default() -> Self {
        Self::tokyo()
    }
}

impl LineColors for RailwayPalette {
    fn color_for(&self, railway: &str) -> ColorToken {
        let name = railway.to_lowercase();
        let token = self
            .rules
            .iter()
            .find(|r| r.fragments.iter().all(|f| name.contains(&f.to_lowercase())))
            .map_or(self.fallback, |r| r.token);
        ColorToken::from_static(token)
    }
}
