//! Symbol to color mapping and per-color display and cost attributes

use crate::io::error::{Result, invalid_palette};
use crate::pattern::source::Pattern;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;

/// Identifier of a brick color, e.g. `"red"` or `"darkblue"`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorId(String);

impl ColorId {
    /// Wrap a color identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ColorId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl Borrow<str> for ColorId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

const fn default_multiplier() -> f64 {
    1.0
}

/// Display and cost attributes of one color
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorSpec {
    /// Display color as `#RRGGBB`
    pub hex: String,
    /// Localized display name
    pub name: String,
    /// Short label used in the assembly guide; first letter of `name` when absent
    #[serde(default)]
    pub abbr: Option<String>,
    /// Price factor applied on top of the base brick price
    #[serde(default = "default_multiplier")]
    pub cost_multiplier: f64,
}

impl ColorSpec {
    fn new(hex: &str, name: &str, abbr: &str, cost_multiplier: f64) -> Self {
        Self {
            hex: hex.to_string(),
            name: name.to_string(),
            abbr: Some(abbr.to_string()),
            cost_multiplier,
        }
    }
}

/// Palette as written in a configuration file, before validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteConfig {
    /// Color used for padding, unmapped symbols and excluded from cost
    pub background: String,
    /// Single-character symbol to color id
    pub symbols: BTreeMap<String, String>,
    /// Color id to its attributes
    pub colors: BTreeMap<String, ColorSpec>,
}

/// Validated symbol and color tables
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    background: ColorId,
    symbols: BTreeMap<char, ColorId>,
    colors: BTreeMap<ColorId, ColorSpec>,
}

// (id, hex, name, abbreviation, cost multiplier)
const BUILTIN_COLORS: [(&str, &str, &str, &str, f64); 12] = [
    ("white", "#F4F4F4", "White", "W", 1.0),
    ("black", "#1B2A34", "Black", "K", 1.0),
    ("red", "#C91A09", "Red", "R", 1.0),
    ("blue", "#0055BF", "Blue", "B", 1.0),
    ("yellow", "#FFD700", "Yellow", "Y", 1.0),
    ("green", "#237841", "Green", "G", 1.0),
    ("orange", "#FE8A18", "Orange", "O", 1.1),
    ("brown", "#582A12", "Brown", "N", 1.2),
    ("gray", "#9BA19D", "Gray", "A", 1.0),
    ("tan", "#E4CD9E", "Tan", "T", 1.3),
    ("darkblue", "#143044", "Dark Blue", "D", 1.1),
    ("lightgray", "#BDC6AD", "Light Gray", "L", 1.0),
];

const BUILTIN_SYMBOLS: [(char, &str); 9] = [
    ('0', "white"),
    ('r', "red"),
    ('b', "brown"),
    ('t', "tan"),
    ('w', "white"),
    ('m', "red"),
    ('g', "green"),
    ('y', "yellow"),
    ('u', "blue"),
];

impl Default for Palette {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Palette {
    /// Standard brick colors with the symbol table of the built-in design
    pub fn builtin() -> Self {
        let colors = BUILTIN_COLORS
            .iter()
            .map(|&(id, hex, name, abbr, multiplier)| {
                (ColorId::new(id), ColorSpec::new(hex, name, abbr, multiplier))
            })
            .collect();
        let symbols = BUILTIN_SYMBOLS
            .iter()
            .map(|&(symbol, id)| (symbol, ColorId::new(id)))
            .collect();

        Self {
            background: ColorId::new("white"),
            symbols,
            colors,
        }
    }

    /// Build a palette, checking that every referenced color is defined
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The background or a symbol target is missing from `colors`
    /// - A color's hex value is not `#RRGGBB`
    /// - A cost multiplier is negative or not finite
    pub fn new(
        background: ColorId,
        symbols: BTreeMap<char, ColorId>,
        colors: BTreeMap<ColorId, ColorSpec>,
    ) -> Result<Self> {
        if !colors.contains_key(&background) {
            return Err(invalid_palette(&format!(
                "background color '{background}' has no color entry"
            )));
        }
        for (symbol, id) in &symbols {
            if !colors.contains_key(id) {
                return Err(invalid_palette(&format!(
                    "symbol '{symbol}' maps to undefined color '{id}'"
                )));
            }
        }
        for (id, spec) in &colors {
            if parse_hex(&spec.hex).is_none() {
                return Err(invalid_palette(&format!(
                    "color '{id}' has invalid hex value '{}'",
                    spec.hex
                )));
            }
            if !spec.cost_multiplier.is_finite() || spec.cost_multiplier < 0.0 {
                return Err(invalid_palette(&format!(
                    "color '{id}' has invalid cost multiplier {}",
                    spec.cost_multiplier
                )));
            }
        }

        Ok(Self {
            background,
            symbols,
            colors,
        })
    }

    /// Validate a palette read from a configuration file
    ///
    /// # Errors
    ///
    /// Returns an error if a symbol key is not exactly one character, or if
    /// [`Palette::new`] rejects the tables
    pub fn from_config(config: &PaletteConfig) -> Result<Self> {
        let mut symbols = BTreeMap::new();
        for (key, id) in &config.symbols {
            let mut chars = key.chars();
            let (Some(symbol), None) = (chars.next(), chars.next()) else {
                return Err(invalid_palette(&format!(
                    "symbol key '{key}' must be a single character"
                )));
            };
            symbols.insert(symbol, ColorId::new(id.as_str()));
        }
        let colors = config
            .colors
            .iter()
            .map(|(id, spec)| (ColorId::new(id.as_str()), spec.clone()))
            .collect();

        Self::new(ColorId::new(config.background.as_str()), symbols, colors)
    }

    /// Replace display names, e.g. with localized labels
    ///
    /// # Errors
    ///
    /// Returns an error if a name is given for an undefined color
    pub fn with_names(mut self, names: &BTreeMap<String, String>) -> Result<Self> {
        for (id, name) in names {
            let Some(spec) = self.colors.get_mut(id.as_str()) else {
                return Err(invalid_palette(&format!(
                    "display name given for undefined color '{id}'"
                )));
            };
            spec.name.clone_from(name);
        }
        Ok(self)
    }

    /// Color used for padding and for unmapped symbols
    pub const fn background(&self) -> &ColorId {
        &self.background
    }

    /// Color mapped to `symbol`, if any
    pub fn lookup(&self, symbol: char) -> Option<&ColorId> {
        self.symbols.get(&symbol)
    }

    /// Color for `symbol`, falling back to the background color
    pub fn resolve(&self, symbol: char) -> &ColorId {
        self.lookup(symbol).unwrap_or(&self.background)
    }

    /// Attributes of a color
    pub fn spec(&self, id: &str) -> Option<&ColorSpec> {
        self.colors.get(id)
    }

    /// All defined colors in identifier order
    pub fn colors(&self) -> impl Iterator<Item = (&ColorId, &ColorSpec)> + '_ {
        self.colors.iter()
    }

    /// Display name of a color; the identifier itself when undefined
    pub fn name<'a>(&'a self, id: &'a str) -> &'a str {
        self.spec(id).map_or(id, |spec| spec.name.as_str())
    }

    /// Short label of a color: its abbreviation or the first letter of its name
    pub fn abbr(&self, id: &str) -> String {
        if let Some(abbr) = self.spec(id).and_then(|spec| spec.abbr.as_deref()) {
            return abbr.to_string();
        }
        self.name(id).chars().next().map(String::from).unwrap_or_default()
    }

    /// Display color as `#RRGGBB`
    pub fn hex(&self, id: &str) -> Option<&str> {
        self.spec(id).map(|spec| spec.hex.as_str())
    }

    /// Display color as RGB bytes
    pub fn rgb(&self, id: &str) -> Option<[u8; 3]> {
        self.hex(id).and_then(parse_hex)
    }

    /// Price factor of a color; 1.0 when undefined
    pub fn cost_multiplier(&self, id: &str) -> f64 {
        self.spec(id).map_or(1.0, |spec| spec.cost_multiplier)
    }

    /// Symbols in `pattern` with no mapping, with their occurrence counts
    pub fn unmapped_symbols(&self, pattern: &Pattern) -> BTreeMap<char, usize> {
        let mut unmapped = BTreeMap::new();
        for symbol in pattern.symbols() {
            if self.lookup(symbol).is_none() {
                *unmapped.entry(symbol).or_insert(0) += 1;
            }
        }
        unmapped
    }
}

/// Parse `#RRGGBB` (leading `#` optional) into RGB bytes
pub fn parse_hex(hex: &str) -> Option<[u8; 3]> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| {
        digits
            .get(range)
            .and_then(|pair| u8::from_str_radix(pair, 16).ok())
    };
    Some([channel(0..2)?, channel(2..4)?, channel(4..6)?])
}
