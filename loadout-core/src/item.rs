use crate::error::{Field, LoadoutError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::{fmt, sync::OnceLock};

pub const DEFAULT_SCALING_CONSTANT: f64 = 0.5;

const MASS_UNIT_MARKER: &str = "lb";
const HALF_GLYPH: char = '\u{00BD}';
// "½" decoded as latin-1 shows up as "Â½" in some scraped pages.
const HALF_GLYPH_MOJIBAKE: &str = "\u{00C2}\u{00BD}";

/// Scale factor to base units for each currency letter, lowest denomination first.
const CURRENCY_UNITS: [(char, u64); 5] = [('c', 1), ('s', 10), ('e', 50), ('g', 100), ('p', 1000)];

fn cost_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d+) ([csegp])p?").expect("cost regex is valid"))
}

fn fraction_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d+)/(\d+)").expect("fraction regex is valid"))
}

/// One row of the source table, before any parsing.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    pub name: String,
    pub cost: String,
    pub weight: String,
}

impl RawEntry {
    pub fn new(name: impl Into<String>, cost: impl Into<String>, weight: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cost: cost.into(),
            weight: weight.into(),
        }
    }
}

/// Parses a weight field in pounds. Fields without a `lb` marker weigh nothing.
pub fn parse_weight(input: &str) -> Result<f64> {
    if !input.contains(MASS_UNIT_MARKER) {
        return Ok(0.0);
    }

    let normalized = normalize_half_glyph(input);
    let start = normalized
        .find(|c: char| c.is_ascii_digit())
        .ok_or_else(|| LoadoutError::parse(Field::Weight, input, "no number before unit"))?;
    let token = normalized[start..]
        .split_whitespace()
        .next()
        .ok_or_else(|| LoadoutError::parse(Field::Weight, input, "no number before unit"))?;

    let weight = match fraction_regex().captures(token) {
        Some(caps) => {
            let numerator: u64 = caps[1]
                .parse()
                .map_err(|_| LoadoutError::parse(Field::Weight, input, "numerator out of range"))?;
            let denominator: u64 = caps[2].parse().map_err(|_| {
                LoadoutError::parse(Field::Weight, input, "denominator out of range")
            })?;
            if denominator == 0 {
                return Err(LoadoutError::parse(Field::Weight, input, "zero denominator"));
            }
            numerator as f64 / denominator as f64
        }
        None => token
            .parse::<f64>()
            .map_err(|e| LoadoutError::parse(Field::Weight, input, e.to_string()))?,
    };

    if !weight.is_finite() {
        return Err(LoadoutError::parse(Field::Weight, input, "not finite"));
    }
    Ok(weight)
}

fn normalize_half_glyph(input: &str) -> String {
    let input = input.replace(HALF_GLYPH_MOJIBAKE, &HALF_GLYPH.to_string());
    let mut out = String::with_capacity(input.len() + 2);
    for c in input.chars() {
        if c == HALF_GLYPH {
            if out.ends_with(|p: char| p.is_ascii_digit()) {
                out.push_str(".5");
            } else {
                out.push_str("0.5");
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Parses a cost field such as `"1,000 gp"` into base units (copper).
pub fn parse_cost(input: &str) -> Result<u64> {
    let stripped = input.replace(',', "");
    let caps = cost_regex()
        .captures(&stripped)
        .ok_or_else(|| LoadoutError::parse(Field::Cost, input, "expected \"<integer> <unit>\""))?;

    let quantity: u64 = caps[1]
        .parse()
        .map_err(|_| LoadoutError::parse(Field::Cost, input, "quantity out of range"))?;
    let unit = caps[2].chars().next().unwrap_or_default();
    let multiplier = CURRENCY_UNITS
        .iter()
        .find(|(letter, _)| *letter == unit)
        .map(|(_, multiplier)| *multiplier)
        .ok_or_else(|| LoadoutError::parse(Field::Cost, input, "unknown currency unit"))?;

    quantity
        .checked_mul(multiplier)
        .ok_or_else(|| LoadoutError::parse(Field::Cost, input, "cost out of range"))
}

/// A catalog entry with numeric cost (base units) and weight (lb).
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Item {
    name: String,
    cost: u64,
    weight: f64,
    value_density: f64,
}

impl Item {
    pub fn new(name: &str, raw_cost: &str, raw_weight: &str, scaling_constant: f64) -> Result<Self> {
        let cost = parse_cost(raw_cost)?;
        let weight = parse_weight(raw_weight)?;
        Self::from_parts(name, cost, weight, scaling_constant)
    }

    pub fn from_entry(entry: &RawEntry, scaling_constant: f64) -> Result<Self> {
        Self::new(&entry.name, &entry.cost, &entry.weight, scaling_constant)
    }

    pub fn from_parts(name: &str, cost: u64, weight: f64, scaling_constant: f64) -> Result<Self> {
        if !(scaling_constant.is_finite() && scaling_constant > 0.0) {
            return Err(LoadoutError::InvalidConfig(format!(
                "scaling constant must be positive and finite, got {}",
                scaling_constant
            )));
        }
        if !(weight.is_finite() && weight >= 0.0) {
            return Err(LoadoutError::parse(
                Field::Weight,
                &weight.to_string(),
                "weight must be non-negative and finite",
            ));
        }
        Ok(Self {
            name: name.to_string(),
            cost,
            weight,
            value_density: cost as f64 / (weight + scaling_constant),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cost(&self) -> u64 {
        self.cost
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn value_density(&self) -> f64 {
        self.value_density
    }

    pub fn to_record(&self) -> ItemRecord {
        ItemRecord {
            name: self.name.clone(),
            cost: self.cost,
            weight: self.weight,
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name:\t{}\n\nCost:\t{}cp\n\nWeight:\t{}lbs.\n\nRatio:\t{:.4}\n",
            self.name, self.cost, self.weight, self.value_density
        )
    }
}

/// Already-parsed item fields, as cached on disk.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ItemRecord {
    pub name: String,
    pub cost: u64,
    pub weight: f64,
}

impl ItemRecord {
    pub fn into_item(self, scaling_constant: f64) -> Result<Item> {
        Item::from_parts(&self.name, self.cost, self.weight, scaling_constant)
    }
}
