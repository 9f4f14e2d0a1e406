// ABOUTME: Nutrition facts for catalog meals with unit-bearing amounts parsed at load time
// ABOUTME: NutrientAmount, NutritionFacts, and the running NutritionTotals used by carts and orders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrayMate Contributors

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::warn;

/// A numeric nutrient value with its unit, e.g. `380mg` or `3.2g`
///
/// Catalog data stores these as strings. They are parsed once when the catalog is
/// deserialized; a malformed value becomes zero and a warning is logged, so scoring
/// code never sees a parse failure.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NutrientAmount {
    /// Numeric magnitude
    pub value: f64,
    /// Unit suffix in lowercase (`mg`, `g`, or empty for plain numbers)
    pub unit: String,
}

impl NutrientAmount {
    /// Create an amount from a value and unit
    #[must_use]
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }

    /// Parse a value like `"380mg"`, `"0.2g"`, `"1,200mg"` or `"  12 g "`
    ///
    /// Commas in the number are thousands separators. Returns `None` when no
    /// leading number can be read.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        let split_at = trimmed
            .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == ','))
            .unwrap_or(trimmed.len());
        let (number, unit) = trimmed.split_at(split_at);
        let digits: String = number.chars().filter(|&c| c != ',').collect();
        let value = digits.parse::<f64>().ok()?;
        Some(Self::new(value, unit.trim().to_lowercase()))
    }

    /// Parse leniently: malformed input yields zero and no unit
    #[must_use]
    pub fn parse_or_zero(raw: &str) -> Self {
        Self::parse(raw).unwrap_or_else(|| {
            warn!(raw = %raw, "Malformed nutrient value, treating as zero");
            Self::default()
        })
    }
}

impl Display for NutrientAmount {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for NutrientAmount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawAmount::deserialize(deserializer)? {
            RawAmount::Number(value) => Self::new(value, ""),
            RawAmount::Text(text) => Self::parse_or_zero(&text),
        })
    }
}

impl Serialize for NutrientAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.unit.is_empty() {
            serializer.serialize_f64(self.value)
        } else {
            serializer.collect_str(self)
        }
    }
}

/// Per-serving nutrition facts for a meal
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionFacts {
    /// Energy in kilocalories
    pub calories: NutrientAmount,
    /// Total fat
    #[serde(default)]
    pub total_fat: NutrientAmount,
    /// Saturated fat
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saturated_fat: Option<NutrientAmount>,
    /// Trans fat
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trans_fat: Option<NutrientAmount>,
    /// Cholesterol
    #[serde(default)]
    pub cholesterol: NutrientAmount,
    /// Total carbohydrate
    #[serde(default)]
    pub carbohydrate: NutrientAmount,
    /// Dietary fiber
    #[serde(default)]
    pub fiber: NutrientAmount,
    /// Sugar
    #[serde(default)]
    pub sugar: NutrientAmount,
    /// Sodium
    #[serde(default)]
    pub sodium: NutrientAmount,
    /// Protein
    #[serde(default)]
    pub protein: NutrientAmount,
}

/// Summed calories, sodium and protein across several servings
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NutritionTotals {
    /// Kilocalories
    pub calories: f64,
    /// Sodium in milligrams
    pub sodium_mg: f64,
    /// Protein in grams
    pub protein_g: f64,
}

impl NutritionTotals {
    /// Add `quantity` servings of the given facts
    pub fn add_servings(&mut self, facts: &NutritionFacts, quantity: u32) {
        let servings = f64::from(quantity);
        self.calories += facts.calories.value * servings;
        self.sodium_mg += facts.sodium.value * servings;
        self.protein_g += facts.protein.value * servings;
    }
}
