//! # Static Lookup Tables
//!
//! Shared, process-wide lexicon for the meal parsing pipeline: the closed
//! unit vocabulary with its Thai/Latin alias table, the number-word table,
//! the food-alias table, and the filler-word list. All tables are declarative
//! static data compiled once into lookup maps; adding an alias is a data
//! change, not a logic change.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Canonical unit vocabulary. Closed set: aliases below may grow, the
/// vocabulary itself does not change at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    /// Thai egg classifier (ฟอง)
    Egg,
    Plate,
    Bowl,
    Cup,
    Tablespoon,
    Teaspoon,
    Gram,
    Kilogram,
    Milliliter,
    Liter,
    Bottle,
    Can,
    Sachet,
    Box,
    Scoop,
    Piece,
}

impl Unit {
    /// Canonical display token for serving labels and prompt hints, Thai-first
    /// since that is the script users of the tracking tool type in.
    pub fn label(&self) -> &'static str {
        match self {
            Unit::Egg => "ฟอง",
            Unit::Plate => "จาน",
            Unit::Bowl => "ชาม",
            Unit::Cup => "ถ้วย",
            Unit::Tablespoon => "ช้อนโต๊ะ",
            Unit::Teaspoon => "ช้อนชา",
            Unit::Gram => "กรัม",
            Unit::Kilogram => "กิโลกรัม",
            Unit::Milliliter => "มล.",
            Unit::Liter => "ลิตร",
            Unit::Bottle => "ขวด",
            Unit::Can => "กระป๋อง",
            Unit::Sachet => "ซอง",
            Unit::Box => "กล่อง",
            Unit::Scoop => "สกู๊ป",
            Unit::Piece => "ชิ้น",
        }
    }
}

/// Number words 0-10 with the informal Thai "one" (นึง). Matched as whole
/// tokens by the normalizer and as unit-adjacent prefixes by the extractor.
static NUMBER_WORDS: &[(&str, u8)] = &[
    ("ศูนย์", 0),
    ("หนึ่ง", 1),
    ("นึง", 1),
    ("สอง", 2),
    ("สาม", 3),
    ("สี่", 4),
    ("ห้า", 5),
    ("หก", 6),
    ("เจ็ด", 7),
    ("แปด", 8),
    ("เก้า", 9),
    ("สิบ", 10),
    ("zero", 0),
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
];

/// Unit alias table. Latin aliases are stored lowercase; lookups lowercase
/// the token first.
static UNIT_ALIASES: &[(&str, Unit)] = &[
    ("ฟอง", Unit::Egg),
    ("จาน", Unit::Plate),
    ("plate", Unit::Plate),
    ("plates", Unit::Plate),
    ("ชาม", Unit::Bowl),
    ("bowl", Unit::Bowl),
    ("bowls", Unit::Bowl),
    ("ถ้วย", Unit::Cup),
    ("แก้ว", Unit::Cup),
    ("cup", Unit::Cup),
    ("cups", Unit::Cup),
    ("ช้อนโต๊ะ", Unit::Tablespoon),
    ("tbsp", Unit::Tablespoon),
    ("tablespoon", Unit::Tablespoon),
    ("tablespoons", Unit::Tablespoon),
    ("ช้อนชา", Unit::Teaspoon),
    ("tsp", Unit::Teaspoon),
    ("teaspoon", Unit::Teaspoon),
    ("teaspoons", Unit::Teaspoon),
    ("กรัม", Unit::Gram),
    ("g", Unit::Gram),
    ("gram", Unit::Gram),
    ("grams", Unit::Gram),
    ("กิโลกรัม", Unit::Kilogram),
    ("กิโล", Unit::Kilogram),
    ("โล", Unit::Kilogram),
    ("kg", Unit::Kilogram),
    ("มิลลิลิตร", Unit::Milliliter),
    ("มล", Unit::Milliliter),
    ("ml", Unit::Milliliter),
    ("ลิตร", Unit::Liter),
    ("liter", Unit::Liter),
    ("litre", Unit::Liter),
    ("l", Unit::Liter),
    ("ขวด", Unit::Bottle),
    ("bottle", Unit::Bottle),
    ("bottles", Unit::Bottle),
    ("กระป๋อง", Unit::Can),
    ("can", Unit::Can),
    ("cans", Unit::Can),
    ("ซอง", Unit::Sachet),
    ("sachet", Unit::Sachet),
    ("sachets", Unit::Sachet),
    ("กล่อง", Unit::Box),
    ("box", Unit::Box),
    ("boxes", Unit::Box),
    ("สกู๊ป", Unit::Scoop),
    ("ช้อนตวง", Unit::Scoop),
    ("scoop", Unit::Scoop),
    ("scoops", Unit::Scoop),
    ("ชิ้น", Unit::Piece),
    ("ลูก", Unit::Piece),
    ("อัน", Unit::Piece),
    ("piece", Unit::Piece),
    ("pieces", Unit::Piece),
    ("pc", Unit::Piece),
    ("pcs", Unit::Piece),
];

/// Food spelling/phrasing variants mapped to one canonical dish name.
/// Egg preparations are deliberately distinct entries (fried vs boiled vs
/// omelette), never merged into a generic egg.
static FOOD_ALIASES: &[(&str, &str)] = &[
    // กะเพรา family: rice-plus-stir-fry composite, many spellings
    ("กะเพรา", "ข้าวกะเพรา"),
    ("กระเพรา", "ข้าวกะเพรา"),
    ("ผัดกะเพรา", "ข้าวกะเพรา"),
    ("ผัดกระเพรา", "ข้าวกะเพรา"),
    ("ข้าวกระเพรา", "ข้าวกะเพรา"),
    ("ข้าวผัดกะเพรา", "ข้าวกะเพรา"),
    ("ข้าวผัดกระเพรา", "ข้าวกะเพรา"),
    ("กะเพราไก่", "ข้าวกะเพรา"),
    ("กระเพราไก่", "ข้าวกะเพรา"),
    ("กะเพราหมู", "ข้าวกะเพรา"),
    ("กระเพราหมู", "ข้าวกะเพรา"),
    ("ผัดกะเพราไก่", "ข้าวกะเพรา"),
    ("ผัดกระเพราไก่", "ข้าวกะเพรา"),
    ("ผัดกะเพราหมู", "ข้าวกะเพรา"),
    ("ผัดกระเพราหมู", "ข้าวกะเพรา"),
    ("krapow", "ข้าวกะเพรา"),
    ("pad krapow", "ข้าวกะเพรา"),
    // whey protein servings
    ("เวย์", "เวย์โปรตีน"),
    ("เวย", "เวย์โปรตีน"),
    ("whey", "เวย์โปรตีน"),
    ("whey protein", "เวย์โปรตีน"),
    ("โปรตีนเชค", "เวย์โปรตีน"),
    ("protein shake", "เวย์โปรตีน"),
    // plain cooked rice
    ("ข้าว", "ข้าวสวย"),
    ("ข้าวเปล่า", "ข้าวสวย"),
    ("ข้าวขาว", "ข้าวสวย"),
    ("rice", "ข้าวสวย"),
    // egg preparations keep their preparation-specific names
    ("ไข่ทอด", "ไข่ดาว"),
    ("fried egg", "ไข่ดาว"),
    ("ไข่ตม", "ไข่ต้ม"),
    ("boiled egg", "ไข่ต้ม"),
    ("ออมเล็ต", "ไข่เจียว"),
    ("omelette", "ไข่เจียว"),
    ("omelet", "ไข่เจียว"),
];

/// Quantity-hedging and emphasis tokens stripped from names and surfaced as
/// item modifiers.
static FILLER_WORDS: &[&str] = &[
    "ประมาณ",
    "ราวๆ",
    "ราว",
    "สัก",
    "แค่",
    "เพิ่ม",
    "พิเศษ",
    "อีก",
    "หน่อย",
    "about",
    "approx",
    "approximately",
    "around",
    "roughly",
    "extra",
    "some",
];

lazy_static! {
    static ref NUMBER_WORD_MAP: HashMap<&'static str, u8> =
        NUMBER_WORDS.iter().copied().collect();
    static ref UNIT_ALIAS_MAP: HashMap<&'static str, Unit> =
        UNIT_ALIASES.iter().copied().collect();
    static ref FOOD_ALIAS_MAP: HashMap<&'static str, &'static str> =
        FOOD_ALIASES.iter().copied().collect();
    static ref FILLER_WORD_SET: HashSet<&'static str> =
        FILLER_WORDS.iter().copied().collect();
}

/// Resolve a unit alias token to its canonical unit, case-insensitively for
/// Latin aliases.
pub fn resolve_unit_alias(token: &str) -> Option<Unit> {
    let lowered = token.trim().to_lowercase();
    UNIT_ALIAS_MAP.get(lowered.as_str()).copied()
}

/// Resolve a number word (Thai or English) to its numeric value.
pub fn number_word_value(token: &str) -> Option<u8> {
    let lowered = token.trim().to_lowercase();
    NUMBER_WORD_MAP.get(lowered.as_str()).copied()
}

/// Map a cleaned food name to its canonical spelling, if a variant is known.
pub fn canonical_food_name(cleaned: &str) -> Option<&'static str> {
    let lowered = cleaned.trim().to_lowercase();
    FOOD_ALIAS_MAP.get(lowered.as_str()).copied()
}

/// Whether a token is a quantity-hedging filler word.
pub fn is_filler_word(token: &str) -> bool {
    FILLER_WORD_SET.contains(token.to_lowercase().as_str())
}

/// Build a regex alternation over the given words: longest first to avoid
/// partial matches, then alphabetical for a stable pattern, each escaped.
fn build_alternation(words: &[&str]) -> String {
    let unique: HashSet<&str> = words.iter().copied().collect();
    let mut sorted: Vec<&str> = unique.into_iter().collect();
    sorted.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
    let escaped: Vec<String> = sorted.into_iter().map(regex::escape).collect();
    escaped.join("|")
}

/// Alternation over every unit alias.
pub(crate) fn unit_alias_alternation() -> String {
    let words: Vec<&str> = UNIT_ALIASES.iter().map(|(alias, _)| *alias).collect();
    build_alternation(&words)
}

/// Alternation over every number word.
pub(crate) fn number_word_alternation() -> String {
    let words: Vec<&str> = NUMBER_WORDS.iter().map(|(word, _)| *word).collect();
    build_alternation(&words)
}

/// Alternation over the gram aliases only, for explicit-weight scanning.
pub(crate) fn gram_alias_alternation() -> String {
    let words: Vec<&str> = UNIT_ALIASES
        .iter()
        .filter(|(_, unit)| *unit == Unit::Gram)
        .map(|(alias, _)| *alias)
        .collect();
    build_alternation(&words)
}
