// ABOUTME: Translations for catalog data: meal names, descriptions, tags, periods and time ranges
// ABOUTME: Tables are built once; a missing entry falls back to the English source string
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrayMate Contributors

//! Catalog data is authored in English. Lookups return the source text unchanged
//! for English, for strings with no table entry, and for any text that differs
//! from the catalog by even one character.

use std::collections::HashMap;
use std::sync::OnceLock;

use traymate_core::models::{Meal, MealPeriod};

use super::Language;

/// Non-English renderings of one source string
#[derive(Debug, Clone, Copy)]
struct Translations {
    spanish: &'static str,
    french: &'static str,
    chinese: &'static str,
}

impl Translations {
    const fn get(&self, language: Language) -> Option<&'static str> {
        match language {
            Language::English => None,
            Language::Spanish => Some(self.spanish),
            Language::French => Some(self.french),
            Language::Chinese => Some(self.chinese),
        }
    }
}

type Entry = (&'static str, Translations);
type Table = HashMap<&'static str, Translations>;

/// Which catalog field a string comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKind {
    /// `Meal::name`
    MealName,
    /// `Meal::description`
    MealDescription,
    /// An entry of `Meal::tags`
    Tag,
    /// A meal period label
    Period,
    /// `Meal::time_range`
    TimeRange,
}

struct Tables {
    meal_names: Table,
    meal_descriptions: Table,
    tags: Table,
    periods: Table,
    time_ranges: Table,
}

impl Tables {
    const fn for_kind(&self, kind: TextKind) -> &Table {
        match kind {
            TextKind::MealName => &self.meal_names,
            TextKind::MealDescription => &self.meal_descriptions,
            TextKind::Tag => &self.tags,
            TextKind::Period => &self.periods,
            TextKind::TimeRange => &self.time_ranges,
        }
    }
}

static TABLES: OnceLock<Tables> = OnceLock::new();

fn tables() -> &'static Tables {
    TABLES.get_or_init(|| Tables {
        meal_names: MEAL_NAMES.iter().copied().collect(),
        meal_descriptions: MEAL_DESCRIPTIONS.iter().copied().collect(),
        tags: TAGS.iter().copied().collect(),
        periods: PERIODS.iter().copied().collect(),
        time_ranges: TIME_RANGES.iter().copied().collect(),
    })
}

/// Translate a catalog string, returning `source` when there is no entry
#[must_use]
pub fn translate<'a>(kind: TextKind, source: &'a str, language: Language) -> &'a str {
    tables()
        .for_kind(kind)
        .get(source)
        .and_then(|entry| entry.get(language))
        .unwrap_or(source)
}

/// Localized meal name
#[must_use]
pub fn meal_name(meal: &Meal, language: Language) -> &str {
    translate(TextKind::MealName, &meal.name, language)
}

/// Localized meal description
#[must_use]
pub fn meal_description(meal: &Meal, language: Language) -> &str {
    translate(TextKind::MealDescription, &meal.description, language)
}

/// Localized tag
#[must_use]
pub fn tag(tag: &str, language: Language) -> &str {
    translate(TextKind::Tag, tag, language)
}

/// Localized meal period label
#[must_use]
pub fn period(period: MealPeriod, language: Language) -> &'static str {
    translate(TextKind::Period, period.label(), language)
}

/// Localized serving window
#[must_use]
pub fn time_range(meal: &Meal, language: Language) -> &str {
    translate(TextKind::TimeRange, &meal.time_range, language)
}

const MEAL_NAMES: &[Entry] = &[
    (
        "Banana-Chocolate Pancakes",
        Translations {
            spanish: "Panqueques de Banana y Chocolate",
            french: "Pancakes Banane-Chocolat",
            chinese: "香蕉巧克力煎饼",
        },
    ),
    (
        "Broccoli-Cheddar Quiche",
        Translations {
            spanish: "Quiche de Brócoli y Cheddar",
            french: "Quiche Brocoli-Cheddar",
            chinese: "西兰花切达乳蛋饼",
        },
    ),
    (
        "Caesar Salad with Chicken",
        Translations {
            spanish: "Ensalada César con Pollo",
            french: "Salade César au Poulet",
            chinese: "鸡肉凯撒沙拉",
        },
    ),
    (
        "Citrus Butter Salmon",
        Translations {
            spanish: "Salmón con Mantequilla Cítrica",
            french: "Saumon au Beurre Agrumes",
            chinese: "柑橘黄油三文鱼",
        },
    ),
    (
        "Chicken Bruschetta",
        Translations {
            spanish: "Pollo Bruschetta",
            french: "Poulet Bruschetta",
            chinese: "意式番茄鸡肉",
        },
    ),
    (
        "Breakfast Banana Split",
        Translations {
            spanish: "Banana Split de Desayuno",
            french: "Banana Split du Petit-Déjeuner",
            chinese: "早餐香蕉船",
        },
    ),
    (
        "Herb Baked Chicken",
        Translations {
            spanish: "Pollo al Horno con Hierbas",
            french: "Poulet Rôti aux Herbes",
            chinese: "香草烤鸡",
        },
    ),
    (
        "Garden Vegetable Medley",
        Translations {
            spanish: "Mezcla de Verduras del Huerto",
            french: "Mélange de Légumes du Jardin",
            chinese: "田园蔬菜拼盘",
        },
    ),
    (
        "Strawberry Belgian Waffle",
        Translations {
            spanish: "Waffle Belga de Fresa",
            french: "Gaufre Belge aux Fraises",
            chinese: "草莓比利时华夫饼",
        },
    ),
    (
        "Spring Menu Special",
        Translations {
            spanish: "Especial de Primavera",
            french: "Spécial Menu de Printemps",
            chinese: "春季特别菜单",
        },
    ),
    (
        "Grilled Salmon Fillet",
        Translations {
            spanish: "Filete de Salmón a la Parrilla",
            french: "Filet de Saumon Grillé",
            chinese: "香烤三文鱼排",
        },
    ),
    (
        "Oatmeal Bowl",
        Translations {
            spanish: "Tazón de Avena",
            french: "Bol d'Avoine",
            chinese: "燕麦碗",
        },
    ),
];

const MEAL_DESCRIPTIONS: &[Entry] = &[
    (
        "Pancakes topped with fresh sliced bananas and chocolate chips, served with scrambled eggs and your choice of bacon or sausage.",
        Translations {
            spanish: "Panqueques con plátano fresco en rodajas y chispas de chocolate, servidos con huevos revueltos y tu elección de tocino o salchicha.",
            french: "Pancakes garnis de bananes fraîches et de pépites de chocolat, servis avec des oeufs brouillés et votre choix de bacon ou de saucisse.",
            chinese: "煎饼配新鲜香蕉片和巧克力豆，搭配炒蛋，可选培根或香肠。",
        },
    ),
    (
        "Diced broccoli with cheddar and parmesan cheese in a traditional quiche - served with fresh fruit.",
        Translations {
            spanish: "Brócoli en cubos con quesos cheddar y parmesano en una quiche tradicional, servido con fruta fresca.",
            french: "Brocoli en dés avec cheddar et parmesan dans une quiche traditionnelle, servi avec des fruits frais.",
            chinese: "传统乳蛋饼加入西兰花丁、切达和帕玛森芝士，配新鲜水果。",
        },
    ),
    (
        "Fresh romaine, caesar dressing, shaved parmesan, and herb croutons. Add chicken or salmon if desired.",
        Translations {
            spanish: "Lechuga romana fresca, aderezo César, parmesano laminado y crutones con hierbas. Se puede añadir pollo o salmón.",
            french: "Romaine fraîche, sauce César, parmesan en copeaux et croûtons aux herbes. Ajoutez du poulet ou du saumon si souhaité.",
            chinese: "新鲜罗马生菜配凯撒酱、刨片帕玛森芝士和香草面包丁，可加鸡肉或三文鱼。",
        },
    ),
    (
        "Fresh salmon with brown sugar-lemon seasoning - topped with compound butter and citrus salsa - served with mashed potatoes and seasonal vegetables.",
        Translations {
            spanish: "Salmón fresco con sazón de azúcar morena y limón, cubierto con mantequilla compuesta y salsa cítrica, servido con puré de papa y verduras de temporada.",
            french: "Saumon frais assaisonné sucre brun-citron, garni de beurre composé et de salsa aux agrumes, servi avec purée de pommes de terre et légumes de saison.",
            chinese: "新鲜三文鱼以红糖柠檬调味，配复合黄油和柑橘莎莎，佐土豆泥和时令蔬菜。",
        },
    ),
    (
        "A baked chicken breast topped with fresh tomatoes, garlic, and basil - served with herbed corn and a baked potato.",
        Translations {
            spanish: "Pechuga de pollo al horno con tomate fresco, ajo y albahaca, servida con maíz con hierbas y papa al horno.",
            french: "Blanc de poulet rôti garni de tomates fraîches, ail et basilic, servi avec maïs aux herbes et pomme de terre au four.",
            chinese: "烤鸡胸配新鲜番茄、蒜和罗勒，搭配香草玉米与烤土豆。",
        },
    ),
    (
        "Fresh sliced banana, with scoops of vanilla Greek yogurt, fresh berries, topped with granola and honey.",
        Translations {
            spanish: "Plátano fresco en rebanadas con yogurt griego de vainilla, frutos rojos frescos, granola y miel.",
            french: "Bananes fraîches tranchées avec yaourt grec vanille, baies fraîches, granola et miel.",
            chinese: "新鲜香蕉片配香草希腊酸奶、新鲜莓果、麦片和蜂蜜。",
        },
    ),
    (
        "Steamed White Rice, Seasonal Vegetables",
        Translations {
            spanish: "Arroz blanco al vapor y verduras de temporada",
            french: "Riz blanc vapeur et légumes de saison",
            chinese: "蒸白米饭，时令蔬菜",
        },
    ),
    (
        "Fresh Seasonal Vegetables",
        Translations {
            spanish: "Verduras frescas de temporada",
            french: "Légumes frais de saison",
            chinese: "新鲜时令蔬菜",
        },
    ),
    (
        "Fresh Berries, Light Syrup",
        Translations {
            spanish: "Frutos rojos frescos y jarabe ligero",
            french: "Baies fraîches et sirop léger",
            chinese: "新鲜莓果，轻糖浆",
        },
    ),
    (
        "Chef's Daily Creation",
        Translations {
            spanish: "Creación diaria del chef",
            french: "Création quotidienne du chef",
            chinese: "主厨每日创意",
        },
    ),
    (
        "Citrus Butter, Roasted Asparagus",
        Translations {
            spanish: "Mantequilla cítrica y espárragos asados",
            french: "Beurre aux agrumes et asperges rôties",
            chinese: "柑橘黄油，烤芦笋",
        },
    ),
    (
        "Fresh Berries, Honey, Almonds",
        Translations {
            spanish: "Frutos rojos frescos, miel y almendras",
            french: "Baies fraîches, miel et amandes",
            chinese: "新鲜莓果、蜂蜜和杏仁",
        },
    ),
];

const TAGS: &[Entry] = &[
    (
        "Vegetarian",
        Translations {
            spanish: "Vegetariano",
            french: "Végétarien",
            chinese: "素食",
        },
    ),
    (
        "Vegan",
        Translations {
            spanish: "Vegano",
            french: "Végétalien",
            chinese: "纯素",
        },
    ),
    (
        "High Protein",
        Translations {
            spanish: "Alto en Proteína",
            french: "Riche en Protéines",
            chinese: "高蛋白",
        },
    ),
    (
        "Low Carb",
        Translations {
            spanish: "Bajo en Carbohidratos",
            french: "Faible en Glucides",
            chinese: "低碳水",
        },
    ),
    (
        "Low Sodium",
        Translations {
            spanish: "Bajo en Sodio",
            french: "Faible en Sodium",
            chinese: "低钠",
        },
    ),
    (
        "Heart Healthy",
        Translations {
            spanish: "Saludable para el Corazón",
            french: "Bon pour le Coeur",
            chinese: "护心健康",
        },
    ),
    (
        "Omega-3",
        Translations {
            spanish: "Omega-3",
            french: "Oméga-3",
            chinese: "欧米伽-3",
        },
    ),
    (
        "Healthy Choice",
        Translations {
            spanish: "Opción Saludable",
            french: "Choix Santé",
            chinese: "健康之选",
        },
    ),
    (
        "Low Calorie",
        Translations {
            spanish: "Bajo en Calorías",
            french: "Faible en Calories",
            chinese: "低卡路里",
        },
    ),
    (
        "Chef Special",
        Translations {
            spanish: "Especial del Chef",
            french: "Spécial du Chef",
            chinese: "主厨特选",
        },
    ),
    (
        "Contains Dairy",
        Translations {
            spanish: "Contiene Lácteos",
            french: "Contient des Produits Laitiers",
            chinese: "含乳制品",
        },
    ),
    (
        "Contains Eggs",
        Translations {
            spanish: "Contiene Huevos",
            french: "Contient des Oeufs",
            chinese: "含鸡蛋",
        },
    ),
    (
        "High Fiber",
        Translations {
            spanish: "Alto en Fibra",
            french: "Riche en Fibres",
            chinese: "高纤维",
        },
    ),
];

const PERIODS: &[Entry] = &[
    (
        "Breakfast",
        Translations {
            spanish: "Desayuno",
            french: "Petit-déjeuner",
            chinese: "早餐",
        },
    ),
    (
        "Lunch",
        Translations {
            spanish: "Almuerzo",
            french: "Déjeuner",
            chinese: "午餐",
        },
    ),
    (
        "Dinner",
        Translations {
            spanish: "Cena",
            french: "Dîner",
            chinese: "晚餐",
        },
    ),
    (
        "All Day",
        Translations {
            spanish: "Todo el Día",
            french: "Toute la Journée",
            chinese: "全天",
        },
    ),
];

const TIME_RANGES: &[Entry] = &[
    (
        "7am - 9am",
        Translations {
            spanish: "7 a. m. - 9 a. m.",
            french: "7 h - 9 h",
            chinese: "上午7点 - 上午9点",
        },
    ),
    (
        "11am - 1pm",
        Translations {
            spanish: "11 a. m. - 1 p. m.",
            french: "11 h - 13 h",
            chinese: "上午11点 - 下午1点",
        },
    ),
    (
        "11am - 7pm",
        Translations {
            spanish: "11 a. m. - 7 p. m.",
            french: "11 h - 19 h",
            chinese: "上午11点 - 晚上7点",
        },
    ),
    (
        "5pm - 7pm",
        Translations {
            spanish: "5 p. m. - 7 p. m.",
            french: "17 h - 19 h",
            chinese: "下午5点 - 晚上7点",
        },
    ),
];
