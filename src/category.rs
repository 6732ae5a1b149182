// src/category.rs
// Prompt categories and their fixed system instructions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Topic domain steering the system instruction sent upstream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Category {
    #[default]
    Coding,
    Art,
    Business,
    Research,
    Fun,
}

/// Category -> system instruction. Looked up by `Category::system_prompt`.
const SYSTEM_PROMPTS: [(Category, &str); 5] = [
    (
        Category::Coding,
        "You are an expert coding prompt engineer. Generate detailed, structured prompts for coding tasks that include: clear objectives, specific requirements, tech stack details, code structure guidelines, and expected output format. Make prompts comprehensive yet clear.",
    ),
    (
        Category::Art,
        "You are an expert art and design prompt engineer. Generate creative, descriptive prompts for art and design that include: visual style, mood/atmosphere, color palette, composition details, artistic techniques, and reference styles. Make prompts vivid and inspiring.",
    ),
    (
        Category::Business,
        "You are an expert business strategy prompt engineer. Generate strategic, actionable prompts for business ideas that include: market analysis requirements, target audience, unique value proposition, business model considerations, and key success metrics. Make prompts practical and insightful.",
    ),
    (
        Category::Research,
        "You are an expert research and science prompt engineer. Generate thorough, methodical prompts for research tasks that include: research questions, methodology approach, data requirements, analysis framework, and expected outcomes. Make prompts rigorous and comprehensive.",
    ),
    (
        Category::Fun,
        "You are an expert creative prompt engineer. Generate engaging, imaginative prompts for fun and creative tasks that include: theme, creative constraints, storytelling elements, interactive aspects, and unique twists. Make prompts entertaining and inspiring.",
    ),
];

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Coding,
        Category::Art,
        Category::Business,
        Category::Research,
        Category::Fun,
    ];

    /// Parse a category name; anything unrecognised is `Coding`
    pub fn parse_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "coding" => Self::Coding,
            "art" => Self::Art,
            "business" => Self::Business,
            "research" => Self::Research,
            "fun" => Self::Fun,
            _ => Self::Coding,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Coding => "coding",
            Self::Art => "art",
            Self::Business => "business",
            Self::Research => "research",
            Self::Fun => "fun",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Coding => "💻",
            Self::Art => "🎨",
            Self::Business => "💼",
            Self::Research => "🔬",
            Self::Fun => "🎮",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Coding => "Coding",
            Self::Art => "Art & Design",
            Self::Business => "Business Idea",
            Self::Research => "Research & Science",
            Self::Fun => "Fun & Creative",
        }
    }

    pub fn system_prompt(&self) -> &'static str {
        SYSTEM_PROMPTS
            .iter()
            .find(|(category, _)| category == self)
            .map(|(_, prompt)| *prompt)
            .unwrap_or(SYSTEM_PROMPTS[0].1)
    }
}

impl From<&str> for Category {
    fn from(s: &str) -> Self {
        Self::parse_or_default(s)
    }
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        Self::parse_or_default(&s)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
