use serde::{Deserialize, Deserializer, Serialize};

wardrobe_enum! {
    /// Garment category of a wardrobe item
    pub enum Category {
        Top => "top",
        Pants => "pants",
        Jacket => "jacket",
        Dress => "dress",
        Shoes => "shoes",
        Accessory => "accessory",
    }
}

wardrobe_enum! {
    /// Primary colour from the wardrobe palette
    pub enum Color {
        Black => "black",
        White => "white",
        Blue => "blue",
        Red => "red",
        Green => "green",
        Yellow => "yellow",
        Pink => "pink",
        Beige => "beige",
        Gray => "gray" | "grey",
        Brown => "brown",
    }
}

wardrobe_enum! {
    /// How the wearer wants to feel
    pub enum Mood {
        Casual => "casual",
        Confident => "confident",
        Elegant => "elegant",
        Energetic => "energetic",
        Relaxed => "relaxed",
        Minimal => "minimal",
    }
}

wardrobe_enum! {
    /// Where the outfit will be worn
    pub enum Occasion {
        Daily => "daily",
        Office => "office" | "college",
        Party => "party",
        Formal => "formal",
        Date => "date",
    }
}

wardrobe_enum! {
    /// Weather the outfit is chosen for
    pub enum Weather {
        Hot => "hot",
        Warm => "warm",
        Cool => "cool",
        Cold => "cold",
        Rainy => "rainy",
        Moderate => "moderate",
    }
}

impl Weather {
    /// Whether this weather calls for an outer layer
    #[inline]
    pub fn needs_layer(&self) -> bool {
        matches!(self, Weather::Cold | Weather::Cool | Weather::Rainy)
    }
}

/// A single garment owned by a user
///
/// Items are supplied by the storage layer and never mutated by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WardrobeItem {
    pub id: String,
    pub name: String,
    pub category: Category,
    #[serde(default, deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Opaque image reference (storage URL or encoded payload)
    #[serde(alias = "imageUrl", default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl WardrobeItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: Category) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            color: None,
            image: None,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

/// Storage clients send `""` for an unset colour
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<Color>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw {
        Some(value) if !value.trim().is_empty() => {
            value.parse().map(Some).map_err(serde::de::Error::custom)
        }
        _ => Ok(None),
    }
}

/// Situational input for one recommendation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestContext {
    pub mood: Mood,
    pub occasion: Occasion,
    pub weather: Weather,
    #[serde(rename = "seedCategory", default)]
    pub seed_category: Option<Category>,
    #[serde(rename = "seedItem", default)]
    pub seed_item: Option<WardrobeItem>,
}

impl RequestContext {
    pub fn new(mood: Mood, occasion: Occasion, weather: Weather) -> Self {
        Self {
            mood,
            occasion,
            weather,
            seed_category: None,
            seed_item: None,
        }
    }

    pub fn with_seed_category(mut self, category: Category) -> Self {
        self.seed_category = Some(category);
        self
    }

    pub fn with_seed_item(mut self, item: WardrobeItem) -> Self {
        self.seed_item = Some(item);
        self
    }
}

/// Display names of the outfit slots
pub const TOP_SLOT: &str = "Top";
pub const BOTTOM_SLOT: &str = "Bottom";
pub const LAYER_SLOT: &str = "Layer/Jacket";

/// What a slot contributes to the outfit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotRole {
    /// Counterpart to the seed garment
    Complement,
    /// Core piece of a generated outfit
    Base,
    /// Weather-driven outer layer
    Layer,
}

/// One slot the engine has to fill for a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotRequirement {
    pub name: &'static str,
    pub category: Category,
    pub role: SlotRole,
    pub optional: bool,
}

/// Fixed confidence assigned to a filled slot, per role
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringPolicy {
    pub complement: f64,
    pub layer: f64,
}

impl ScoringPolicy {
    /// Score constant for a slot role
    pub fn score_for(&self, role: SlotRole) -> f64 {
        match role {
            SlotRole::Complement | SlotRole::Base => self.complement,
            SlotRole::Layer => self.layer,
        }
    }
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            complement: 0.95,
            layer: 0.88,
        }
    }
}
