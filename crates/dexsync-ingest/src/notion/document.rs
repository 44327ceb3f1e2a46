//! Create-page request body
//!
//! Mirrors the subset of the Notion `POST /v1/pages` schema the sync writes:
//! a database parent, external icon and cover, the fixed property set of the
//! Pokédex database, and four body blocks.

use crate::model::{Pokemon, TypeTag};
use serde::Serialize;
use std::collections::BTreeMap;

// ============================================================================
// Database property names
// ============================================================================

pub const PROP_NAME: &str = "Name";
pub const PROP_CATEGORY: &str = "Category";
pub const PROP_NUMBER: &str = "No";
pub const PROP_TYPE: &str = "Type";
pub const PROP_GENERATION: &str = "Generation";
pub const PROP_SPRITE: &str = "Sprite";
pub const PROP_HEIGHT: &str = "Height";
pub const PROP_WEIGHT: &str = "Weight";
pub const PROP_HP: &str = "HP";
pub const PROP_ATTACK: &str = "Attack";
pub const PROP_DEFENSE: &str = "Defense";
pub const PROP_SP_ATTACK: &str = "Sp. Attack";
pub const PROP_SP_DEFENSE: &str = "Sp. Defense";
pub const PROP_SPEED: &str = "Speed";

/// Name given to the attached sprite file
pub const SPRITE_FILE_NAME: &str = "Pokemon Sprite";

/// Text of the paragraph that introduces the Bulbapedia bookmark
pub const BULBAPEDIA_PROMPT: &str = "View This Pokémon's Entry on Bulbapedia:";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Parent {
    DatabaseId { database_id: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExternalUrl {
    pub url: String,
}

/// Icon or cover hosted outside Notion
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ExternalMedia {
    External { external: ExternalUrl },
}

impl ExternalMedia {
    pub fn url(url: impl Into<String>) -> Self {
        Self::External {
            external: ExternalUrl { url: url.into() },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FileObject {
    External { name: String, external: ExternalUrl },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextContent {
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RichText {
    Text { text: TextContent },
}

impl RichText {
    pub fn plain(content: impl Into<String>) -> Self {
        Self::Text {
            text: TextContent {
                content: content.into(),
            },
        }
    }
}

/// A single property value, serialized as `{"<kind>": <payload>}`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyValue {
    Title(Vec<RichText>),
    RichText(Vec<RichText>),
    Number(u32),
    MultiSelect(Vec<TypeTag>),
    Select(Option<SelectOption>),
    Files(Vec<FileObject>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectOption {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextBlock {
    pub rich_text: Vec<RichText>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockContent {
    Quote { quote: TextBlock },
    Paragraph { paragraph: TextBlock },
    Bookmark { bookmark: ExternalUrl },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Block {
    object: &'static str,
    #[serde(flatten)]
    pub content: BlockContent,
}

impl Block {
    pub fn new(content: BlockContent) -> Self {
        Self {
            object: "block",
            content,
        }
    }

    pub fn quote(text: impl Into<String>) -> Self {
        Self::new(BlockContent::Quote {
            quote: TextBlock {
                rich_text: vec![RichText::plain(text)],
            },
        })
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::new(BlockContent::Paragraph {
            paragraph: TextBlock {
                rich_text: vec![RichText::plain(text)],
            },
        })
    }

    pub fn bookmark(url: impl Into<String>) -> Self {
        Self::new(BlockContent::Bookmark {
            bookmark: ExternalUrl { url: url.into() },
        })
    }
}

/// Body of `POST /v1/pages`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageRequest {
    pub parent: Parent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<ExternalMedia>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<ExternalMedia>,
    pub properties: BTreeMap<&'static str, PropertyValue>,
    pub children: Vec<Block>,
}

impl PageRequest {
    /// Build the page for one record.
    ///
    /// An un-enriched record still yields a complete document: the category
    /// is an empty rich text, the generation select is cleared and the quote
    /// is empty.
    pub fn for_pokemon(pokemon: &Pokemon, database_id: &str) -> Self {
        let mut properties = BTreeMap::new();

        properties.insert(
            PROP_NAME,
            PropertyValue::Title(vec![RichText::plain(pokemon.name.clone())]),
        );
        properties.insert(
            PROP_CATEGORY,
            PropertyValue::RichText(
                pokemon
                    .category()
                    .map(|category| vec![RichText::plain(category)])
                    .unwrap_or_default(),
            ),
        );
        properties.insert(PROP_NUMBER, PropertyValue::Number(pokemon.number));
        properties.insert(PROP_TYPE, PropertyValue::MultiSelect(pokemon.types.clone()));
        properties.insert(
            PROP_GENERATION,
            PropertyValue::Select(pokemon.generation().map(|name| SelectOption {
                name: name.to_string(),
            })),
        );
        properties.insert(
            PROP_SPRITE,
            PropertyValue::Files(
                pokemon
                    .sprite
                    .iter()
                    .map(|url| FileObject::External {
                        name: SPRITE_FILE_NAME.to_string(),
                        external: ExternalUrl { url: url.clone() },
                    })
                    .collect(),
            ),
        );

        let stats = &pokemon.stats;
        for (name, value) in [
            (PROP_HEIGHT, pokemon.height),
            (PROP_WEIGHT, pokemon.weight),
            (PROP_HP, stats.hp),
            (PROP_ATTACK, stats.attack),
            (PROP_DEFENSE, stats.defense),
            (PROP_SP_ATTACK, stats.special_attack),
            (PROP_SP_DEFENSE, stats.special_defense),
            (PROP_SPEED, stats.speed),
        ] {
            properties.insert(name, PropertyValue::Number(value));
        }

        let children = vec![
            Block::quote(pokemon.flavor_text().unwrap_or_default()),
            Block::paragraph(""),
            Block::paragraph(BULBAPEDIA_PROMPT),
            Block::bookmark(pokemon.bulbapedia_url.clone()),
        ];

        Self {
            parent: Parent::DatabaseId {
                database_id: database_id.to_string(),
            },
            icon: pokemon.sprite.as_deref().map(|url| ExternalMedia::url(url)),
            cover: pokemon.artwork.as_deref().map(|url| ExternalMedia::url(url)),
            properties,
            children,
        }
    }

    /// Plain text of the `Name` title, if present.
    pub fn title(&self) -> Option<&str> {
        match self.properties.get(PROP_NAME) {
            Some(PropertyValue::Title(parts)) => parts.first().map(|part| match part {
                RichText::Text { text } => text.content.as_str(),
            }),
            _ => None,
        }
    }
}
