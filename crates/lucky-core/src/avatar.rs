//! The fixed avatar roster.
//!
//! Five avatars deliver the game's messages, each with a name and a
//! pastel border color. Lookup is by index 1..=5; anything outside
//! that range falls back to the last entry.

use serde::{Deserialize, Serialize};

/// An RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Create a color from channel values.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Identifies one of the five avatars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AvatarId {
    /// Avatar 1, pink border.
    Ben,
    /// Avatar 2, yellow border.
    Jen,
    /// Avatar 3, orange border.
    Katy,
    /// Avatar 4, green border.
    Rana,
    /// Avatar 5, blue border.
    Tanya,
}

/// One entry of the avatar roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Avatar {
    /// Which avatar this is.
    pub id: AvatarId,
    /// Display name.
    pub name: &'static str,
    /// Border color used when framing the avatar.
    pub border_color: Rgb,
}

/// The roster, in index order 1..=5.
const AVATARS: [Avatar; 5] = [
    Avatar {
        id: AvatarId::Ben,
        name: "Ben",
        border_color: Rgb::new(0xff, 0xb3, 0xba),
    },
    Avatar {
        id: AvatarId::Jen,
        name: "Jen",
        border_color: Rgb::new(0xff, 0xff, 0xba),
    },
    Avatar {
        id: AvatarId::Katy,
        name: "Katy",
        border_color: Rgb::new(0xff, 0xdf, 0xba),
    },
    Avatar {
        id: AvatarId::Rana,
        name: "Rana",
        border_color: Rgb::new(0xba, 0xff, 0xc9),
    },
    Avatar {
        id: AvatarId::Tanya,
        name: "Tanya",
        border_color: Rgb::new(0xba, 0xe1, 0xff),
    },
];

/// Look up an avatar by index (1..=5).
///
/// Out-of-range indices fall back to the last entry; the lookup is
/// total by construction.
pub fn avatar_for(index: u8) -> Avatar {
    let slot = usize::from(index)
        .checked_sub(1)
        .unwrap_or(AVATARS.len() - 1);
    AVATARS
        .get(slot)
        .copied()
        .unwrap_or(AVATARS[AVATARS.len() - 1])
}
