//! Item-related state types.
//!
//! This module contains foundational item types:
//! - ItemHandle: Catalog identity of an item template
//! - ItemKind: Weapon, armor or potion
//! - Item: Template values, copied into the inventory on purchase

/// Reference to an item template in the catalog (lookup via [`ItemOracle`]).
///
/// [`ItemOracle`]: crate::env::ItemOracle
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ItemHandle(pub u32);

impl core::fmt::Display for ItemHandle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Item category. Decides what [`Item::effect`] means.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ItemKind {
    /// `effect` is damage dealt per strike.
    Weapon,
    /// `effect` is damage absorbed per enemy hit.
    Armor,
    /// `effect` is health restored when drunk.
    Potion,
}

/// Item template.
///
/// Templates live in the catalog; the inventory owns independent copies.
/// `kind` is fixed at creation, there is no setter.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub handle: ItemHandle,
    pub name: String,
    kind: ItemKind,
    /// Price in gold.
    pub cost: u32,
    /// Damage, protection or healing depending on `kind`.
    pub effect: u32,
    pub description: String,
}

impl Item {
    pub fn new(
        handle: ItemHandle,
        name: impl Into<String>,
        kind: ItemKind,
        cost: u32,
        effect: u32,
        description: impl Into<String>,
    ) -> Self {
        Self {
            handle,
            name: name.into(),
            kind,
            cost,
            effect,
            description: description.into(),
        }
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    pub fn is(&self, kind: ItemKind) -> bool {
        self.kind == kind
    }
}
