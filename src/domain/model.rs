use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Menu category, decides which add-on catalog an item gets.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    GrilledSub,
    SajWrap,
    LoadedFries,
    RiceBowl,
    /// Any code outside the known set. Kept so permissive runs can still generate the item.
    Unknown(String),
}

impl Category {
    pub fn code(&self) -> &str {
        match self {
            Category::GrilledSub => "GS",
            Category::SajWrap => "SW",
            Category::LoadedFries => "LF",
            Category::RiceBowl => "RB",
            Category::Unknown(code) => code,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Category::Unknown(_))
    }
}

impl FromStr for Category {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "GS" => Category::GrilledSub,
            "SW" => Category::SajWrap,
            "LF" => Category::LoadedFries,
            "RB" => Category::RiceBowl,
            other => Category::Unknown(other.to_string()),
        })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl From<&str> for Category {
    fn from(code: &str) -> Self {
        match code.parse() {
            Ok(category) => category,
            Err(never) => match never {},
        }
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

/// The five group kinds, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GroupKind {
    Spice,
    Remove,
    Addon,
    Extra,
    Drink,
}

impl GroupKind {
    pub const ALL: [GroupKind; 5] = [
        GroupKind::Spice,
        GroupKind::Remove,
        GroupKind::Addon,
        GroupKind::Extra,
        GroupKind::Drink,
    ];

    /// Suffix used in generated group and option ids.
    pub fn id_suffix(self) -> &'static str {
        match self {
            GroupKind::Spice => "SPICE",
            GroupKind::Remove => "REMOVE",
            GroupKind::Addon => "ADDON",
            GroupKind::Extra => "EXTRA",
            GroupKind::Drink => "DRINK",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            GroupKind::Spice => "Spice Level",
            GroupKind::Remove => "Remove Items",
            GroupKind::Addon => "Add-ons",
            GroupKind::Extra => "Extras",
            GroupKind::Drink => "Add a Drink",
        }
    }

    pub fn group_type(self) -> GroupType {
        match self {
            GroupKind::Spice | GroupKind::Drink => GroupType::Single,
            GroupKind::Remove | GroupKind::Addon | GroupKind::Extra => GroupType::Multiple,
        }
    }

    pub fn is_required(self) -> bool {
        matches!(self, GroupKind::Spice)
    }

    // Fixed per kind: Extras stay 4 even when no Add-ons group is emitted.
    pub fn sort_order(self) -> u32 {
        match self {
            GroupKind::Spice => 1,
            GroupKind::Remove => 2,
            GroupKind::Addon => 3,
            GroupKind::Extra => 4,
            GroupKind::Drink => 5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupType {
    Single,
    Multiple,
}

impl GroupType {
    pub fn as_str(self) -> &'static str {
        match self {
            GroupType::Single => "single",
            GroupType::Multiple => "multiple",
        }
    }
}

/// Non-negative price delta held in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Price(u32);

impl Price {
    pub const ZERO: Price = Price(0);

    pub const fn from_cents(cents: u32) -> Self {
        Price(cents)
    }

    pub fn cents(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One catalog row. The sort order is its position in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionSpec {
    pub code: &'static str,
    pub name: &'static str,
    pub price: Price,
    pub is_default: bool,
}

impl OptionSpec {
    pub const fn new(code: &'static str, name: &'static str, cents: u32) -> Self {
        Self {
            code,
            name,
            price: Price::from_cents(cents),
            is_default: false,
        }
    }

    pub const fn default_selected(self) -> Self {
        Self {
            is_default: true,
            ..self
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    #[serde(deserialize_with = "deserialize_category")]
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

fn deserialize_category<'de, D>(deserializer: D) -> Result<Category, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let code = String::deserialize(deserializer)?;
    Ok(Category::from(code.as_str()))
}

impl MenuItem {
    pub fn new(id: impl Into<String>, category: impl Into<Category>) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Item id with every `ITEM_` removed; only used to build generated ids.
    pub fn clean_id(&self) -> String {
        self.id.replace("ITEM_", "")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomizationOption {
    pub option_id: String,
    pub group_id: String,
    pub name: String,
    pub additional_price: Price,
    pub is_default: bool,
    pub sort_order: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomizationGroup {
    pub group_id: String,
    pub item_id: String,
    pub kind: GroupKind,
    pub name: String,
    #[serde(rename = "type")]
    pub group_type: GroupType,
    pub is_required: bool,
    pub sort_order: u32,
    pub options: Vec<CustomizationOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemCustomizations {
    pub item_id: String,
    pub category: Category,
    pub groups: Vec<CustomizationGroup>,
}

impl ItemCustomizations {
    pub fn group(&self, kind: GroupKind) -> Option<&CustomizationGroup> {
        self.groups.iter().find(|g| g.kind == kind)
    }

    pub fn option_count(&self) -> usize {
        self.groups.iter().map(|g| g.options.len()).sum()
    }
}

#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub items: Vec<ItemCustomizations>,
    pub sql_output: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_codes() {
        assert_eq!(Category::from("GS"), Category::GrilledSub);
        assert_eq!(Category::from("SW"), Category::SajWrap);
        assert_eq!(Category::from("LF"), Category::LoadedFries);
        assert_eq!(Category::from("RB"), Category::RiceBowl);
        assert_eq!(Category::from("rb"), Category::Unknown("rb".to_string()));
        assert_eq!(Category::from("XX").code(), "XX");
        assert!(!Category::from("").is_known());
    }

    #[test]
    fn test_price_always_has_two_decimals() {
        assert_eq!(Price::ZERO.to_string(), "0.00");
        assert_eq!(Price::from_cents(100).to_string(), "1.00");
        assert_eq!(Price::from_cents(399).to_string(), "3.99");
        assert_eq!(Price::from_cents(650).to_string(), "6.50");
        assert_eq!(Price::from_cents(5).to_string(), "0.05");
        assert_eq!(Price::from_cents(12345).to_string(), "123.45");
    }

    #[test]
    fn test_clean_id_strips_prefix() {
        assert_eq!(MenuItem::new("ITEM_MP_001", "RB").clean_id(), "MP_001");
        assert_eq!(MenuItem::new("MP_001", "RB").clean_id(), "MP_001");
    }

    #[test]
    fn test_group_kind_attributes() {
        let orders: Vec<u32> = GroupKind::ALL.iter().map(|k| k.sort_order()).collect();
        assert_eq!(orders, vec![1, 2, 3, 4, 5]);
        assert!(GroupKind::Spice.is_required());
        assert!(!GroupKind::Drink.is_required());
        assert_eq!(GroupKind::Drink.group_type(), GroupType::Single);
        assert_eq!(GroupKind::Extra.group_type().as_str(), "multiple");
    }

    #[test]
    fn test_menu_item_deserialize() {
        let item: MenuItem =
            serde_json::from_str(r#"{"id": "ITEM_LF_001", "category": "LF"}"#).unwrap();
        assert_eq!(item.category, Category::LoadedFries);
        assert_eq!(item.label, None);
    }
}
