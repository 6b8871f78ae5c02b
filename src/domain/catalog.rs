//! Static option catalogs. Sort order is the position within each slice.

use crate::domain::model::{Category, GroupKind, OptionSpec};

pub const SPICE_OPTIONS: &[OptionSpec] = &[
    OptionSpec::new("MILD", "Mild", 0).default_selected(),
    OptionSpec::new("SPICY", "Spicy (harissa instead of hot honey)", 0),
];

pub const REMOVE_OPTIONS: &[OptionSpec] = &[
    OptionSpec::new("CHEESE", "No cheese", 0),
    OptionSpec::new("GARLIC", "No garlic", 0),
    OptionSpec::new("SALAD", "No salad (fries only)", 0),
    OptionSpec::new("HONEY", "No hot honey", 0),
];

/// Rice bowls come with fries on top, so they get one more remove option.
pub const RICE_BOWL_REMOVE_OPTIONS: &[OptionSpec] = &[
    OptionSpec::new("CHEESE", "No cheese", 0),
    OptionSpec::new("GARLIC", "No garlic", 0),
    OptionSpec::new("SALAD", "No salad (fries only)", 0),
    OptionSpec::new("HONEY", "No hot honey", 0),
    OptionSpec::new("FRIES", "No fries on top", 0),
];

pub const GRILLED_SUB_ADDONS: &[OptionSpec] = &[
    OptionSpec::new("CHICKEN", "Chicken topping on fries", 300),
    OptionSpec::new("BRISKET", "Brisket topping on fries", 400),
    OptionSpec::new("MIXED", "Mixed topping on fries", 500),
];

pub const SAJ_WRAP_ADDONS: &[OptionSpec] = &[
    OptionSpec::new("MOZZ", "Extra shredded mozzarella in wrap", 100),
    OptionSpec::new("CHICKEN", "Chicken topping on fries", 300),
    OptionSpec::new("BRISKET", "Brisket topping on fries", 400),
    OptionSpec::new("MIXED", "Mixed topping on fries", 500),
];

// Shared by loaded fries and rice bowls.
pub const LOADED_ADDONS: &[OptionSpec] = &[
    OptionSpec::new("CHICKEN", "Extra chicken", 399),
    OptionSpec::new("BRISKET", "Extra brisket", 499),
    OptionSpec::new("MIXED", "Extra mixed", 599),
];

pub const EXTRA_OPTIONS: &[OptionSpec] = &[
    OptionSpec::new("HALLOUMI", "Grilled Halloumi Sticks", 650),
    OptionSpec::new("POPPERS", "Cheesy Pizza Poppers", 650),
];

pub const DRINK_OPTIONS: &[OptionSpec] = &[
    OptionSpec::new("1", "Shani Can 330ml", 250),
    OptionSpec::new("2", "Rubicon Guava Can 330ml", 250),
    OptionSpec::new("3", "Rubicon Mango Can 330ml", 250),
    OptionSpec::new("4", "Rubicon Passion Fruit Can 330ml", 250),
    OptionSpec::new("5", "Palestine Cola Can 330ml", 250),
    OptionSpec::new("6", "Palestine Cola (Sugar Free) Can 330ml", 250),
    OptionSpec::new("7", "Palestine Lemon and Lime Can 330ml", 250),
    OptionSpec::new("8", "Palestine Orange Can 330ml", 250),
    OptionSpec::new("9", "Bottled Water 350ml", 250),
    OptionSpec::new("10", "Capri Sun 350ml", 200),
];

pub fn remove_options(category: &Category) -> &'static [OptionSpec] {
    match category {
        Category::RiceBowl => RICE_BOWL_REMOVE_OPTIONS,
        _ => REMOVE_OPTIONS,
    }
}

/// Empty for unknown categories, which means no Add-ons group.
pub fn addon_options(category: &Category) -> &'static [OptionSpec] {
    match category {
        Category::GrilledSub => GRILLED_SUB_ADDONS,
        Category::SajWrap => SAJ_WRAP_ADDONS,
        Category::LoadedFries | Category::RiceBowl => LOADED_ADDONS,
        Category::Unknown(_) => &[],
    }
}

pub fn options_for(kind: GroupKind, category: &Category) -> &'static [OptionSpec] {
    match kind {
        GroupKind::Spice => SPICE_OPTIONS,
        GroupKind::Remove => remove_options(category),
        GroupKind::Addon => addon_options(category),
        GroupKind::Extra => EXTRA_OPTIONS,
        GroupKind::Drink => DRINK_OPTIONS,
    }
}
