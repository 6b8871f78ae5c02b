use crate::domain::model::MenuItem;

/// (item id, category code, label) for the items generated when no items file is given.
const DEFAULT_MENU: &[(&str, &str, Option<&str>)] = &[
    // Most Popular
    ("ITEM_MP_001", "RB", Some("Mixed Rice Bowl")),
    ("ITEM_MP_002", "LF", Some("Mixed Loaded Fries")),
    ("ITEM_MP_003", "GS", Some("Chicken Grilled Sub")),
    ("ITEM_MP_004", "SW", Some("Brisket Saj Wrap")),
    // Saj Wraps
    ("ITEM_SW_001", "SW", None),
    ("ITEM_SW_002", "SW", None),
    ("ITEM_SW_003", "SW", None),
    // Loaded Fries
    ("ITEM_LF_001", "LF", None),
    ("ITEM_LF_002", "LF", None),
    ("ITEM_LF_003", "LF", None),
    // Rice Bowls
    ("ITEM_RB_001", "RB", None),
    ("ITEM_RB_002", "RB", None),
    ("ITEM_RB_003", "RB", None),
];

pub fn default_menu() -> Vec<MenuItem> {
    DEFAULT_MENU
        .iter()
        .map(|&(id, code, label)| {
            let item = MenuItem::new(id, code);
            match label {
                Some(label) => item.with_label(label),
                None => item,
            }
        })
        .collect()
}
