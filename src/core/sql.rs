//! SQL text rendering. Column order is fixed and must not change.

use crate::domain::model::{CustomizationGroup, CustomizationOption, ItemCustomizations};

pub const DOCUMENT_HEADER: &str = "-- Generated Customizations";

/// Single-quoted SQL string literal. Embedded quotes are doubled.
pub fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

pub fn render_group(group: &CustomizationGroup) -> String {
    format!(
        "INSERT INTO customization_groups (group_id, item_id, name, type, is_required, sort_order) VALUES ({}, {}, {}, {}, {}, {});",
        quote(&group.group_id),
        quote(&group.item_id),
        quote(&group.name),
        quote(group.group_type.as_str()),
        u8::from(group.is_required),
        group.sort_order
    )
}

pub fn render_option(option: &CustomizationOption) -> String {
    format!(
        "INSERT INTO customization_options (option_id, group_id, name, additional_price, is_default, sort_order) VALUES ({}, {}, {}, {}, {}, {});",
        quote(&option.option_id),
        quote(&option.group_id),
        quote(&option.name),
        option.additional_price,
        u8::from(option.is_default),
        option.sort_order
    )
}

pub fn render_item(item: &ItemCustomizations) -> String {
    let mut lines = Vec::with_capacity(item.groups.len() + item.option_count());
    for group in &item.groups {
        lines.push(render_group(group));
        lines.extend(group.options.iter().map(render_option));
    }
    lines.join("\n")
}

/// Full script: header, then a blank line, a comment and the block for each item.
pub fn render_document(items: &[ItemCustomizations]) -> String {
    let mut out = String::from(DOCUMENT_HEADER);
    out.push('\n');
    for item in items {
        out.push_str("\n-- Customizations for ");
        out.push_str(&item.item_id);
        out.push('\n');
        out.push_str(&render_item(item));
        out.push('\n');
    }
    out
}
