use crate::core::sql;
use crate::domain::catalog;
use crate::domain::model::{
    CustomizationGroup, CustomizationOption, GroupKind, ItemCustomizations, MenuItem,
};

/// Builds every customization group for one item, in emission order.
///
/// A group whose catalog is empty for the item's category is skipped entirely;
/// in practice that is only the Add-ons group of an unknown category.
pub fn generate_customizations(item: &MenuItem) -> ItemCustomizations {
    let clean_id = item.clean_id();

    let groups = GroupKind::ALL
        .iter()
        .filter_map(|&kind| {
            let specs = catalog::options_for(kind, &item.category);
            if specs.is_empty() {
                return None;
            }

            let group_id = format!("CG_{}_{}", clean_id, kind.id_suffix());
            let options = specs
                .iter()
                .zip(1..)
                .map(|(spec, sort_order)| CustomizationOption {
                    option_id: format!("CO_{}_{}_{}", clean_id, kind.id_suffix(), spec.code),
                    group_id: group_id.clone(),
                    name: spec.name.to_string(),
                    additional_price: spec.price,
                    is_default: spec.is_default,
                    sort_order,
                })
                .collect();

            Some(CustomizationGroup {
                group_id,
                item_id: item.id.clone(),
                kind,
                name: kind.display_name().to_string(),
                group_type: kind.group_type(),
                is_required: kind.is_required(),
                sort_order: kind.sort_order(),
                options,
            })
        })
        .collect();

    ItemCustomizations {
        item_id: item.id.clone(),
        category: item.category.clone(),
        groups,
    }
}

/// SQL block for a single item: group row, then its option rows, one statement per line.
pub fn generate_sql(item_id: &str, category: &str) -> String {
    let item = MenuItem::new(item_id, category);
    sql::render_item(&generate_customizations(&item))
}
