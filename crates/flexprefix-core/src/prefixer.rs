// crates/flexprefix-core/src/prefixer.rs

use crate::{
    is_numeric, to_align_content_value, to_box_direction, to_box_ordinal, to_box_orient,
    to_box_value, FlexProperty, StyleMap, StyleValue,
};
use tracing::{debug, trace};

/// Add the legacy `-webkit-box` and `-ms-flexbox` equivalents of every
/// recognized flexbox declaration in `target`, and return it.
///
/// Keys are never removed. Unrecognized keys keep their values.
pub fn apply_prefixes(mut target: StyleMap) -> StyleMap {
    apply_prefixes_in_place(&mut target);
    target
}

/// Borrowing form of [`apply_prefixes`].
///
/// Only the keys present on entry are visited, in insertion order. When two
/// properties write the same prefixed key (`flex` and `flex-grow`, or
/// `flex-direction` and `flex-flow`), the one inserted later wins.
///
/// Applying this twice gives the same map as applying it once, with two
/// exceptions:
///
/// * `display: flex` and `display: inline-flex`: the second pass sees the
///   fallback sequence and leaves it as it is.
/// * an `order` that starts with an integer but is not a number, such as
///   `"3abc"`: the first pass derives ordinal group `4` from the value as
///   written and resets `order` to `"0"`, so the second pass derives `1`.
pub fn apply_prefixes_in_place(target: &mut StyleMap) {
    let keys: Vec<String> = target.keys().map(str::to_owned).collect();
    debug!("Prefixing style map with {} declarations", keys.len());

    for key in keys {
        let Some(property) = FlexProperty::from_name(&key) else {
            continue;
        };

        let value = match target.get(&key) {
            Some(StyleValue::Scalar(s)) => s.clone(),
            // Only display carries fallbacks, and they are already prefixed.
            Some(StyleValue::Sequence(_)) => {
                trace!("Skipping {}: value is already a fallback list", property);
                continue;
            }
            None => String::new(),
        };

        trace!("Prefixing {}: {:?}", property, value);
        prefix_property(target, property, value);
    }
}

fn prefix_property(target: &mut StyleMap, property: FlexProperty, value: String) {
    match property {
        FlexProperty::Display => {
            let display = match value.as_str() {
                "flex" => StyleValue::sequence(["-webkit-box", "-ms-flexbox", "flex"]),
                "inline-flex" => StyleValue::sequence([
                    "-webkit-inline-box",
                    "-ms-inline-flexbox",
                    "inline-flex",
                ]),
                _ => StyleValue::Scalar(value),
            };
            target.insert("display", display);
        }

        FlexProperty::Flex => {
            let grow = value.split(' ').next().unwrap_or_default().to_string();
            target.insert("-ms-flex", value);
            target.insert("-webkit-box-flex", grow);
        }

        FlexProperty::FlexDirection => {
            let orient = to_box_orient(&value);
            let direction = to_box_direction(&value);
            let value = if value.is_empty() { "row".to_string() } else { value };
            target.insert("-webkit-box-orient", orient);
            target.insert("-webkit-box-direction", direction);
            target.insert("-ms-flex-direction", value.as_str());
            target.insert("flex-direction", value);
        }

        FlexProperty::FlexWrap => {
            target.insert("-ms-flex-wrap", value);
        }

        FlexProperty::FlexGrow => {
            target.insert("-webkit-box-flex", value.as_str());
            target.insert("-ms-flex-positive", value);
        }

        FlexProperty::FlexShrink => {
            target.insert("-ms-flex-negative", value);
        }

        FlexProperty::FlexBasis => {
            target.insert("-ms-flex-preferred-size", value);
        }

        FlexProperty::FlexFlow => {
            target.insert("-ms-flex-flow", value.as_str());
            target.insert("-webkit-box-orient", to_box_orient(&value));
            target.insert("-webkit-box-direction", to_box_direction(&value));
        }

        FlexProperty::Order => {
            // The ordinal group is derived from the value as written, with its
            // own fallback, not from the defaulted order.
            let ordinal = to_box_ordinal(&value);
            let order = if is_numeric(&value) { value } else { "0".to_string() };
            target.insert("-ms-flex-order", order.as_str());
            target.insert("-webkit-box-ordinal-group", ordinal);
            target.insert("order", order);
        }

        FlexProperty::JustifyContent => {
            let pack = to_box_value(&value);
            target.insert("-ms-flex-pack", pack);
            target.insert("-webkit-box-pack", pack);
            target.insert("justify-content", value.as_str());
        }

        FlexProperty::AlignItems => {
            let align = to_box_value(&value);
            target.insert("-ms-flex-align", align);
            target.insert("-webkit-box-align", align);
            target.insert("align-items", value.as_str());
        }

        FlexProperty::AlignSelf => {
            target.insert("-webkit-align-self", value.as_str());
            target.insert("-ms-flex-item-align", to_box_value(&value));
            target.insert("align-self", value.as_str());
        }

        FlexProperty::AlignContent => {
            target.insert("-ms-flex-line-pack", to_align_content_value(&value));
            target.insert("align-content", value.as_str());
        }
    }
}
