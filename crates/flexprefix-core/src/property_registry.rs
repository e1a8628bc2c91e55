// crates/flexprefix-core/src/property_registry.rs

/// Standard flexbox properties that get legacy equivalents.
/// Any other property name is passed through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlexProperty {
    // Container
    Display,
    Flex,
    FlexDirection,
    FlexWrap,
    FlexFlow,

    // Item sizing
    FlexGrow,
    FlexShrink,
    FlexBasis,
    Order,

    // Alignment
    JustifyContent,
    AlignItems,
    AlignSelf,
    AlignContent,
}

impl FlexProperty {
    pub const ALL: [FlexProperty; 13] = [
        FlexProperty::Display,
        FlexProperty::Flex,
        FlexProperty::FlexDirection,
        FlexProperty::FlexWrap,
        FlexProperty::FlexFlow,
        FlexProperty::FlexGrow,
        FlexProperty::FlexShrink,
        FlexProperty::FlexBasis,
        FlexProperty::Order,
        FlexProperty::JustifyContent,
        FlexProperty::AlignItems,
        FlexProperty::AlignSelf,
        FlexProperty::AlignContent,
    ];

    /// Look up a property by its exact CSS name. Matching is case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        let property = match name {
            "display" => FlexProperty::Display,
            "flex" => FlexProperty::Flex,
            "flex-direction" => FlexProperty::FlexDirection,
            "flex-wrap" => FlexProperty::FlexWrap,
            "flex-flow" => FlexProperty::FlexFlow,
            "flex-grow" => FlexProperty::FlexGrow,
            "flex-shrink" => FlexProperty::FlexShrink,
            "flex-basis" => FlexProperty::FlexBasis,
            "order" => FlexProperty::Order,
            "justify-content" => FlexProperty::JustifyContent,
            "align-items" => FlexProperty::AlignItems,
            "align-self" => FlexProperty::AlignSelf,
            "align-content" => FlexProperty::AlignContent,
            _ => return None,
        };
        Some(property)
    }

    pub fn name(self) -> &'static str {
        match self {
            FlexProperty::Display => "display",
            FlexProperty::Flex => "flex",
            FlexProperty::FlexDirection => "flex-direction",
            FlexProperty::FlexWrap => "flex-wrap",
            FlexProperty::FlexFlow => "flex-flow",
            FlexProperty::FlexGrow => "flex-grow",
            FlexProperty::FlexShrink => "flex-shrink",
            FlexProperty::FlexBasis => "flex-basis",
            FlexProperty::Order => "order",
            FlexProperty::JustifyContent => "justify-content",
            FlexProperty::AlignItems => "align-items",
            FlexProperty::AlignSelf => "align-self",
            FlexProperty::AlignContent => "align-content",
        }
    }

    /// Vendor-prefixed keys written when this property is prefixed.
    pub fn prefixed_names(self) -> &'static [&'static str] {
        match self {
            FlexProperty::Display => &[],
            FlexProperty::Flex => &["-ms-flex", "-webkit-box-flex"],
            FlexProperty::FlexDirection => &[
                "-webkit-box-orient",
                "-webkit-box-direction",
                "-ms-flex-direction",
            ],
            FlexProperty::FlexWrap => &["-ms-flex-wrap"],
            FlexProperty::FlexFlow => &[
                "-ms-flex-flow",
                "-webkit-box-orient",
                "-webkit-box-direction",
            ],
            FlexProperty::FlexGrow => &["-webkit-box-flex", "-ms-flex-positive"],
            FlexProperty::FlexShrink => &["-ms-flex-negative"],
            FlexProperty::FlexBasis => &["-ms-flex-preferred-size"],
            FlexProperty::Order => &["-ms-flex-order", "-webkit-box-ordinal-group"],
            FlexProperty::JustifyContent => &["-ms-flex-pack", "-webkit-box-pack"],
            FlexProperty::AlignItems => &["-ms-flex-align", "-webkit-box-align"],
            FlexProperty::AlignSelf => &["-webkit-align-self", "-ms-flex-item-align"],
            FlexProperty::AlignContent => &["-ms-flex-line-pack"],
        }
    }
}

impl std::fmt::Display for FlexProperty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_lookup_round_trips() {
        for property in FlexProperty::ALL {
            assert_eq!(FlexProperty::from_name(property.name()), Some(property));
        }
    }

    #[test]
    fn test_unrecognized_names() {
        assert_eq!(FlexProperty::from_name("color"), None);
        assert_eq!(FlexProperty::from_name("Display"), None);
        assert_eq!(FlexProperty::from_name("-ms-flex"), None);
        assert_eq!(FlexProperty::from_name(""), None);
    }

    #[test]
    fn test_prefixed_names_are_vendor_prefixed() {
        for property in FlexProperty::ALL {
            for name in property.prefixed_names() {
                assert!(
                    name.starts_with("-webkit-") || name.starts_with("-ms-"),
                    "{} writes unprefixed key {}",
                    property,
                    name
                );
            }
        }
    }
}
