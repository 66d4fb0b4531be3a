//! Static mapping from Django field constructors to TypeScript types.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Type used when a constructor has no mapping.
pub const FALLBACK_TYPE: &str = "any";

/// Django field constructor → TypeScript type. Fixed at build time; extend
/// here when a project relies on additional field types.
static FIELD_TYPE_MAP: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("CharField", "string"),
        ("TextField", "string"),
        ("SlugField", "string"),
        ("EmailField", "string"),
        ("URLField", "string"),
        ("DateField", "string"),
        ("DateTimeField", "string"),
        ("TimeField", "string"),
        ("BooleanField", "boolean"),
        ("NullBooleanField", "boolean"),
        ("IntegerField", "number"),
        ("SmallIntegerField", "number"),
        ("BigIntegerField", "number"),
        ("PositiveIntegerField", "number"),
        ("PositiveSmallIntegerField", "number"),
        ("FloatField", "number"),
        ("DecimalField", "number"),
        ("JSONField", "Record<string, any>"),
        ("ArrayField", "any[]"),
        ("FileField", "string"),
        ("ImageField", "string"),
        // Relations resolve to the target model's numeric id.
        ("ForeignKey", "number"),
        ("OneToOneField", "number"),
        ("ManyToManyField", "number[]"),
    ])
});

/// Resolve a Django field constructor to its TypeScript type.
///
/// Total function: unrecognized constructors resolve to [`FALLBACK_TYPE`],
/// never an error.
pub fn ts_type(constructor: &str) -> &'static str {
    FIELD_TYPE_MAP.get(constructor).copied().unwrap_or(FALLBACK_TYPE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_like_fields() {
        for c in ["CharField", "TextField", "SlugField", "EmailField", "URLField"] {
            assert_eq!(ts_type(c), "string");
        }
    }

    #[test]
    fn test_temporal_fields_map_to_string() {
        for c in ["DateField", "DateTimeField", "TimeField"] {
            assert_eq!(ts_type(c), "string");
        }
    }

    #[test]
    fn test_numeric_fields() {
        for c in [
            "IntegerField",
            "SmallIntegerField",
            "BigIntegerField",
            "PositiveIntegerField",
            "PositiveSmallIntegerField",
            "FloatField",
            "DecimalField",
        ] {
            assert_eq!(ts_type(c), "number");
        }
    }

    #[test]
    fn test_boolean_fields() {
        assert_eq!(ts_type("BooleanField"), "boolean");
        assert_eq!(ts_type("NullBooleanField"), "boolean");
    }

    #[test]
    fn test_structured_fields() {
        assert_eq!(ts_type("JSONField"), "Record<string, any>");
        assert_eq!(ts_type("ArrayField"), "any[]");
    }

    #[test]
    fn test_file_fields_map_to_string() {
        assert_eq!(ts_type("FileField"), "string");
        assert_eq!(ts_type("ImageField"), "string");
    }

    #[test]
    fn test_relations_resolve_to_ids() {
        assert_eq!(ts_type("ForeignKey"), "number");
        assert_eq!(ts_type("OneToOneField"), "number");
        assert_eq!(ts_type("ManyToManyField"), "number[]");
    }

    #[test]
    fn test_unknown_constructor_falls_back() {
        assert_eq!(ts_type("GeometryField"), "any");
        assert_eq!(ts_type(""), "any");
    }

    #[test]
    fn test_mapping_is_pure() {
        assert_eq!(ts_type("CharField"), ts_type("CharField"));
        assert_eq!(ts_type("GeometryField"), ts_type("GeometryField"));
    }
}
