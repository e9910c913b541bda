//! Pre-built themes and overlay merging.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::config::{Brand, Colors, Theme, WhitelabelConfig};

static PRESETS: LazyLock<HashMap<&'static str, WhitelabelConfig>> = LazyLock::new(|| {
    let mut table = HashMap::new();
    table.insert(
        "solana",
        WhitelabelConfig {
            colors: Some(Colors {
                primary: Some("#9945ff".into()),
                background: Some("#000000".into()),
                text: Some("#ffffff".into()),
            }),
            theme: Some(Theme::Dark),
            border_radius: Some("8px".into()),
            ..Default::default()
        },
    );
    table.insert(
        "ton",
        WhitelabelConfig {
            colors: Some(Colors {
                primary: Some("#0088cc".into()),
                background: Some("#0f1419".into()),
                text: Some("#ffffff".into()),
            }),
            theme: Some(Theme::Dark),
            border_radius: Some("12px".into()),
            ..Default::default()
        },
    );
    table.insert(
        "light",
        WhitelabelConfig {
            colors: Some(Colors {
                primary: Some("#2563eb".into()),
                background: Some("#ffffff".into()),
                text: Some("#000000".into()),
            }),
            theme: Some(Theme::Light),
            border_radius: Some("6px".into()),
            ..Default::default()
        },
    );
    table
});

/// Look up a preset by name. Unknown names yield `None`, not an error.
pub fn preset(name: &str) -> Option<WhitelabelConfig> {
    PRESETS.get(name).cloned()
}

/// Layer `overrides` on top of a preset base.
///
/// `brand` and `colors` merge per leaf field (the override wins only for
/// fields it actually sets); `theme` and `border_radius` are taken from
/// the overrides when present. An absent or unknown preset means the
/// base is empty.
pub fn resolve(preset_name: Option<&str>, overrides: Option<&WhitelabelConfig>) -> WhitelabelConfig {
    let base = preset_name.and_then(preset).unwrap_or_default();
    let Some(overrides) = overrides else {
        return base;
    };

    WhitelabelConfig {
        brand: merge_brand(base.brand, overrides.brand.as_ref()),
        colors: merge_colors(base.colors, overrides.colors.as_ref()),
        theme: overrides.theme.or(base.theme),
        border_radius: overrides
            .border_radius
            .clone()
            .or(base.border_radius),
    }
}

fn merge_brand(base: Option<Brand>, overlay: Option<&Brand>) -> Option<Brand> {
    match (base, overlay) {
        (base, None) => base,
        (None, Some(overlay)) => Some(overlay.clone()),
        (Some(base), Some(overlay)) => Some(Brand {
            name: overlay.name.clone().or(base.name),
            logo: overlay.logo.clone().or(base.logo),
        }),
    }
}

fn merge_colors(base: Option<Colors>, overlay: Option<&Colors>) -> Option<Colors> {
    match (base, overlay) {
        (base, None) => base,
        (None, Some(overlay)) => Some(overlay.clone()),
        (Some(base), Some(overlay)) => Some(Colors {
            primary: overlay.primary.clone().or(base.primary),
            background: overlay.background.clone().or(base.background),
            text: overlay.text.clone().or(base.text),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_preset_resolves_empty() {
        assert!(resolve(Some("no-such-theme"), None).is_empty());
        assert!(resolve(None, None).is_empty());
    }

    #[test]
    fn override_wins_per_leaf_field() {
        let overrides = WhitelabelConfig {
            colors: Some(Colors {
                primary: Some("#000000".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let resolved = resolve(Some("solana"), Some(&overrides));
        let colors = resolved.colors.expect("colors present");
        assert_eq!(colors.primary.as_deref(), Some("#000000"));
        // untouched preset leaves survive
        assert_eq!(colors.background.as_deref(), Some("#000000"));
        assert_eq!(colors.text.as_deref(), Some("#ffffff"));
        assert_eq!(resolved.theme, Some(Theme::Dark));
        assert_eq!(resolved.border_radius.as_deref(), Some("8px"));
    }

    #[test]
    fn brand_overlay_merges_with_preset_brand() {
        let base = WhitelabelConfig {
            brand: Some(Brand {
                name: Some("Base".into()),
                logo: Some("base.png".into()),
            }),
            ..Default::default()
        };
        let overlay = Brand {
            name: Some("Overlay".into()),
            logo: None,
        };
        let merged = merge_brand(base.brand, Some(&overlay)).expect("brand merged");
        assert_eq!(merged.name.as_deref(), Some("Overlay"));
        assert_eq!(merged.logo.as_deref(), Some("base.png"));
    }

    #[test]
    fn overrides_on_empty_base_pass_through() {
        let overrides = WhitelabelConfig {
            theme: Some(Theme::Light),
            border_radius: Some("4px".into()),
            ..Default::default()
        };
        let resolved = resolve(None, Some(&overrides));
        assert_eq!(resolved, overrides);
    }
}
