//! Query-string codec for [`WhitelabelConfig`].
//!
//! One flat parameter per present leaf field, using the canonical short
//! keys `brand`, `logo`, `primary`, `bg`, `text`, `theme`, `radius`.
//! Values are percent-encoded exactly once on write and decoded exactly
//! once on read. Unrecognized keys and malformed values are dropped
//! silently for forward compatibility.

use crate::config::{Brand, Colors, Theme, WhitelabelConfig};

/// Encode a config as a flat query string (no leading `?`).
/// Absent fields emit no parameter; an empty config yields `""`.
pub fn encode(config: &WhitelabelConfig) -> String {
    let mut params = form_urlencoded::Serializer::new(String::new());

    if let Some(brand) = &config.brand {
        if let Some(name) = &brand.name {
            params.append_pair("brand", name);
        }
        if let Some(logo) = &brand.logo {
            params.append_pair("logo", logo);
        }
    }

    if let Some(colors) = &config.colors {
        if let Some(primary) = &colors.primary {
            params.append_pair("primary", primary);
        }
        if let Some(background) = &colors.background {
            params.append_pair("bg", background);
        }
        if let Some(text) = &colors.text {
            params.append_pair("text", text);
        }
    }

    if let Some(theme) = config.theme {
        params.append_pair("theme", theme.as_str());
    }

    if let Some(radius) = &config.border_radius {
        params.append_pair("radius", radius);
    }

    params.finish()
}

/// Decode a query string (with or without a leading `?`) into a config.
///
/// Empty values behave like absent parameters. An invalid `theme` value
/// leaves `theme` absent rather than substituting a default.
pub fn decode(query: &str) -> WhitelabelConfig {
    let query = query.strip_prefix('?').unwrap_or(query);

    let mut brand_name = None;
    let mut logo = None;
    let mut primary = None;
    let mut background = None;
    let mut text = None;
    let mut theme = None;
    let mut radius = None;

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        let value = value.into_owned();
        if value.is_empty() {
            continue;
        }
        match key.as_ref() {
            "brand" => brand_name = Some(value),
            "logo" => logo = Some(value),
            "primary" => primary = Some(value),
            "bg" => background = Some(value),
            "text" => text = Some(value),
            "theme" => theme = Theme::parse(&value),
            "radius" => radius = Some(value),
            _ => {}
        }
    }

    let brand = (brand_name.is_some() || logo.is_some()).then(|| Brand {
        name: brand_name,
        logo,
    });
    let colors = (primary.is_some() || background.is_some() || text.is_some()).then(|| Colors {
        primary,
        background,
        text,
    });

    WhitelabelConfig {
        brand,
        colors,
        theme,
        border_radius: radius,
    }
}

/// Build the embedded document's URL from a base and a config.
pub fn embed_url(base: &str, config: &WhitelabelConfig) -> String {
    let query = encode(config);
    if query.is_empty() {
        base.to_string()
    } else {
        format!("{base}?{query}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::resolve;

    fn full_config() -> WhitelabelConfig {
        WhitelabelConfig {
            brand: Some(Brand {
                name: Some("Acme Wallet".into()),
                logo: Some("https://example.com/logo.png".into()),
            }),
            colors: Some(Colors {
                primary: Some("#9945ff".into()),
                background: Some("#000000".into()),
                text: Some("#ffffff".into()),
            }),
            theme: Some(Theme::Dark),
            border_radius: Some("8px".into()),
        }
    }

    #[test]
    fn round_trips_a_full_config() {
        let config = full_config();
        assert_eq!(decode(&encode(&config)), config);
    }

    #[test]
    fn round_trips_reserved_characters() {
        let config = WhitelabelConfig {
            brand: Some(Brand {
                name: Some("A & B = C?".into()),
                logo: Some("https://cdn.example.com/img?id=1&size=64".into()),
            }),
            ..Default::default()
        };
        let query = encode(&config);
        // the raw delimiters must not survive encoding
        assert!(!query.contains("&size"));
        assert_eq!(decode(&query), config);
    }

    #[test]
    fn empty_config_encodes_to_empty_string() {
        assert_eq!(encode(&WhitelabelConfig::default()), "");
    }

    #[test]
    fn ignores_unrecognized_keys() {
        let with_extras = decode("primary=%23ff0000&tracking=abc&utm_source=x");
        let without = decode("primary=%23ff0000");
        assert_eq!(with_extras, without);
    }

    #[test]
    fn drops_invalid_theme_silently() {
        let config = decode("theme=sepia");
        assert_eq!(config.theme, None);
        assert!(config.is_empty());
    }

    #[test]
    fn accepts_leading_question_mark() {
        assert_eq!(decode("?theme=dark").theme, Some(Theme::Dark));
    }

    #[test]
    fn empty_values_behave_like_absent() {
        let config = decode("brand=&primary=");
        assert!(config.is_empty());
    }

    #[test]
    fn decodes_percent_encoded_values_once() {
        let config = decode("brand=Acme%20Wallet&logo=https%3A%2F%2Fexample.com%2Fa.png");
        let brand = config.brand.expect("brand present");
        assert_eq!(brand.name.as_deref(), Some("Acme Wallet"));
        assert_eq!(brand.logo.as_deref(), Some("https://example.com/a.png"));
    }

    #[test]
    fn embed_url_omits_question_mark_for_empty_config() {
        let base = "https://embed.example.com/";
        assert_eq!(embed_url(base, &WhitelabelConfig::default()), base);
        assert_eq!(
            embed_url(base, &decode("theme=dark")),
            format!("{base}?theme=dark")
        );
    }

    #[test]
    fn round_trips_resolved_presets() {
        for name in ["solana", "ton", "light"] {
            let config = resolve(Some(name), None);
            assert_eq!(decode(&encode(&config)), config);
        }
    }
}
