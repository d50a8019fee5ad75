//! Image URLs for entries and type badges

use crate::config::CatalogConfig;
use crate::registry;

/// Official artwork for an identifier
pub fn artwork_url(config: &CatalogConfig, dex_num: u32) -> String {
    format!("{}{}.png", config.sprite_base_url, dex_num)
}

/// Shiny official artwork for an identifier
pub fn shiny_url(config: &CatalogConfig, dex_num: u32) -> String {
    format!("{}shiny/{}.png", config.sprite_base_url, dex_num)
}

/// Badge icon for a type name (icon 0 for names outside the registry)
pub fn type_icon_url(config: &CatalogConfig, type_name: &str) -> String {
    format!("{}{}.png", config.type_icon_base_url, registry::icon_id(type_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        let config = CatalogConfig::default();
        assert!(artwork_url(&config, 25).ends_with("/official-artwork/25.png"));
        assert!(shiny_url(&config, 25).ends_with("/official-artwork/shiny/25.png"));
        assert!(type_icon_url(&config, "fire").ends_with("/sword-shield/10.png"));
        assert!(type_icon_url(&config, "stellar").ends_with("/sword-shield/0.png"));
    }
}
