//! # Category Palette
//!
//! Fixed category → color mapping used by the distribution chart.
//! Categories are free text; anything not listed here gets
//! [`FALLBACK_COLOR`].

/// Color for categories outside [`CATEGORY_COLORS`].
pub const FALLBACK_COLOR: &str = "#6B7280";

/// Known categories in form-option order, with their chart colors.
pub const CATEGORY_COLORS: [(&str, &str); 8] = [
    ("Eletrônicos", "#3B82F6"),
    ("Roupas", "#EF4444"),
    ("Casa e Jardim", "#10B981"),
    ("Esportes", "#F59E0B"),
    ("Livros", "#8B5CF6"),
    ("Alimentação", "#F97316"),
    ("Beleza", "#EC4899"),
    ("Automóveis", "#6B7280"),
];

/// Resolves the display color for a category name (exact match).
///
/// ## Example
/// ```rust
/// use stockroom_core::category::{category_color, FALLBACK_COLOR};
///
/// assert_eq!(category_color("Eletrônicos"), "#3B82F6");
/// assert_eq!(category_color("Brinquedos"), FALLBACK_COLOR);
/// ```
pub fn category_color(category: &str) -> &'static str {
    CATEGORY_COLORS
        .iter()
        .find(|(name, _)| *name == category)
        .map_or(FALLBACK_COLOR, |(_, color)| *color)
}

/// Category names offered by the product form.
pub fn known_categories() -> impl Iterator<Item = &'static str> {
    CATEGORY_COLORS.iter().map(|(name, _)| *name)
}
