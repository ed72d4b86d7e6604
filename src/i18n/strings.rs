use crate::i18n::Locale;

/// All localized user-facing strings for the storefront pages.
///
/// Strings are stored raw; the rendering collaborator owns escaping and
/// markup.
#[derive(Debug, Clone)]
pub struct PageStrings {
    // ==================== Listing Headings ====================
    /// Heading of the aromas listing page
    pub aromas_heading: &'static str,

    /// Heading of the foods listing page
    pub foods_heading: &'static str,

    /// Heading of the moods listing page
    pub moods_heading: &'static str,

    /// Heading of the wine-shop listing page
    pub wine_shop_heading: &'static str,

    /// Notice shown when a listing has no entries
    pub empty_listing: &'static str,

    // ==================== Search Page ====================
    /// Heading of the search page
    pub search_heading: &'static str,

    /// Placeholder for the search input
    pub search_placeholder: &'static str,

    // ==================== Order Confirmation ====================
    /// Heading of the order-confirmation page
    pub order_confirmation_heading: &'static str,

    /// Body of the order-confirmation page
    pub order_confirmation_message: &'static str,
}

impl PageStrings {
    /// Get the string table for a locale.
    pub fn for_locale(locale: Locale) -> &'static PageStrings {
        match locale {
            Locale::Sl => &SLOVENE_STRINGS,
            Locale::En => &ENGLISH_STRINGS,
        }
    }
}

// ==================== Slovene Strings ====================

/// Slovene page strings (baseline)
pub const SLOVENE_STRINGS: PageStrings = PageStrings {
    // Listing headings
    aromas_heading: "Arome",
    foods_heading: "Hrana",
    moods_heading: "Razpoloženja",
    wine_shop_heading: "Vinoteka",
    empty_listing: "Ni zadetkov.",

    // Search
    search_heading: "Iskanje",
    search_placeholder: "Poišči vino, klet ali sorto ...",

    // Order confirmation
    order_confirmation_heading: "Hvala za nakup!",
    order_confirmation_message: "Vaše naročilo je bilo uspešno oddano. \
Potrditev smo poslali na vaš e-naslov.",
};

// ==================== English Strings ====================

/// English page strings
pub const ENGLISH_STRINGS: PageStrings = PageStrings {
    // Listing headings
    aromas_heading: "Aromas",
    foods_heading: "Foods",
    moods_heading: "Moods",
    wine_shop_heading: "Wine shop",
    empty_listing: "No results.",

    // Search
    search_heading: "Search",
    search_placeholder: "Search for a wine, winery or variety ...",

    // Order confirmation
    order_confirmation_heading: "Thank you for your order!",
    order_confirmation_message: "Your order has been placed successfully. \
A confirmation has been sent to your email address.",
};
