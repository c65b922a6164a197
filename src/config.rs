//! Service endpoints and scraping constants.

/// Base URL of the Atlas level-sharing service
pub const ATLAS_BASE_URL: &str = "https://atlas.dustforce.com";

/// Dustkid level listing endpoint
pub const DUSTKID_LEVELS_URL: &str = "https://dustkid.com/levels.php";

/// Maximum number of levels Dustkid returns per listing page
pub const DUSTKID_PAGE_SIZE: u32 = 1024;

/// Name of the Atlas session cookie
pub const SESSION_COOKIE_NAME: &str = "PHPSESSID";

/// og:title content Atlas renders when no level exists at an id
pub const SITE_DEFAULT_TITLE: &str = "Atlas - the Dustforce map sharing server";

/// og:title content Atlas renders to anonymous viewers of a hidden level
pub const NAMELESS_MAP_TITLE: &str = " - a Dustforce map";

/// Sentinel written wherever a field could not be recovered
pub const NOT_AVAILABLE: &str = "N/A";

/// URL of a level page by Atlas id
pub fn level_url(id: u32) -> String {
    format!("{ATLAS_BASE_URL}/{id}")
}

/// URL of the moderation page used to probe session privilege
pub fn moderate_url() -> String {
    format!("{ATLAS_BASE_URL}/admin/moderate")
}
