pub const TITLE: &str = "Mask stock by pharmacy";
pub const SEARCH_HINT: &str = "Type an address fragment and press Enter (e.g. 台北市, 大安區, 基隆路).";
pub const LOADING_TEXT: &str = "Loading pharmacy data...";
pub const EMPTY_FEED_TEXT: &str = "No data.";
pub const NO_MATCH_TEXT: &str = "No pharmacies match this address.";
pub const MAP_PLACE_URL: &str = "https://www.google.com.tw/maps/place/";
pub const SOURCE_CREDIT: &str =
    "Data: g0v mask supply platform, pharmacy stock geojson by kiang.";
