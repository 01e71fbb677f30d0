// src/config/consts.rs

// Net config
pub const INDEX_URL: &str =
    "https://cmc.wp.musiclibraryassoc.org/thematic-indexes-used-in-library-of-congress-naco-authority-files/";

// Index page: the page builder tags the list widget with this data-id
pub const CONTAINER_TAG: &str = "div";
pub const CONTAINER_ATTR: &str = "data-id";
pub const CONTAINER_ID: &str = "5f33992";

// Citation tables: code, citation, abbreviation, access point use, notes
pub const CITATION_ROWS: usize = 5;
pub const VALUE_CELL: usize = 1;

// Report
pub const REPORT_HEADERS: [&str; 9] = [
    "Heading Number",
    "Heading",
    "URL",
    "Citation Number",
    "Code",
    "Citation",
    "Abbreviation",
    "Access Point Use",
    "Notes",
];

// Operator messages
pub const MSG_REQUEST_FAILED: &str = "Error requesting the web page";
pub const MSG_NO_LIST: &str = "Error finding a list on the web page";
