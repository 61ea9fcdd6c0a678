pub const REGIONS: [&str; 3] = ["US", "JP", "RU"];

pub const LANGUAGES: [&str; 3] = ["en", "ja", "ru"];

pub const CONTENT_TYPES: [&str; 6] = [
    "ARTICLE",
    "POLICY",
    "ANNOUNCEMENT",
    "CAMPAIGN",
    "GUIDELINE",
    "FAQ",
];

pub const PRIORITIES: [&str; 4] = ["LOW", "NORMAL", "HIGH", "URGENT"];

pub const SUGGESTED_TAGS: [&str; 12] = [
    "trading",
    "markets",
    "compliance",
    "risk",
    "internal",
    "policy",
    "ops",
    "research",
    "alerts",
    "product",
    "training",
    "client",
];

pub const DEFAULT_CONTENT_TYPE: &str = "ARTICLE";
pub const DEFAULT_REGION: &str = "US";
pub const DEFAULT_CATEGORY: &str = "TRADES";
pub const DEFAULT_PRIORITY: &str = "NORMAL";
pub const DEFAULT_LANGUAGE: &str = "en";
