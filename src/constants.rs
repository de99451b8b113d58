/// Production host of the Skrybe API
pub const DEFAULT_BASE_URL: &str = "https://dashboard.skry.be";
/// User agent string sent with every request to identify this SDK
pub const USER_AGENT: &str = concat!("SkrybeSDK-Rust/", env!("CARGO_PKG_VERSION"));
/// Minimum time in milliseconds between the start of two dispatches (100ms)
pub const MIN_REQUEST_INTERVAL_MS: u64 = 100;
/// Page requested when the caller does not specify one
pub const DEFAULT_PAGE: u32 = 1;
/// Page size requested when the caller does not specify one
pub const DEFAULT_LIMIT: u32 = 10;
/// Name of the form field carrying the API key
pub const API_KEY_FIELD: &str = "api_key";

/// Endpoint for sending a transactional email
pub const EMAIL_SEND_ENDPOINT: &str = "/api/emails/send.php";
/// Endpoint for creating (and optionally sending) a campaign
pub const CAMPAIGN_CREATE_ENDPOINT: &str = "/api/campaigns/create.php";
/// Endpoint for fetching subscriber lists
pub const LISTS_GET_ENDPOINT: &str = "/api/lists/get-lists.php";
/// Endpoint for fetching campaigns
pub const CAMPAIGNS_GET_ENDPOINT: &str = "/api/campaigns/get-campaigns.php";
/// Endpoint for fetching the subscribers of a list
pub const SUBSCRIBERS_GET_ENDPOINT: &str = "/api/subscribers/get-subscribers.php";
/// Endpoint for adding a subscriber to a list
pub const SUBSCRIBER_ADD_ENDPOINT: &str = "/api/subscribers/add.php";
