use uuid::Uuid;
use web_sys::window;

const ACCESS_TOKEN_KEY: &str = "auth_access_token";
const QUOTE_ID_KEY: &str = "quote_request_id";
const API_BASE_KEY: &str = "api_base_url";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Get access token from localStorage (written by the login flow, which is
/// outside this module).
pub fn get_access_token() -> Option<String> {
    get_local_storage()?.get_item(ACCESS_TOKEN_KEY).ok()?
}

/// Operator override for the backend base URL, if one has been set.
pub fn get_api_base() -> Option<String> {
    let value = get_local_storage()?.get_item(API_BASE_KEY).ok()??;
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Quote correlation id for the current session, ignoring malformed values.
pub fn get_quote_id() -> Option<Uuid> {
    let raw = get_local_storage()?.get_item(QUOTE_ID_KEY).ok()??;
    Uuid::parse_str(&raw).ok()
}

/// Persist the quote id acknowledged by the server.
pub fn save_quote_id(id: &Uuid) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(QUOTE_ID_KEY, &id.to_string());
    }
}

/// Drop the quote id, ending the session's quote.
pub fn clear_quote_id() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(QUOTE_ID_KEY);
    }
}
