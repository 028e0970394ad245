//! Command dispatcher for the SimpleBrowser JSON-RPC protocol.
//!
//! Kept apart from `rpc_server.rs` so it can be unit-tested independently.
//! `handle_method` maps a method name and JSON params onto the `App`
//! command handlers and renders the outcome as JSON.

use std::sync::Mutex;

use serde_json::{json, Value};

use crate::app::App;
use crate::managers::history_store::HistoryStoreTrait;
use crate::services::http_fetcher::HttpFetcherTrait;
use crate::types::page::PageView;

fn str_param<'a>(params: &'a Value, name: &str) -> Result<&'a str, String> {
    params
        .get(name)
        .and_then(|v| v.as_str())
        .ok_or_else(|| format!("missing {}", name))
}

fn page_json(page: &PageView) -> Result<Value, String> {
    serde_json::to_value(page).map_err(|e| e.to_string())
}

/// Dispatch a JSON-RPC method call to the appropriate handler.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
/// Back/forward with nothing to move to return `{"page": null}`.
pub fn handle_method<F: HttpFetcherTrait>(
    app: &Mutex<App<F>>,
    method: &str,
    params: &Value,
) -> Result<Value, String> {
    let mut a = app.lock().map_err(|e| e.to_string())?;

    match method {
        "ping" => Ok(json!({"pong": true})),

        // ─── Navigation ───
        "page.load" => {
            let url = str_param(params, "url")?;
            page_json(&a.load_url(url))
        }
        "page.refresh" => page_json(&a.refresh()),
        "nav.back" => match a.back() {
            Some(page) => Ok(json!({"page": page_json(&page)?})),
            None => Ok(json!({"page": null})),
        },
        "nav.forward" => match a.forward() {
            Some(page) => Ok(json!({"page": page_json(&page)?})),
            None => Ok(json!({"page": null})),
        },
        "nav.address" => Ok(json!({"url": a.address()})),

        // ─── Home page ───
        "home.go" => page_json(&a.go_home()),
        "home.get" => Ok(json!({"url": a.home_page()})),
        "home.set" => {
            a.set_home_page().map_err(|e| e.to_string())?;
            Ok(json!({"url": a.home_page()}))
        }

        // ─── Favorites ───
        "favorites.add" => {
            let title = str_param(params, "title")?;
            let fav = a.add_favorite(title).map_err(|e| e.to_string())?;
            Ok(json!({"title": fav.title, "url": fav.url}))
        }
        "favorites.list" => {
            let items: Vec<Value> = a
                .favorites()
                .iter()
                .map(|f| json!({"title": f.title, "url": f.url}))
                .collect();
            Ok(json!({"items": items}))
        }
        "favorites.remove" => {
            let title = str_param(params, "title")?;
            let url = str_param(params, "url")?;
            let removed = a.remove_favorite(title, url).map_err(|e| e.to_string())?;
            Ok(json!({"removed": removed}))
        }

        // ─── History ───
        "history.list" => {
            let items: Vec<Value> = a
                .history_entries()
                .iter()
                .map(|h| json!({"url": h.url, "timestamp": h.timestamp.to_string()}))
                .collect();
            Ok(json!({"items": items, "cursor": a.history.cursor()}))
        }
        "history.suggest" => {
            let query = str_param(params, "query")?;
            Ok(json!({"items": a.suggestions(query)}))
        }

        // ─── Bulk download ───
        "bulk.download" => {
            let path = str_param(params, "path")?;
            Ok(json!({"report": a.bulk_download(path)}))
        }

        _ => Err(format!("unknown method: {}", method)),
    }
}
