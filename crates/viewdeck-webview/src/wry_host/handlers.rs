use std::sync::Arc;

use tracing::{debug, warn};
use wry::WebViewBuilder;

use crate::content::{request_path, ContentProvider, CONTENT_ORIGIN, PROTOCOL};
use crate::events::{EventSink, PageLoadState, ViewOrigin, WebViewEvent};

use super::navigation::NavigationPolicy;

// =============================================================================
// HANDLER ATTACHMENTS
// =============================================================================

pub(super) fn attach_ipc_handler<'a>(
    builder: WebViewBuilder<'a>,
    events: EventSink,
    origin: ViewOrigin,
) -> WebViewBuilder<'a> {
    builder.with_ipc_handler(move |request| {
        let body = request.body().to_string();

        if serde_json::from_str::<serde_json::Value>(&body).is_err() {
            warn!(
                deck = %origin.deck,
                key = %origin.key,
                body_len = body.len(),
                "IPC message rejected: invalid JSON"
            );
            return;
        }

        debug!(deck = %origin.deck, key = %origin.key, body_len = body.len(), "IPC message from page");
        events.push(WebViewEvent::IpcMessage {
            origin: origin.clone(),
            body,
        });
    })
}

pub(super) fn attach_page_load_handler<'a>(
    builder: WebViewBuilder<'a>,
    events: EventSink,
    origin: ViewOrigin,
) -> WebViewBuilder<'a> {
    builder.with_on_page_load_handler(move |event, url| {
        let state = PageLoadState::from(event);
        debug!(deck = %origin.deck, key = %origin.key, ?state, url = %url, "page load");
        events.push(WebViewEvent::PageLoad {
            origin: origin.clone(),
            state,
            url,
        });
    })
}

pub(super) fn attach_title_handler<'a>(
    builder: WebViewBuilder<'a>,
    events: EventSink,
    origin: ViewOrigin,
) -> WebViewBuilder<'a> {
    builder.with_document_title_changed_handler(move |title| {
        debug!(deck = %origin.deck, key = %origin.key, title = %title, "title changed");
        events.push(WebViewEvent::TitleChanged {
            origin: origin.clone(),
            title,
        });
    })
}

pub(super) fn attach_navigation_handler<'a>(
    builder: WebViewBuilder<'a>,
    events: EventSink,
    origin: ViewOrigin,
    policy: NavigationPolicy,
) -> WebViewBuilder<'a> {
    builder.with_navigation_handler(move |url| {
        if policy.allows(&url) {
            return true;
        }
        warn!(
            deck = %origin.deck,
            key = %origin.key,
            trust = %origin.trust,
            url = %url,
            "navigation blocked"
        );
        events.push(WebViewEvent::NavigationBlocked {
            origin: origin.clone(),
            url,
        });
        false
    })
}

pub(super) fn attach_custom_protocol<'a>(
    builder: WebViewBuilder<'a>,
    provider: Option<Arc<ContentProvider>>,
) -> WebViewBuilder<'a> {
    let Some(provider) = provider else {
        return builder;
    };
    builder.with_custom_protocol(PROTOCOL.to_string(), move |_webview_id, request| {
        let uri = request.uri().to_string();
        let path = request_path(&uri);

        let response = match provider.resolve(path) {
            Some((mime, data)) => wry::http::Response::builder()
                .status(200)
                .header("Content-Type", mime.as_ref())
                .header(
                    "Access-Control-Allow-Origin",
                    CONTENT_ORIGIN.trim_end_matches('/'),
                )
                .body(std::borrow::Cow::from(data.into_owned())),
            None => {
                warn!(path = %path, "custom protocol: asset not found");
                wry::http::Response::builder()
                    .status(404)
                    .body(std::borrow::Cow::from(b"Not Found".to_vec()))
            }
        };
        response.unwrap_or_else(|e| {
            warn!(path = %path, error = %e, "custom protocol: failed to build response");
            wry::http::Response::new(std::borrow::Cow::from(Vec::new()))
        })
    })
}
