//! # Delegated Login Bridge
//!
//! Builds the URL that hosts the WeChat open-platform QR login widget inside
//! the sign-in screen, with the widget's own title, status icon, and tips
//! hidden so only the scannable code shows.
//!
//! [`build_embed_url`] is pure: same parameters, same bytes. It fails closed
//! when no app id is configured; [`DelegatedSurface::resolve`] is the one
//! place that decides between the embed and the static image fallback, and it
//! never calls the builder for unconfigured parameters.

use reqwest::Url;

use crate::core::error::{AppError, Result};

/// WeChat open platform QR connect endpoint
pub const QR_CONNECT_ENDPOINT: &str = "https://open.weixin.qq.com/connect/qrconnect";

/// Requested scopes (comma-separated, sent verbatim)
pub const QR_CONNECT_SCOPE: &str = "snsapi_login,snsapi_userinfo";

/// Widget theme selector: the light variant
pub const QR_CONNECT_STYLE_TYPE: &str = "white";

/// Stylesheet handed to the widget through its `href` parameter.
///
/// Decodes to CSS that hides `.impowerBox .title`, `.impowerBox .info` and
/// `.status_icon`, centers the status line, shrinks the code to 180px and
/// makes `html`/`body` transparent. The bytes are what the widget endpoint
/// was checked against; do not reformat or regenerate without looking at the
/// rendered widget.
pub const EMBED_STYLESHEET: &str = "data:text/css;base64,LmltcG93ZXJCb3ggLnFyY29kZSB7IHdpZHRoOiAxODBweDsgYm9yZGVyOiBub25lO30KLmltcG93ZXJCb3ggLnRpdGxlIHsgZGlzcGxheTogbm9uZTt9Ci5pbXBvd2VyQm94IC5pbmZvIHtkaXNwbGF5OiBub25lO30KLnN0YXR1c19pY29uIHtkaXNwbGF5OiBub25lfQouaW1wb3dlckJveCAuc3RhdHVzIHt0ZXh0LWFsaWduOiBjZW50ZXI7fQpodG1sIHtiYWNrZ3JvdW5kLWNvbG9yOiB0cmFuc3BhcmVudDt9CmJvZHkge292ZXJmbG93LXg6IGhpZGRlbjtvdmVyZmxvdy15OiBoaWRkZW47YmFja2dyb3VuZC1jb2xvcjogdHJhbnNwYXJlbnQ7fQo=";

/// Static QR image endpoint, templated with a ticket.
pub const STATIC_QR_ENDPOINT: &str = "https://mp.weixin.qq.com/cgi-bin/showqrcode?ticket=";

/// Delegated login configuration, fixed for the screen's lifetime.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BridgeParams {
    pub app_id: String,
    pub redirect_uri: String,
}

impl BridgeParams {
    pub fn new(app_id: impl Into<String>, redirect_uri: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            redirect_uri: redirect_uri.into(),
        }
    }

    /// An empty app id means the bridge is unconfigured. Any other value,
    /// whitespace included, is passed through as given.
    pub fn is_configured(&self) -> bool {
        !self.app_id.is_empty()
    }
}

/// Build the embeddable QR connect URL.
///
/// Query parameters are form-encoded in a fixed order: `appid`,
/// `redirect_uri`, `scope`, `self_redirect`, `styletype`, `href`.
pub fn build_embed_url(params: &BridgeParams) -> Result<String> {
    if !params.is_configured() {
        return Err(AppError::Config(
            "delegated login app id is not configured".to_string(),
        ));
    }

    let url = Url::parse_with_params(
        QR_CONNECT_ENDPOINT,
        &[
            ("appid", params.app_id.as_str()),
            ("redirect_uri", params.redirect_uri.as_str()),
            ("scope", QR_CONNECT_SCOPE),
            ("self_redirect", "true"),
            ("styletype", QR_CONNECT_STYLE_TYPE),
            ("href", EMBED_STYLESHEET),
        ],
    )
    .map_err(|e| AppError::Config(format!("invalid QR connect endpoint: {}", e)))?;

    Ok(url.into())
}

/// Static QR image URL.
///
/// Nothing in the client can obtain a ticket today, so callers pass `None`
/// and get the endpoint with an empty ticket.
// TODO: confirm with the identity service owners where the showqrcode ticket comes from
pub fn static_qr_url(ticket: Option<&str>) -> String {
    let Some(ticket) = ticket else {
        return STATIC_QR_ENDPOINT.to_string();
    };

    match Url::parse(STATIC_QR_ENDPOINT) {
        Ok(mut url) => {
            url.query_pairs_mut().clear().append_pair("ticket", ticket);
            url.into()
        }
        Err(_) => format!("{}{}", STATIC_QR_ENDPOINT, ticket),
    }
}

/// What the delegated sub-form renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DelegatedSurface {
    /// Interactive widget hosted at `url`
    Embed { url: String },
    /// Degraded fallback: a plain QR image
    StaticImage { url: String },
}

impl DelegatedSurface {
    /// Pick the surface for `params`. Unconfigured parameters silently fall
    /// back to the static image.
    pub fn resolve(params: &BridgeParams) -> Self {
        if !params.is_configured() {
            tracing::warn!("Delegated login app id not configured, using static QR fallback without a ticket");
            return DelegatedSurface::StaticImage {
                url: static_qr_url(None),
            };
        }

        match build_embed_url(params) {
            Ok(url) => DelegatedSurface::Embed { url },
            Err(e) => {
                tracing::error!(error = %e, "Failed to build QR connect URL, using static QR fallback");
                DelegatedSurface::StaticImage {
                    url: static_qr_url(None),
                }
            }
        }
    }

    pub fn url(&self) -> &str {
        match self {
            DelegatedSurface::Embed { url } | DelegatedSurface::StaticImage { url } => url,
        }
    }

    pub fn is_embed(&self) -> bool {
        matches!(self, DelegatedSurface::Embed { .. })
    }
}
