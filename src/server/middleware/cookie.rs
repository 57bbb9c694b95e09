//! Typed wrappers over the cookies the server reads and writes.
//!
//! Each struct handles one cookie so its name, path and attributes live in a
//! single place:
//! - `AuthCookie` - The session token
//! - `CsrfCookie` - OAuth state between the Google redirect and its callback
//!
//! `CookieJar` is immutable, so setters take the jar and return the updated one
//! for the handler to include in its response.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::server::service::auth::token::TOKEN_TTL_DAYS;

const TOKEN_COOKIE: &str = "token";
const CSRF_COOKIE: &str = "oauth_state";
const CSRF_COOKIE_PATH: &str = "/api/auth/google";
const CSRF_TTL_MINUTES: i64 = 10;

/// Session token cookie.
///
/// HttpOnly on path `/` for [`TOKEN_TTL_DAYS`]. Production deployments serve the
/// frontend from another origin, so the cookie is `Secure; SameSite=None` there
/// and `SameSite=Lax` otherwise.
pub struct AuthCookie {
    production: bool,
}

impl AuthCookie {
    pub fn new(production: bool) -> Self {
        Self { production }
    }

    /// Reads the session token, if the request carried one.
    pub fn token(jar: &CookieJar) -> Option<String> {
        jar.get(TOKEN_COOKIE)
            .map(|cookie| cookie.value().to_string())
            .filter(|value| !value.is_empty())
    }

    pub fn set(&self, jar: CookieJar, token: String) -> CookieJar {
        let same_site = if self.production {
            SameSite::None
        } else {
            SameSite::Lax
        };

        jar.add(
            Cookie::build((TOKEN_COOKIE, token))
                .http_only(true)
                .path("/")
                .max_age(time::Duration::days(TOKEN_TTL_DAYS))
                .secure(self.production)
                .same_site(same_site)
                .build(),
        )
    }

    pub fn clear(&self, jar: CookieJar) -> CookieJar {
        jar.remove(Cookie::build(TOKEN_COOKIE).path("/"))
    }
}

/// CSRF state for the Google authorization-code flow.
pub struct CsrfCookie;

impl CsrfCookie {
    /// Stores the state generated with the consent URL. Expires after ten minutes.
    pub fn set(jar: CookieJar, state: String) -> CookieJar {
        jar.add(
            Cookie::build((CSRF_COOKIE, state))
                .http_only(true)
                .path(CSRF_COOKIE_PATH)
                .max_age(time::Duration::minutes(CSRF_TTL_MINUTES))
                .same_site(SameSite::Lax)
                .build(),
        )
    }

    /// Removes the stored state, returning it. A state can only be used once.
    pub fn take(jar: CookieJar) -> (CookieJar, Option<String>) {
        let state = jar.get(CSRF_COOKIE).map(|cookie| cookie.value().to_string());
        let jar = jar.remove(Cookie::build(CSRF_COOKIE).path(CSRF_COOKIE_PATH));

        (jar, state)
    }
}
