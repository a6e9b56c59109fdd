//! Path routing and the session guard.

use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Signup,
    Resume,
}

impl Route {
    /// Map a location path onto a route.  `None` for `/` and anything unknown;
    /// callers fall back to [`Route::Login`].
    pub fn from_path(path: &str) -> Option<Route> {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "/login" => Some(Route::Login),
            "/signup" => Some(Route::Signup),
            "/resume" => Some(Route::Resume),
            _ => None,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Signup => "/signup",
            Route::Resume => "/resume",
        }
    }

    pub fn is_protected(&self) -> bool {
        matches!(self, Route::Resume)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Login => "Sign in",
            Route::Signup => "Create account",
            Route::Resume => "AI Resume Builder",
        }
    }
}

/// Outcome of running a navigation through the guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guarded {
    Render(Route),
    Redirect(Route),
}

impl Guarded {
    pub fn route(&self) -> Route {
        match self {
            Guarded::Render(r) | Guarded::Redirect(r) => *r,
        }
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self, Guarded::Redirect(_))
    }
}

/// Decide what to show for `requested`.  Only token presence is consulted;
/// no request is made.
pub fn guard(requested: Route, session: &Session) -> Guarded {
    let authenticated = session.is_authenticated();
    match requested {
        r if r.is_protected() && !authenticated => Guarded::Redirect(Route::Login),
        Route::Login | Route::Signup if authenticated => Guarded::Redirect(Route::Resume),
        r => Guarded::Render(r),
    }
}

/// Guard a raw location path, sending unknown paths to sign-in.
pub fn guard_path(path: &str, session: &Session) -> Guarded {
    match Route::from_path(path) {
        Some(route) => guard(route, session),
        None => match guard(Route::Login, session) {
            Guarded::Render(r) | Guarded::Redirect(r) => Guarded::Redirect(r),
        },
    }
}
