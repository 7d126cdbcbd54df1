// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Route table and the auth-driven navigation guard.
//!
//! The guard is a reconciliation, not a state machine: whenever the auth
//! flag or the current route changes it recomputes the one redirect (if
//! any) implied by `(is_authenticated, route group)` and applies it.
//! Re-running it is idempotent.

use crate::store::AuthState;
use std::fmt;
use std::str::FromStr;
use tokio::sync::watch;

/// Top-level route group, the first path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteGroup {
    /// `(auth)`: sign-in and sign-up
    Auth,
    /// `(app)`: everything behind a session
    App,
    /// Outside both groups
    Root,
}

impl RouteGroup {
    pub fn segment(self) -> &'static str {
        match self {
            RouteGroup::Auth => "(auth)",
            RouteGroup::App => "(app)",
            RouteGroup::Root => "",
        }
    }
}

/// Every screen in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    SignIn,
    SignUp,
    Home,
    Clients,
    Plans,
    Profile,
    /// Any path outside the table, including `/`.
    NotFound,
}

impl Route {
    /// Every screen in the table. [`Route::NotFound`] is not one.
    pub const ALL: [Route; 6] = [
        Route::SignIn,
        Route::SignUp,
        Route::Home,
        Route::Clients,
        Route::Plans,
        Route::Profile,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::SignIn => "/(auth)/signin",
            Route::SignUp => "/(auth)/signup",
            Route::Home => "/(app)/home",
            Route::Clients => "/(app)/clients",
            Route::Plans => "/(app)/plans",
            Route::Profile => "/(app)/profile",
            Route::NotFound => "/+not-found",
        }
    }

    pub fn group(self) -> RouteGroup {
        match self {
            Route::SignIn | Route::SignUp => RouteGroup::Auth,
            Route::NotFound => RouteGroup::Root,
            _ => RouteGroup::App,
        }
    }

    /// Route for an arbitrary path, [`Route::NotFound`] when it is not in
    /// the table.
    pub fn resolve(path: &str) -> Route {
        path.parse().unwrap_or(Route::NotFound)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Path that names no known route.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown route: {0}")]
pub struct UnknownRoute(pub String);

impl FromStr for Route {
    type Err = UnknownRoute;

    /// Accepts the route path with or without a trailing slash or a
    /// trailing `/index` segment.
    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let normalized = path.trim_end_matches('/');
        let normalized = normalized.strip_suffix("/index").unwrap_or(normalized);

        Route::ALL
            .into_iter()
            .chain([Route::NotFound])
            .find(|route| route.path() == normalized)
            .ok_or_else(|| UnknownRoute(path.to_string()))
    }
}

/// Redirect implied by the auth flag and the current route group.
pub fn redirect_for(is_authenticated: bool, group: RouteGroup) -> Option<Route> {
    let in_auth_group = group == RouteGroup::Auth;

    if !is_authenticated && !in_auth_group {
        Some(Route::SignIn)
    } else if is_authenticated && in_auth_group {
        Some(Route::Home)
    } else {
        None
    }
}

/// Holds the current route and keeps it consistent with the session.
pub struct Navigator {
    auth: watch::Receiver<AuthState>,
    current: watch::Sender<Route>,
}

impl Navigator {
    /// Create the navigator at `initial`, reconciling immediately.
    pub fn new(auth: watch::Receiver<AuthState>, initial: Route) -> Self {
        let (current, _) = watch::channel(initial);
        let navigator = Self { auth, current };
        navigator.reconcile();
        navigator
    }

    pub fn current(&self) -> Route {
        *self.current.borrow()
    }

    /// Receiver notified on every route change, including redirects.
    pub fn subscribe(&self) -> watch::Receiver<Route> {
        self.current.subscribe()
    }

    /// Move to `route`, then apply the guard. Returns where we ended up.
    pub fn navigate(&self, route: Route) -> Route {
        self.current.send_replace(route);
        self.reconcile();
        self.current()
    }

    /// Move to whatever `path` resolves to, then apply the guard.
    pub fn navigate_path(&self, path: &str) -> Route {
        self.navigate(Route::resolve(path))
    }

    /// Apply the guard once. Returns the redirect target if one was taken.
    pub fn reconcile(&self) -> Option<Route> {
        let is_authenticated = self.auth.borrow().is_authenticated;
        let from = self.current();

        let target = redirect_for(is_authenticated, from.group())?;
        tracing::debug!(from = %from, to = %target, is_authenticated, "Redirecting");
        self.current.send_replace(target);
        Some(target)
    }

    /// Reconcile on every auth change until the store goes away.
    pub async fn run(&self) {
        let mut auth = self.auth.clone();
        while auth.changed().await.is_ok() {
            auth.borrow_and_update();
            self.reconcile();
        }
        tracing::debug!("Auth store dropped, navigation guard stopped");
    }
}
