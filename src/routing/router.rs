//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Store the ordered stub routes
//! - Look up the stub for a request path
//! - Fall through to the not-found stub
//!
//! # Design Decisions
//! - Immutable after construction (shared via Arc without locks)
//! - O(n) scan, first match wins
//! - Query string removed before any matcher runs

use axum::body::Body;
use axum::http::Request;

use crate::http::response::StubPayload;
use crate::routing::matcher::{ExactPathMatcher, Matcher, PathPrefixMatcher};

/// A single compiled route.
#[derive(Debug)]
pub struct Route {
    /// Route identifier for debugging.
    pub name: &'static str,
    matcher: Box<dyn Matcher>,
    payload: StubPayload,
}

impl Route {
    pub fn new(name: &'static str, matcher: Box<dyn Matcher>, payload: StubPayload) -> Self {
        Self {
            name,
            matcher,
            payload,
        }
    }

    pub fn payload(&self) -> &StubPayload {
        &self.payload
    }
}

/// Ordered route table with a not-found fallback.
#[derive(Debug)]
pub struct Router {
    routes: Vec<Route>,
    fallback: StubPayload,
}

impl Router {
    /// Build a router from routes in evaluation order.
    pub fn new(routes: Vec<Route>, fallback: StubPayload) -> Self {
        Self { routes, fallback }
    }

    /// The fixed table served by the backend.
    pub fn stub_api() -> Self {
        Self::new(
            vec![
                Route::new(
                    "health",
                    Box::new(ExactPathMatcher::new("/api/health")),
                    StubPayload::health(),
                ),
                Route::new(
                    "analytics",
                    Box::new(PathPrefixMatcher::new("/api/analytics")),
                    StubPayload::ok_message("analytics stub (login disabled)"),
                ),
                Route::new(
                    "blog",
                    Box::new(PathPrefixMatcher::new("/api/blog")),
                    StubPayload::ok_message("blog stub (login disabled)"),
                ),
                Route::new(
                    "api",
                    Box::new(PathPrefixMatcher::new("/api/")),
                    StubPayload::ok_message("api stub"),
                ),
            ],
            StubPayload::not_found(),
        )
    }

    /// Resolve a raw request target such as `/api/health?x=1`.
    pub fn resolve(&self, path_and_query: &str) -> &StubPayload {
        let path = path_and_query
            .split_once('?')
            .map_or(path_and_query, |(path, _)| path);
        self.lookup(path)
    }

    /// Resolve using the URI path of an incoming request.
    pub fn match_request(&self, req: &Request<Body>) -> &StubPayload {
        self.lookup(req.uri().path())
    }

    fn lookup(&self, path: &str) -> &StubPayload {
        self.routes
            .iter()
            .find(|route| route.matcher.matches(path))
            .map(Route::payload)
            .unwrap_or(&self.fallback)
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::stub_api()
    }
}
