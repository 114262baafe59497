//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Store the fixed route table
//! - Look up the matching route for a path
//! - Return matched route with its token, or explicit no-match
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(n) scan in declaration order, first match wins
//! - Explicit NoMatch rather than silent default

use crate::compute::Computation;
use crate::routing::matcher::{ExactMatcher, Matcher, PathPrefixMatcher};

/// What a matched route asks the service to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteKind {
    Root,
    Parity,
    Primality,
    Factorial,
}

impl RouteKind {
    /// The computation behind this route, if any.
    pub fn computation(self) -> Option<Computation> {
        match self {
            RouteKind::Root => None,
            RouteKind::Parity => Some(Computation::Parity),
            RouteKind::Primality => Some(Computation::Primality),
            RouteKind::Factorial => Some(Computation::Factorial),
        }
    }
}

/// A single entry in the route table.
#[derive(Debug)]
pub struct Route {
    matcher: Box<dyn Matcher>,
    kind: RouteKind,
}

impl Route {
    pub fn exact(path: &'static str, kind: RouteKind) -> Self {
        Self {
            matcher: Box::new(ExactMatcher::new(path)),
            kind,
        }
    }

    pub fn prefix(prefix: &'static str, kind: RouteKind) -> Self {
        Self {
            matcher: Box::new(PathPrefixMatcher::new(prefix)),
            kind,
        }
    }
}

/// Result of a route lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteMatch<'a> {
    /// A route matched; `token` is the unparsed path remainder.
    Found { kind: RouteKind, token: &'a str },
    NoMatch,
}

/// Ordered, immutable route table.
#[derive(Debug)]
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    /// Build a router from routes in priority order.
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// The service's fixed route table.
    pub fn standard() -> Self {
        Self::new(vec![
            Route::exact("/", RouteKind::Root),
            Route::prefix("/api/isprime/", RouteKind::Primality),
            Route::prefix("/api/iseven/", RouteKind::Parity),
            Route::prefix("/api/factorial/", RouteKind::Factorial),
        ])
    }

    /// Find the first route matching `path`.
    pub fn route<'a>(&self, path: &'a str) -> RouteMatch<'a> {
        self.routes
            .iter()
            .find_map(|route| {
                route.matcher.strip(path).map(|token| RouteMatch::Found {
                    kind: route.kind,
                    token,
                })
            })
            .unwrap_or(RouteMatch::NoMatch)
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::standard()
    }
}
