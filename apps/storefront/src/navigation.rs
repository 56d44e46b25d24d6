//! # Navigation
//!
//! The five named views and the rules for moving between them.
//!
//! ```text
//!   request            anonymous          authenticated
//!   ───────            ─────────          ─────────────
//!   home               Home               Home
//!   products           Products           Products
//!   favorites          Login   ◄ gate     Favorites
//!   cart               Cart               Cart
//!   login              Login              Products ◄ already signed in
//!   <anything else>    Home               Home
//!
//!   login ok ──► Products      logout ──► Login      checkout ──► Products
//! ```

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// A storefront view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Home,
    Products,
    Favorites,
    Cart,
    Login,
}

impl View {
    pub const ALL: [View; 5] = [
        View::Home,
        View::Products,
        View::Favorites,
        View::Cart,
        View::Login,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            View::Home => "home",
            View::Products => "products",
            View::Favorites => "favorites",
            View::Cart => "cart",
            View::Login => "login",
        }
    }

    /// Parses a view name, falling back to `Home` for anything unknown.
    pub fn parse_or_home(name: &str) -> View {
        name.parse().unwrap_or_default()
    }

    /// Views hidden from anonymous visitors.
    pub fn requires_auth(self) -> bool {
        matches!(self, View::Favorites)
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a view name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownView(pub String);

impl FromStr for View {
    type Err = UnknownView;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        View::ALL
            .into_iter()
            .find(|v| v.as_str() == name)
            .ok_or_else(|| UnknownView(s.to_string()))
    }
}

/// Holds the current view and applies the redirect rules.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    current: View,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> View {
        self.current
    }

    /// Moves to `requested`, or to where the rules redirect it. Returns the
    /// view actually landed on.
    pub fn navigate(&mut self, requested: View, authenticated: bool) -> View {
        self.current = match requested {
            v if v.requires_auth() && !authenticated => View::Login,
            View::Login if authenticated => View::Products,
            v => v,
        };
        self.current
    }

    pub fn on_login(&mut self) -> View {
        self.current = View::Products;
        self.current
    }

    pub fn on_logout(&mut self) -> View {
        self.current = View::Login;
        self.current
    }

    pub fn on_checkout(&mut self) -> View {
        self.current = View::Products;
        self.current
    }
}
