//! Static route table: every path maps to exactly one page.
//!
//! The Leptos router in [`crate::app`] is built from these entries; this
//! module also records which routes are session-gated, and the protected
//! navigation is derived from that record.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Every client-side route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Root,
    Login,
    Register,
    ResetPassword,
    Home,
    Search,
    Messages,
}

impl AppRoute {
    pub const ALL: [Self; 7] = [
        Self::Root,
        Self::Login,
        Self::Register,
        Self::ResetPassword,
        Self::Home,
        Self::Search,
        Self::Messages,
    ];

    /// Path segment as registered with the router (empty for the root).
    #[must_use]
    pub fn segment(self) -> &'static str {
        match self {
            Self::Root => "",
            Self::Login => "login",
            Self::Register => "register",
            Self::ResetPassword => "reset-password",
            Self::Home => "home",
            Self::Search => "search",
            Self::Messages => "messages",
        }
    }

    /// Absolute path used for links and navigation.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Root => "/",
            Self::Login => "/login",
            Self::Register => "/register",
            Self::ResetPassword => "/reset-password",
            Self::Home => "/home",
            Self::Search => "/search",
            Self::Messages => "/messages",
        }
    }

    /// Protected page rendered at this route, if the route is session-gated.
    #[must_use]
    pub fn protected_page(self) -> Option<ProtectedPage> {
        match self {
            Self::Home => Some(ProtectedPage::Home),
            Self::Search => Some(ProtectedPage::Search),
            Self::Messages => Some(ProtectedPage::Messages),
            Self::Root | Self::Login | Self::Register | Self::ResetPassword => None,
        }
    }
}

/// Pages whose content depends on a resolved identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProtectedPage {
    Home,
    Search,
    Messages,
}

impl ProtectedPage {
    /// Session-gated pages in route-table order.
    pub fn all() -> impl Iterator<Item = Self> {
        AppRoute::ALL.into_iter().filter_map(AppRoute::protected_page)
    }

    #[must_use]
    pub fn route(self) -> AppRoute {
        match self {
            Self::Home => AppRoute::Home,
            Self::Search => AppRoute::Search,
            Self::Messages => AppRoute::Messages,
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Search => "Search",
            Self::Messages => "Messages",
        }
    }
}
