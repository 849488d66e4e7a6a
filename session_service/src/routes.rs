// session_service/src/routes.rs

/// Access classification for a view route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protection {
    /// Reachable without a session (login, signup, password recovery).
    Public,
    /// Requires a signed-in identity.
    Authenticated,
    /// Requires a signed-in identity present in the admins collection.
    AdminOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteAccess {
    pub path: &'static str,
    pub protection: Protection,
}

impl RouteAccess {
    pub fn requires_admin(&self) -> bool {
        self.protection == Protection::AdminOnly
    }
}

/// The abstract route surface. The dashboard itself is admin-only; the
/// remaining protected views only need a session.
pub const ROUTES: &[RouteAccess] = &[
    RouteAccess { path: "/login", protection: Protection::Public },
    RouteAccess { path: "/signup", protection: Protection::Public },
    RouteAccess { path: "/forgot-password", protection: Protection::Public },
    RouteAccess { path: "/reset-password", protection: Protection::Public },
    RouteAccess { path: "/", protection: Protection::AdminOnly },
    RouteAccess { path: "/appointments", protection: Protection::Authenticated },
    RouteAccess { path: "/resources", protection: Protection::Authenticated },
    RouteAccess { path: "/profile", protection: Protection::Authenticated },
    RouteAccess { path: "/settings", protection: Protection::Authenticated },
    RouteAccess { path: "/notifications", protection: Protection::Authenticated },
];

pub fn route_access(path: &str) -> Option<RouteAccess> {
    ROUTES.iter().copied().find(|route| route.path == path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_is_admin_only() {
        let dashboard = route_access("/").unwrap();
        assert!(dashboard.requires_admin());
    }

    #[test]
    fn recovery_routes_are_public() {
        assert_eq!(
            route_access("/forgot-password").unwrap().protection,
            Protection::Public
        );
        assert_eq!(
            route_access("/reset-password").unwrap().protection,
            Protection::Public
        );
    }

    #[test]
    fn unknown_route_is_absent() {
        assert!(route_access("/billing").is_none());
    }
}
