//! The hub's page routes.

use serde::Serialize;
use std::fmt;

/// One page of the hub.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "page", rename_all = "kebab-case")]
pub enum Route {
    Landing,
    Login,
    Register,
    Tracking,
    /// `/dashboard`, which always redirects to the overview.
    Dashboard,
    Overview,
    Orders,
    Warehouses,
    WarehouseInventory { warehouse_id: String },
    Dispatch,
    Shippers,
    Reports,
    CompanyReport,
    Profile,
    Admin,
}

impl Route {
    /// Parses a path from the route table. A trailing slash is ignored;
    /// unknown paths yield `None`.
    pub fn parse(path: &str) -> Option<Route> {
        let trimmed = path.trim();
        let normalized = match trimmed.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => trimmed,
        };
        if normalized == "/" {
            return Some(Route::Landing);
        }

        let segments: Vec<&str> = normalized.strip_prefix('/')?.split('/').collect();
        let route = match segments.as_slice() {
            ["login"] => Route::Login,
            ["register"] => Route::Register,
            ["tracking"] => Route::Tracking,
            ["dashboard"] => Route::Dashboard,
            ["dashboard", "overview"] => Route::Overview,
            ["dashboard", "orders"] => Route::Orders,
            ["dashboard", "warehouses"] => Route::Warehouses,
            ["dashboard", "warehouses", id, "inventory"] if !id.is_empty() => {
                Route::WarehouseInventory {
                    warehouse_id: (*id).to_string(),
                }
            }
            ["dashboard", "dispatch"] => Route::Dispatch,
            ["dashboard", "shippers"] => Route::Shippers,
            ["dashboard", "reports"] => Route::Reports,
            ["dashboard", "reports", "company"] => Route::CompanyReport,
            ["dashboard", "profile"] => Route::Profile,
            ["dashboard", "admin"] => Route::Admin,
            _ => return None,
        };
        Some(route)
    }

    /// Parses `path` and follows the `/dashboard` redirect.
    pub fn resolve(path: &str) -> Option<Route> {
        Self::parse(path).map(Route::redirected)
    }

    /// The route actually rendered for this one.
    pub fn redirected(self) -> Route {
        match self {
            Route::Dashboard => Route::Overview,
            other => other,
        }
    }

    /// Canonical path without a trailing slash.
    pub fn path(&self) -> String {
        match self {
            Route::Landing => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::Tracking => "/tracking".to_string(),
            Route::Dashboard => "/dashboard".to_string(),
            Route::Overview => "/dashboard/overview".to_string(),
            Route::Orders => "/dashboard/orders".to_string(),
            Route::Warehouses => "/dashboard/warehouses".to_string(),
            Route::WarehouseInventory { warehouse_id } => {
                format!("/dashboard/warehouses/{}/inventory", warehouse_id)
            }
            Route::Dispatch => "/dashboard/dispatch".to_string(),
            Route::Shippers => "/dashboard/shippers".to_string(),
            Route::Reports => "/dashboard/reports".to_string(),
            Route::CompanyReport => "/dashboard/reports/company".to_string(),
            Route::Profile => "/dashboard/profile".to_string(),
            Route::Admin => "/dashboard/admin".to_string(),
        }
    }

    /// Whether the page is rendered inside the dashboard layout.
    pub fn is_dashboard(&self) -> bool {
        !matches!(
            self,
            Route::Landing | Route::Login | Route::Register | Route::Tracking
        )
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/", Route::Landing)]
    #[case("/login", Route::Login)]
    #[case("/tracking/", Route::Tracking)]
    #[case("/dashboard/orders", Route::Orders)]
    #[case("/dashboard/reports/company", Route::CompanyReport)]
    #[case("/dashboard/admin/", Route::Admin)]
    fn parses_route_table(#[case] path: &str, #[case] expected: Route) {
        assert_eq!(Route::parse(path), Some(expected));
    }

    #[rstest]
    #[case("")]
    #[case("dashboard")]
    #[case("/dashboard/unknown")]
    #[case("/dashboard/warehouses//inventory")]
    #[case("/dashboard/warehouses/WH-001")]
    fn rejects_unknown_paths(#[case] path: &str) {
        assert_eq!(Route::parse(path), None);
    }

    #[test]
    fn dashboard_redirects_to_overview() {
        assert_eq!(Route::parse("/dashboard"), Some(Route::Dashboard));
        assert_eq!(Route::resolve("/dashboard"), Some(Route::Overview));
        assert_eq!(Route::resolve("/dashboard/"), Some(Route::Overview));
        assert_eq!(Route::resolve("/dashboard/orders"), Some(Route::Orders));
    }

    #[test]
    fn inventory_route_carries_warehouse_id() {
        let route = Route::parse("/dashboard/warehouses/WH-002/inventory").unwrap();
        assert_eq!(
            route,
            Route::WarehouseInventory {
                warehouse_id: "WH-002".into()
            }
        );
        assert_eq!(route.path(), "/dashboard/warehouses/WH-002/inventory");
        assert!(route.is_dashboard());
        assert!(!Route::Tracking.is_dashboard());
    }
}
