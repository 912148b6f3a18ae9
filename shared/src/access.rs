//! Role-based route access
//!
//! A static, total mapping from role to visible routes. Both sides are
//! closed enums, so the compiler enforces that every new route or role
//! gets an explicit entry in the table; a typo cannot silently deny (or
//! grant) access the way string-array membership checks can.

use serde::{Deserialize, Serialize};

use crate::models::Role;

/// The closed set of dashboard views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    Dashboard,
    Production,
    Sales,
    Revenue,
    Resources,
    Settings,
}

impl Route {
    /// Every route in canonical navigation order.
    pub const ALL: [Route; 6] = [
        Route::Dashboard,
        Route::Production,
        Route::Sales,
        Route::Revenue,
        Route::Resources,
        Route::Settings,
    ];

    /// URL path for the view.
    pub fn path(&self) -> &'static str {
        match self {
            Route::Dashboard => "/dashboard",
            Route::Production => "/production",
            Route::Sales => "/sales",
            Route::Revenue => "/revenue",
            Route::Resources => "/resources",
            Route::Settings => "/settings",
        }
    }

    /// Human-readable navigation label.
    pub fn label(&self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Production => "Production",
            Route::Sales => "Sales",
            Route::Revenue => "Revenue",
            Route::Resources => "Resources",
            Route::Settings => "Settings",
        }
    }

    /// Resolve a URL path to a route. Unrecognized paths yield `None`,
    /// which callers must treat as a denial (fail closed), never an error.
    pub fn from_path(path: &str) -> Option<Route> {
        Route::ALL.iter().copied().find(|r| r.path() == path)
    }
}

/// Whether `role` may view `route`.
///
/// Dashboard and Settings are visible to everyone; the operational views
/// (Production, Sales, Resources) belong to the people recording data;
/// Revenue belongs to the people reading the books.
pub fn is_allowed(role: Role, route: Route) -> bool {
    match route {
        Route::Dashboard | Route::Settings => true,
        Route::Production | Route::Sales | Route::Resources => {
            matches!(role, Role::Admin | Role::Staff)
        }
        Route::Revenue => matches!(role, Role::Admin | Role::Viewer),
    }
}

/// Routes visible to `role`, in canonical navigation order. Used to build
/// the navigation menu; the route guard remains the enforcement point.
pub fn visible_routes(role: Role) -> Vec<Route> {
    Route::ALL
        .iter()
        .copied()
        .filter(|route| is_allowed(role, *route))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The full 3x6 table, spelled out case by case.
    #[test]
    fn access_table_matches_the_role_route_rules() {
        use Role::*;
        use Route::*;

        let table = [
            (Admin, Dashboard, true),
            (Admin, Production, true),
            (Admin, Sales, true),
            (Admin, Revenue, true),
            (Admin, Resources, true),
            (Admin, Settings, true),
            (Staff, Dashboard, true),
            (Staff, Production, true),
            (Staff, Sales, true),
            (Staff, Revenue, false),
            (Staff, Resources, true),
            (Staff, Settings, true),
            (Viewer, Dashboard, true),
            (Viewer, Production, false),
            (Viewer, Sales, false),
            (Viewer, Revenue, true),
            (Viewer, Resources, false),
            (Viewer, Settings, true),
        ];

        for (role, route, expected) in table {
            assert_eq!(
                is_allowed(role, route),
                expected,
                "{role:?} on {route:?}"
            );
        }
    }

    #[test]
    fn visible_routes_preserve_canonical_order() {
        use Route::*;

        assert_eq!(visible_routes(Role::Admin), Route::ALL.to_vec());
        assert_eq!(
            visible_routes(Role::Staff),
            vec![Dashboard, Production, Sales, Resources, Settings]
        );
        assert_eq!(
            visible_routes(Role::Viewer),
            vec![Dashboard, Revenue, Settings]
        );
    }

    #[test]
    fn unknown_paths_fail_closed() {
        assert_eq!(Route::from_path("/dashboard"), Some(Route::Dashboard));
        assert_eq!(Route::from_path("/reports"), None);
        assert_eq!(Route::from_path(""), None);
        assert_eq!(Route::from_path("/Dashboard"), None);
    }
}
