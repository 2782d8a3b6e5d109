use crate::Route;

use biblio_core::Identity;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserBadge {
    pub name: String,
    pub email: String,
    pub role_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub route: Route,
}

/// What the navigation bar shows for a given session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NavState {
    pub user: Option<UserBadge>,
    pub links: Vec<NavLink>,
}

impl NavState {
    pub fn for_identity(identity: Option<&Identity>) -> Self {
        let Some(identity) = identity else {
            return Self::default();
        };

        let mut links = vec![
            NavLink {
                label: "Books",
                route: Route::Books,
            },
            NavLink {
                label: "Loans",
                route: Route::Loans,
            },
        ];
        if identity.is_admin() {
            links.push(NavLink {
                label: "Users",
                route: Route::Users,
            });
        }

        Self {
            user: Some(UserBadge {
                name: identity.display_name(),
                email: identity.email.clone(),
                role_label: identity.role.label().to_string(),
            }),
            links,
        }
    }

    pub fn has_link(&self, route: &Route) -> bool {
        self.links.iter().any(|link| &link.route == route)
    }
}
