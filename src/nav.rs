use serde::Serialize;
use strum_macros::Display;
use utoipa::ToSchema;

use crate::model::role::Role;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Display)]
pub enum NavItem {
    Dashboard,
    Employees,
    Attendance,
    Leave,
    Timesheet,
}

impl NavItem {
    fn segment(self) -> &'static str {
        match self {
            NavItem::Dashboard => "home",
            NavItem::Employees => "employee",
            NavItem::Attendance => "attendance",
            NavItem::Leave => "leave",
            NavItem::Timesheet => "timesheet",
        }
    }
}

const ADMIN_ITEMS: &[NavItem] = &[
    NavItem::Dashboard,
    NavItem::Employees,
    NavItem::Attendance,
    NavItem::Leave,
    NavItem::Timesheet,
];

const EMPLOYEE_ITEMS: &[NavItem] = &[
    NavItem::Dashboard,
    NavItem::Attendance,
    NavItem::Leave,
    NavItem::Timesheet,
];

/// Navigation items visible to `role`. No role means no items.
pub fn items_for(role: Option<Role>) -> &'static [NavItem] {
    match role {
        Some(Role::Admin) => ADMIN_ITEMS,
        Some(Role::Employee) => EMPLOYEE_ITEMS,
        None => &[],
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[schema(example = json!({"label": "Dashboard", "path": "/admin/home"}))]
pub struct NavEntry {
    pub label: String,
    pub path: String,
}

/// Sidebar links for `role`, routed under the role's landing path.
pub fn navigation(role: Option<Role>) -> Vec<NavEntry> {
    let Some(role) = role else {
        return Vec::new();
    };

    items_for(Some(role))
        .iter()
        .map(|item| NavEntry {
            label: item.to_string(),
            path: format!("{}/{}", role.landing_path(), item.segment()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_sees_every_entry() {
        assert_eq!(
            items_for(Some(Role::Admin)),
            &[
                NavItem::Dashboard,
                NavItem::Employees,
                NavItem::Attendance,
                NavItem::Leave,
                NavItem::Timesheet
            ]
        );
    }

    #[test]
    fn employee_does_not_see_employees() {
        let items = items_for(Some(Role::Employee));
        assert_eq!(items.len(), 4);
        assert!(!items.contains(&NavItem::Employees));
    }

    #[test]
    fn no_role_sees_nothing() {
        assert!(items_for(None).is_empty());
        assert!(navigation(None).is_empty());
    }

    #[test]
    fn entries_are_routed_under_the_landing_path() {
        let entries = navigation(Some(Role::Employee));
        assert_eq!(
            entries[0],
            NavEntry {
                label: "Dashboard".into(),
                path: "/employee/home".into()
            }
        );

        let admin = navigation(Some(Role::Admin));
        assert_eq!(admin[1].label, "Employees");
        assert_eq!(admin[1].path, "/admin/employee");
    }
}
