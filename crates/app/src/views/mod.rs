use shared_types::Role;

mod employee_panel;
mod hr_panel;
mod login;
mod manager_panel;
mod notifications;
mod seeder;
mod unknown_role;

pub use employee_panel::EmployeePanel;
pub use hr_panel::HrPanel;
pub use login::Login;
pub use manager_panel::ManagerPanel;
pub use notifications::NotificationsView;
pub use seeder::Seeder;
pub use unknown_role::UnknownRole;

/// Which panel the authenticated role gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    Hr,
    Manager,
    Employee,
    Unknown,
}

/// Select the role panel for a server role string.
///
/// Unrecognised roles get an explicit Unknown panel rather than a blank
/// area.
pub fn panel_for_role(role: &str) -> PanelKind {
    match Role::parse(role) {
        Some(Role::Hr) => PanelKind::Hr,
        Some(Role::Manager) => PanelKind::Manager,
        Some(Role::Employee) => PanelKind::Employee,
        None => PanelKind::Unknown,
    }
}
