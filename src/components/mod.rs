//! UI Components
//!
//! Reusable Leptos components.

mod calendar_cell;
mod calendar_grid;
mod celebration_card;
mod celebrations_view;
mod delete_confirm_button;
mod edit_person_modal;
mod landing;
mod login_form;
mod messages_view;
mod overview_view;
mod people_view;
mod register_form;
mod sidebar;
mod stat_card;
mod tab_navigation;
mod toast;
mod upload_view;
mod upload_zone;
mod view_toggle;
mod wish_form;
mod wish_generator;
mod wish_result;

pub use calendar_cell::CalendarCell;
pub use calendar_grid::CalendarGrid;
pub use celebration_card::CelebrationCard;
pub use celebrations_view::CelebrationsView;
pub use delete_confirm_button::DeleteConfirmButton;
pub use edit_person_modal::EditPersonModal;
pub use landing::LandingScreen;
pub use login_form::LoginForm;
pub use messages_view::MessagesView;
pub use overview_view::OverviewView;
pub use people_view::PeopleView;
pub use register_form::RegisterForm;
pub use sidebar::Sidebar;
pub use stat_card::StatCard;
pub use tab_navigation::TabNavigation;
pub use toast::{ToastHost, Toaster};
pub use upload_view::UploadView;
pub use upload_zone::{SelectedFile, UploadZone};
pub use view_toggle::ViewToggle;
pub use wish_form::WishForm;
pub use wish_generator::WishGenerator;
pub use wish_result::WishResult;
