//! UI Components
//!
//! Leptos components for the wizard and the saved-backpacks listing.

mod backpack_builder_page;
mod backpacks_list;
mod category_step;
mod checkout_step;
mod child_info_step;
mod delete_confirm_button;
mod quantity_control;
mod review_step;
mod saved_backpack_card;
mod step_indicator;
mod storage_error_banner;

pub use backpack_builder_page::BackpackBuilderPage;
pub use backpacks_list::BackpacksList;
pub use category_step::CategoryStep;
pub use checkout_step::CheckoutStep;
pub use child_info_step::ChildInfoStep;
pub use delete_confirm_button::DeleteConfirmButton;
pub use quantity_control::QuantityControl;
pub use review_step::ReviewStep;
pub use saved_backpack_card::SavedBackpackCard;
pub use step_indicator::StepIndicator;
pub use storage_error_banner::StorageErrorBanner;
