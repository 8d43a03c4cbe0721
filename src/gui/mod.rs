pub mod actions;
pub mod app;
pub mod card_view;
pub mod error_banner;
pub mod menu;
pub mod message_overlay;
pub mod theme;

pub use app::FlashdeckApp;
