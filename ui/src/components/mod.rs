pub mod app;
pub mod faq_view;
pub mod fetch;
pub mod footer_view;
pub mod form_overlay;
pub mod people_view;
pub mod reveal;
