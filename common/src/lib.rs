pub mod faq;
pub mod forms;
pub mod people;
pub mod scroll;
