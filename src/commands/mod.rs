pub mod delete;
pub mod edit;
pub mod form;
pub mod list;
pub mod new;
pub mod show;
