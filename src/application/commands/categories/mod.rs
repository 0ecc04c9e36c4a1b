// src/application/commands/categories/mod.rs
mod create;
mod rename;
mod service;

pub use create::CreateCategoryCommand;
pub use rename::RenameCategoryCommand;
pub use service::CategoryCommandService;
