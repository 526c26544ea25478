// src/gui/components/mod.rs
pub mod tabs;
pub mod cat_form;
pub mod cat_table;
pub mod transfer_bar;
pub mod confirm;
