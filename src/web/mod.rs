//! Web module - server-rendered HTML pages

pub mod pages;
