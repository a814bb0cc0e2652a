pub mod alert;
pub mod app;
pub mod audio;
pub mod banner;
pub mod chat;
pub mod client;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod consts;
pub mod puzzle;
pub mod spinner;
pub mod theme;
pub mod view;
