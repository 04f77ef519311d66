pub mod app;
pub mod commands;
pub mod config;
pub mod console;
pub mod db;
pub mod dto;
pub mod entity;
pub mod error;
pub mod input;
pub mod menu;
pub mod models;
pub mod render;
pub mod services;
pub mod state;
