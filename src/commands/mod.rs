//! Tauri command handlers
//!
//! IPC commands the frontend reaches through
//! `invoke('plugin:capture-exclusion|<command>')`.

pub mod window;
