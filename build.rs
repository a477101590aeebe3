const COMMANDS: &[&str] = &[
    "set_window_exclude_from_capture",
    "set_current_window_exclude_from_capture",
];

fn main() {
    // Generates the allow-/deny- permission files for each IPC command
    tauri_plugin::Builder::new(COMMANDS).build();
}
