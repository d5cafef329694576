pub mod ensure_ready_command;
