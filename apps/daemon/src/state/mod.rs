pub mod daemon_state;
