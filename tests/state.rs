#[cfg(test)]
mod tests {
    use std::fs;
    use std::sync::{Mutex, MutexGuard};
    use tarefas::libs::data_storage::DataStorage;
    use tarefas::libs::state::{TasksState, STATE_FILE_NAME};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Redirects the data directory to a temp dir for each test.
    struct StateTestContext {
        _temp_dir: TempDir,
        _guard: MutexGuard<'static, ()>,
    }

    impl TestContext for StateTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            StateTestContext {
                _temp_dir: temp_dir,
                _guard: guard,
            }
        }
    }

    #[test_context(StateTestContext)]
    #[test]
    fn test_missing_state_defaults_to_show_all(_ctx: &mut StateTestContext) {
        let state = TasksState::read();
        assert!(state.show_done_tasks);
    }

    #[test_context(StateTestContext)]
    #[test]
    fn test_state_round_trip(_ctx: &mut StateTestContext) {
        let state = TasksState { show_done_tasks: false };
        state.save().unwrap();
        assert_eq!(TasksState::read(), state);
    }

    #[test_context(StateTestContext)]
    #[test]
    fn test_corrupt_state_falls_back_to_default(_ctx: &mut StateTestContext) {
        let state_file_path = DataStorage::new().get_path(STATE_FILE_NAME).unwrap();
        fs::write(&state_file_path, "not json at all").unwrap();
        let state = TasksState::read();
        assert!(state.show_done_tasks);
    }

    #[test_context(StateTestContext)]
    #[test]
    fn test_toggle_flips_and_persists(_ctx: &mut StateTestContext) {
        let mut state = TasksState::default();
        state.toggle().unwrap();
        assert!(!state.show_done_tasks);
        assert!(!TasksState::read().show_done_tasks);

        // Toggling twice restores the original preference.
        state.toggle().unwrap();
        assert!(TasksState::read().show_done_tasks);
    }

    #[test_context(StateTestContext)]
    #[test]
    fn test_state_serializes_wire_key(_ctx: &mut StateTestContext) {
        let state = TasksState { show_done_tasks: true };
        state.save().unwrap();
        let state_file_path = DataStorage::new().get_path(STATE_FILE_NAME).unwrap();
        let raw = fs::read_to_string(state_file_path).unwrap();
        assert!(raw.contains("showDoneTasks"));
    }
}
