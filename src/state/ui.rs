use ratatui::widgets::ListState;

#[derive(PartialEq, Debug, Clone, Copy)]
pub enum AppMode {
    MainMenu,
    Feed,
    PostView,
    Donate,
    Chat,
    About,
    Preferences,
    Input,
}

/// What the modal input popup is collecting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputMode {
    SearchFeed,
    NewComment,
}

/// State management for UI-specific state
pub struct UiState {
    pub mode: AppMode,
    pub should_quit: bool,
    pub tick_count: u64,

    pub main_menu_state: ListState,

    // Modal input popup
    pub input_mode: Option<InputMode>,
    pub current_input: String,
    /// Where Esc/submit returns to when the input popup closes.
    pub input_return_mode: AppMode,

    // Preferences navigation
    pub preferences_selected: usize,

    // Quit confirmation
    pub show_quit_confirm: bool,
    pub quit_confirm_selected: usize,
}

impl Default for UiState {
    fn default() -> Self {
        let mut main_menu_state = ListState::default();
        main_menu_state.select(Some(0));
        Self {
            mode: AppMode::MainMenu,
            should_quit: false,
            tick_count: 0,
            main_menu_state,
            input_mode: None,
            current_input: String::new(),
            input_return_mode: AppMode::MainMenu,
            preferences_selected: 0,
            show_quit_confirm: false,
            quit_confirm_selected: 0,
        }
    }
}

impl UiState {
    pub fn set_mode(&mut self, mode: AppMode) {
        self.mode = mode;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn tick(&mut self) {
        self.tick_count += 1;
    }

    pub fn open_input(&mut self, input_mode: InputMode, return_mode: AppMode) {
        self.input_mode = Some(input_mode);
        self.input_return_mode = return_mode;
        self.current_input.clear();
        self.mode = AppMode::Input;
    }

    pub fn close_input(&mut self) {
        self.input_mode = None;
        self.current_input.clear();
        self.mode = self.input_return_mode;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_popup_returns_to_the_mode_it_came_from() {
        let mut ui = UiState::default();
        ui.set_mode(AppMode::PostView);
        ui.open_input(InputMode::NewComment, AppMode::PostView);
        assert_eq!(ui.mode, AppMode::Input);
        ui.current_input.push_str("draft");
        ui.close_input();
        assert_eq!(ui.mode, AppMode::PostView);
        assert!(ui.current_input.is_empty());
        assert!(ui.input_mode.is_none());
    }
}
