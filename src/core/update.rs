use crate::core::{
    cmd::Cmd,
    msg::{explorer::ExplorerMsg, reveal::RevealMsg, system::SystemMsg, Msg},
    state::AppState,
};
use crate::domain::ui::Pane;

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    match msg {
        // The page starts revealing as soon as it is mounted
        Msg::System(SystemMsg::Init) => {
            let mut commands = state.system.update(SystemMsg::Init);
            commands.extend(state.reveals.update(RevealMsg::Replay));
            (state, commands)
        }

        // Quitting tears every revealer down with the page
        Msg::System(SystemMsg::Quit) => {
            let mut commands = state.system.update(SystemMsg::Quit);
            commands.extend(state.reveals.update(RevealMsg::CancelAll));
            (state, commands)
        }

        // System messages (delegated to SystemState)
        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg);
            (state, commands)
        }

        // Typewriter messages (delegated to RevealsState)
        Msg::Reveal(reveal_msg) => {
            let commands = state.reveals.update(reveal_msg);
            (state, commands)
        }

        // Explorer messages (delegated to ExplorerState); focus follows the viewer
        Msg::Explorer(explorer_msg) => {
            let commands = state.explorer.update(explorer_msg);
            match explorer_msg {
                ExplorerMsg::Close if state.ui.is_focused(Pane::Code) => {
                    state.ui.focus = Pane::Files;
                }
                ExplorerMsg::OpenAt(_) if !commands.is_empty() => {
                    state.ui.focus = Pane::Files;
                }
                _ => {}
            }
            (state, commands)
        }

        // Stats messages (delegated to StatsState)
        Msg::Stats(stats_msg) => {
            let commands = state.stats.update(stats_msg);
            (state, commands)
        }

        // UI messages (delegated to UiState)
        Msg::Ui(ui_msg) => {
            let code_visible = state.explorer.show_code;
            let commands = state.ui.update(ui_msg, code_visible);
            (state, commands)
        }
    }
}
