use tui_textarea::Input;

use super::NetworkError;

#[derive(Debug)]
pub enum Event {
    BackendHealthCheckFailed(String),
    RecipeResponse(Result<String, NetworkError>),
    KeyboardCharInput(Input),
    KeyboardCTRLC(),
    KeyboardCTRLG(),
    KeyboardCTRLX(),
    KeyboardEnter(),
    KeyboardEsc(),
    KeyboardPaste(String),
    UISelectDown(),
    UISelectUp(),
    UITick(),
}
