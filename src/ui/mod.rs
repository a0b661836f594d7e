//! Terminal UI: the interactive app loop and the game view.

mod app;
mod game_view;

pub use app::App;
