use crate::tui::Ui;
use std::io::{stdin, stdout};
use std::process::ExitCode;

mod cards;
mod game_logic;
mod game_state;
mod input;
mod tui;

fn main() -> ExitCode {
    let stdin = stdin();
    let stdout = stdout();
    let mut ui = Ui::new(stdin.lock(), stdout.lock());
    match ui.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
