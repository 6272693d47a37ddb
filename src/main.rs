//! timelog main entrypoint.

use timelog::run;
use timelog::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
