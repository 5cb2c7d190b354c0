//! gratitude main entrypoint.

use gratitude::run;
use gratitude::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
