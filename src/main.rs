//! bakdag main entrypoint.

use bakdag::run;
use bakdag::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
