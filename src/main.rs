//! rprettytable main entrypoint.

use rprettytable::run;
use rprettytable::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
