use pippi::ui::output;

fn main() {
    if let Err(err) = pippi::cli::run() {
        output::error(format!("{:#}", err));
        std::process::exit(1);
    }
}
