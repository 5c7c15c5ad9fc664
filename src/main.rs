use std::process;

fn main() {
    if let Err(err) = mdi_codegen::app::run() {
        eprintln!("fatal: {err:#}");
        process::exit(1);
    }
}
