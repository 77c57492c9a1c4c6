// src/main.rs

use callme::fs::RealFileSystem;
use callme::{CallMeError, cli, logging, run};

fn main() {
    if let Err(err) = run_main() {
        // Setup problems are printed as plain instructions for the user.
        match err.downcast_ref::<CallMeError>() {
            Some(cm) => {
                eprintln!("{cm}");
                let missing = cm.missing_fields();
                if !missing.is_empty() {
                    eprintln!("missing: {}", missing.join(", "));
                }
            }
            None => eprintln!("callme error: {err:?}"),
        }
        std::process::exit(1);
    }
}

fn run_main() -> anyhow::Result<()> {
    let args = cli::parse();
    logging::init_logging(args.log_level)?;
    let stdout = std::io::stdout();
    run(args, &RealFileSystem, &mut stdout.lock())
}
