//! Restructure's application entry point.
//! Parses arguments, sets up logging and runs the restructuring steps.

use restructure::{
    cli::{get_args, Args},
    error::{default_error_handler, Result},
    logger::init_logger,
    processor::Restructurer,
    renderer::MiniJinjaRenderer,
    report::{print_banner, print_summary},
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn run(args: Args) -> Result<()> {
    let engine = MiniJinjaRenderer::new();

    print_banner();
    let report = Restructurer::new(&args.root, &engine).run()?;
    print_summary(&report);

    Ok(())
}
