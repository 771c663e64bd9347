use clap::Parser;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = multibrot_zoom::ZoomArgs::parse();

    multibrot_zoom::run_zoom(&args)?;

    Ok(())
}
