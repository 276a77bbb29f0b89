use log::error;
use mandelbrot_viewer::{GuiCommand, PixelsPresenter, PixelsPresenterFactory, ViewerConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let presenter_factory = PixelsPresenterFactory::new();
    let command = GuiCommand::<_, PixelsPresenter>::new(presenter_factory, ViewerConfig::default());

    if let Err(e) = command.run() {
        error!("{e}");
        return Err(e.into());
    }

    Ok(())
}
