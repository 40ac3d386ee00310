use {
    anyhow::{Context, Result as Anyhow},
    camino::Utf8PathBuf,
    pixmap::Pixmap,
    qoi::{Channels, ColorSpace},
};

fn main() -> Anyhow<()> {
    log_init();

    let path: Utf8PathBuf = std::env::args().nth(1)
        .context("usage: qoic <image-file>")?
        .into();
    let bytes = std::fs::read(&path).with_context(|| format!("reading {path}"))?;
    let image = image::load_from_memory(&bytes)
        .with_context(|| format!("decoding {path}"))?
        .into_rgba8();

    let (wide, high) = (image.width(), image.height());
    let image = Pixmap::from_pixels(bytemuck::cast_slice(&image).to_vec(), wide, high)
        .context("pixel buffer does not match its dimensions")?;
    let qoif = qoi::encode_pixmap(&image, Channels::Rgba, ColorSpace::Srgb)?;

    let out = format!("{path}.qoi");
    std::fs::write(&out, qoif).with_context(|| format!("writing {out}"))?;
    log::info!(target: "qoic", "{path} -> {out}");
    Ok(())
}

fn log_init() {
    use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
    let _ = TermLogger::init(
        log::LevelFilter::Info,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}
