use {
    anyhow::{Context, Result as Anyhow},
    camino::Utf8PathBuf,
};

fn main() -> Anyhow<()> {
    log_init();

    let path: Utf8PathBuf = std::env::args().nth(1)
        .context("usage: qoid <file.qoi>")?
        .into();
    let qoif = std::fs::read(&path).with_context(|| format!("reading {path}"))?;
    let (header, pixels) = qoi::decode_file(&qoif)
        .with_context(|| format!("decoding {path}"))?;

    let image = image::RgbaImage::from_vec(
        header.wide,
        header.high,
        bytemuck::cast_vec(pixels),
    ).context("decoded pixel count does not match the header")?;

    let out = format!("{path}.png");
    image.save(&out).with_context(|| format!("writing {out}"))?;
    log::info!(target: "qoid", "{path} -> {out}");
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
