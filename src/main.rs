use {
  circle_mosaic::{
    config::Config,
    driver::{Discard, Driver, PreviewSink, TracingLog},
    drawing::{ImageFile, PreviewDir},
    error::Result
  },
  anyhow::Context,
  clap::Parser,
  std::path::PathBuf,
  tracing_subscriber::EnvFilter
};

/// Packs a square canvas with non-overlapping, radius-shaded disks.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
  /// TOML file with run parameters; command line flags take precedence
  #[arg(long)]
  config: Option<PathBuf>,
  #[arg(long)]
  seed: Option<u64>,
  /// Canvas side length, in cells
  #[arg(long)]
  field_size: Option<u32>,
  #[arg(long)]
  max_radius: Option<u32>,
  /// Stop once the free area drops to this percentage
  #[arg(long)]
  stop_percent: Option<f64>,
  /// Final image, format picked by extension
  #[arg(long)]
  output: Option<PathBuf>,
  /// Directory receiving preview thumbnails
  #[arg(long)]
  previews: Option<PathBuf>,
  #[arg(long)]
  no_previews: bool,
  /// Also dump the placed circles as JSON
  #[arg(long)]
  circles: Option<PathBuf>,
  /// Open the final image once written
  #[arg(long)]
  open: bool,
  /// -v for debug, -vv for trace output
  #[arg(short, long, action = clap::ArgAction::Count)]
  verbose: u8
}

impl Args {
  fn config(&self) -> Result<Config> {
    let mut config = match &self.config {
      Some(path) => Config::from_toml_file(path)?,
      None => Config::default()
    };
    if let Some(seed) = self.seed { config.seed = seed; }
    if let Some(size) = self.field_size { config.field_size = size; }
    if let Some(radius) = self.max_radius { config.max_radius = radius; }
    if let Some(percent) = self.stop_percent { config.stop_percent = percent; }
    if let Some(output) = &self.output { config.output = output.clone(); }
    if let Some(dir) = &self.previews { config.preview_dir = dir.clone(); }
    if self.no_previews { config.preview_interval = 0; }
    config.validate()?;
    Ok(config)
  }
}

fn main() -> Result<()> {
  let args = Args::parse();

  let level = match args.verbose {
    0 => tracing::Level::INFO,
    1 => tracing::Level::DEBUG,
    _ => tracing::Level::TRACE
  };
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
    .with_writer(std::io::stderr)
    .init();

  let config = args.config()?;
  tracing::info!(
    field_size = config.field_size,
    max_radius = config.max_radius,
    stop_percent = config.stop_percent,
    seed = config.seed,
    "starting"
  );

  let mut previews: Box<dyn PreviewSink> = if config.preview_interval == 0 {
    Box::new(Discard)
  } else {
    Box::new(PreviewDir {
      dir: config.preview_dir.clone(),
      format: config.preview_format.clone(),
      channel: config.channel
    })
  };
  let mut raster = ImageFile { path: config.output.clone(), channel: config.channel };

  let mut driver = Driver::new(config)?;
  driver.run(&mut TracingLog, &mut *previews, &mut raster)?;

  if let Some(path) = &args.circles {
    driver.registry().write_json(path)?;
    tracing::info!(path = %path.display(), circles = driver.registry().len(), "circles written");
  }
  if args.open {
    open::that(&raster.path)
      .with_context(|| format!("failed to open {}", raster.path.display()))?;
  }
  Ok(())
}
