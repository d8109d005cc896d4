use {
  super::*,
  crate::{
    compositor,
    config::Config,
    driver::{Discard, Driver},
    geometry::Circle,
    solver::OccupancyGrid
  },
  image::{GenericImageView, Luma, Rgb},
  regex::Regex,
  walkdir::WalkDir
};

fn stamped() -> Canvas {
  let mut canvas = Canvas::new(5);
  let mut grid = OccupancyGrid::new(5);
  compositor::accept(&Circle::new(2, 2, 1), 77, &mut canvas, &mut grid);
  canvas
}

#[test] fn channels() -> Result<()> {
  let canvas = stamped();

  let blue = canvas.to_image(Channel::Blue)?.to_rgb8();
  assert_eq!(blue.dimensions(), (5, 5));
  assert_eq!(*blue.get_pixel(2, 2), Rgb([0, 0, 77]));
  assert_eq!(*blue.get_pixel(3, 2), Rgb([0, 0, 77]));
  assert_eq!(*blue.get_pixel(3, 3), Rgb([0, 0, 0]));

  let red = canvas.to_image(Channel::Red)?.to_rgb8();
  assert_eq!(*red.get_pixel(2, 1), Rgb([77, 0, 0]));

  let gray = canvas.to_image(Channel::Gray)?;
  assert_eq!(gray.color(), image::ColorType::L8);
  assert_eq!(*gray.to_luma8().get_pixel(2, 3), Luma([77]));
  Ok(())
}

#[test] fn png_round_trip() -> Result<()> {
  let dir = tempfile::tempdir()?;
  let path = dir.path().join("nested/canvas.png");
  let canvas = stamped();
  canvas.save(&path, Channel::Gray)?;

  let decoded = image::open(&path)?;
  assert_eq!(decoded.dimensions(), (5, 5));
  assert_eq!(decoded.to_luma8().into_raw(), canvas.pixels());
  Ok(())
}

#[test] fn run_writes_previews_and_raster() -> Result<()> {
  let dir = tempfile::tempdir()?;
  let config = Config {
    field_size: 60,
    max_radius: 8,
    first_radius_min: 4,
    log_interval: 0,
    preview_interval: 4,
    preview_stride: 10,
    seed: 1,
    ..Config::default()
  };
  let mut previews = PreviewDir {
    dir: dir.path().join("previews"),
    format: "png".into(),
    channel: Channel::Blue
  };
  let mut raster = ImageFile {
    path: dir.path().join("out/final.tiff"),
    channel: Channel::Blue
  };
  let mut driver = Driver::new(config)?;
  let report = driver.run(&mut Discard, &mut previews, &mut raster)?;

  let pattern = Regex::new(r"^thumb_(\d+)\.png$")?;
  let mut names: Vec<String> = WalkDir::new(&previews.dir)
    .min_depth(1)
    .into_iter()
    .filter_map(|entry| entry.ok())
    .map(|entry| entry.file_name().to_string_lossy().into_owned())
    .collect();
  names.sort_by(|a, b| lexical_sort::natural_lexical_cmp(a, b));

  let iterations = names.iter()
    .map(|name| -> Result<u64> {
      let captures = pattern.captures(name)
        .with_context(|| format!("unexpected preview {name}"))?;
      Ok(captures[1].parse::<u64>()?)
    })
    .collect::<Result<Vec<_>>>()?;
  let expected: Vec<_> = (1..=report.iterations / 4).map(|i| i * 4).collect();
  assert!(!expected.is_empty());
  assert_eq!(iterations, expected);

  let thumb = image::open(previews.path_for(expected[0]))?;
  assert_eq!(thumb.dimensions(), (6, 6));

  let final_image = image::open(&raster.path)?.to_rgb8();
  assert_eq!(final_image.dimensions(), (60, 60));
  let blue: Vec<u8> = final_image.pixels().map(|px| px.0[2]).collect();
  assert_eq!(blue, driver.canvas().pixels());
  assert!(final_image.pixels().all(|px| px.0[0] == 0 && px.0[1] == 0));
  Ok(())
}

#[test] fn unwritable_output_is_reported() -> Result<()> {
  let dir = tempfile::tempdir()?;
  let blocker = dir.path().join("blocker");
  std::fs::write(&blocker, b"not a directory")?;

  let mut raster = ImageFile {
    path: blocker.join("out.png"),
    channel: Channel::Gray
  };
  let err = raster.write(&stamped()).unwrap_err();
  assert!(format!("{err:#}").contains("failed to create"), "{err:#}");
  Ok(())
}
