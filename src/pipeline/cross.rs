//! Cross layout pipeline: load, fit, compose, and optionally stylize.

use std::path::{Path, PathBuf};

use ::image::RgbaImage;

use crate::error::{Error, Result};
use crate::image;

use super::hologram::{stylize, HologramStyle};
use super::layout::CrossLayout;

/// Largest accepted canvas side in pixels.
pub const MAX_CANVAS_SIZE: u32 = 16_384;

/// Configuration for the cross layout pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Side of the square canvas in pixels.
    pub canvas_size: u32,

    /// Side of the central blank square in pixels.
    pub blank_size: u32,

    /// Maximum width and height of the subject in pixels.
    pub subject_size: u32,

    /// Pixels each copy moves towards the centre. Negative moves it outward.
    pub inset: i32,

    /// Background gray level.
    pub background: u8,

    /// Look of the optional hologram output.
    pub style: HologramStyle,

    /// Output JPEG quality (1-100).
    pub output_quality: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas_size: 1170,
            blank_size: 400,
            subject_size: 300,
            inset: 50,
            background: 0,
            style: HologramStyle::default(),
            output_quality: 95,
        }
    }
}

impl Config {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any parameter is out of valid range.
    pub fn validate(&self) -> Result<()> {
        if self.canvas_size == 0 {
            return Err(Error::invalid("canvas_size", "must be greater than 0"));
        }

        if self.canvas_size > MAX_CANVAS_SIZE {
            return Err(Error::invalid(
                "canvas_size",
                format!("must be at most {MAX_CANVAS_SIZE}"),
            ));
        }

        if self.blank_size >= self.canvas_size {
            return Err(Error::invalid(
                "blank_size",
                format!("must be smaller than canvas_size ({})", self.canvas_size),
            ));
        }

        if self.subject_size == 0 {
            return Err(Error::invalid("subject_size", "must be greater than 0"));
        }

        if self.style.scan_step == 0 {
            return Err(Error::invalid("scan_step", "must be greater than 0"));
        }

        if !(0.0..=1.0).contains(&self.style.scan_strength) {
            return Err(Error::invalid(
                "scan_strength",
                "must be between 0.0 and 1.0",
            ));
        }

        if !(1..=100).contains(&self.output_quality) {
            return Err(Error::invalid("output_quality", "must be between 1 and 100"));
        }

        Ok(())
    }

    /// Canvas geometry described by this configuration.
    #[must_use]
    pub const fn layout(&self) -> CrossLayout {
        CrossLayout {
            canvas_size: self.canvas_size,
            blank_size: self.blank_size,
            inset: self.inset,
            background: self.background,
        }
    }
}

/// Files written by [`Pipeline::process`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outputs {
    pub cross: PathBuf,
    pub hologram: Option<PathBuf>,
}

/// Pipeline producing cross layouts from a single subject image.
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: Config,
}

impl Pipeline {
    /// Create a new pipeline with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        tracing::debug!("Initializing pipeline with config: {config:?}");

        Ok(Self { config })
    }

    /// The validated configuration.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Fit an in-memory subject and compose the cross around it.
    #[must_use]
    pub fn compose(&self, subject: &RgbaImage) -> RgbaImage {
        let subject = image::fit_within(subject, self.config.subject_size);
        tracing::info!(
            "Composing {}x{} canvas around {}x{} subject",
            self.config.canvas_size,
            self.config.canvas_size,
            subject.width(),
            subject.height()
        );

        self.config.layout().compose(&subject)
    }

    /// Load the subject at `input` and compose the cross layout.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be decoded.
    pub fn render<P: AsRef<Path>>(&self, input: P) -> Result<RgbaImage> {
        let input = input.as_ref();

        tracing::info!("Loading subject: {}", input.display());
        let subject = image::load_rgba(input)?;

        Ok(self.compose(&subject))
    }

    /// Apply the configured hologram style to a composed cross.
    #[must_use]
    pub fn hologram(&self, cross: &RgbaImage) -> RgbaImage {
        tracing::info!("Rendering hologram style");
        stylize(cross, &self.config.style)
    }

    /// Render `input` to `output`, and the stylized variant to `hologram`
    /// when given.
    ///
    /// The hologram is only attempted once the base layout is written.
    ///
    /// # Errors
    ///
    /// Returns an error if decoding or either write fails.
    pub fn process<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input: P,
        output: Q,
        hologram: Option<&Path>,
    ) -> Result<Outputs> {
        let output = output.as_ref();

        let cross = self.render(input)?;

        tracing::info!("Saving cross layout to: {}", output.display());
        image::save_image(&cross, output, self.config.output_quality)?;
        tracing::info!("Saved cross layout: {}", output.display());

        let hologram = match hologram {
            Some(path) => {
                let holo = self.hologram(&cross);
                tracing::info!("Saving hologram to: {}", path.display());
                image::save_image(&holo, path, self.config.output_quality)?;
                Some(path.to_path_buf())
            }
            None => None,
        };

        tracing::info!("Processing complete");
        Ok(Outputs {
            cross: output.to_path_buf(),
            hologram,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::image::Rgba;

    fn white_square_png(dir: &Path) -> PathBuf {
        let path = dir.join("subject.png");
        RgbaImage::from_pixel(400, 400, Rgba([255, 255, 255, 255]))
            .save(&path)
            .unwrap();
        path
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let cases = [
            Config {
                canvas_size: 0,
                blank_size: 0,
                ..Config::default()
            },
            Config {
                canvas_size: MAX_CANVAS_SIZE + 1,
                ..Config::default()
            },
            Config {
                blank_size: 1170,
                ..Config::default()
            },
            Config {
                subject_size: 0,
                ..Config::default()
            },
            Config {
                output_quality: 0,
                ..Config::default()
            },
            Config {
                style: HologramStyle {
                    scan_step: 0,
                    ..HologramStyle::default()
                },
                ..Config::default()
            },
            Config {
                style: HologramStyle {
                    scan_strength: 1.5,
                    ..HologramStyle::default()
                },
                ..Config::default()
            },
        ];

        for config in cases {
            assert!(
                matches!(config.validate(), Err(Error::InvalidParameter { .. })),
                "{config:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_blank_error_names_parameter() {
        let err = Pipeline::new(Config {
            blank_size: 2000,
            ..Config::default()
        })
        .unwrap_err();

        assert!(err.to_string().contains("blank_size"));
    }

    #[test]
    fn test_white_square_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let input = white_square_png(dir.path());
        let output = dir.path().join("cross.png");
        let pipeline = Pipeline::new(Config::default()).unwrap();

        let outputs = pipeline.process(&input, &output, None).unwrap();
        assert_eq!(outputs.cross, output);
        assert_eq!(outputs.hologram, None);

        let cross = ::image::open(&output).unwrap().into_rgba8();
        assert_eq!(cross.dimensions(), (1170, 1170));

        let black = Rgba([0, 0, 0, 255]);
        let placements = pipeline.config().layout().placements((300, 300));
        let in_subject = |x: u32, y: u32| {
            placements.iter().any(|p| {
                let (x, y) = (i64::from(x), i64::from(y));
                (p.x..p.x + i64::from(p.width)).contains(&x)
                    && (p.y..p.y + i64::from(p.height)).contains(&y)
            })
        };

        for (x, y, pixel) in cross.enumerate_pixels() {
            let in_blank = (385..=785).contains(&x) && (385..=785).contains(&y);
            if in_blank || !in_subject(x, y) {
                assert_eq!(*pixel, black, "expected background at ({x}, {y})");
            }
        }

        // One sample well inside each arm
        for (x, y) in [(585, 200), (900, 585), (585, 900), (200, 585)] {
            assert!(cross.get_pixel(x, y)[0] > 250, "expected subject at ({x}, {y})");
        }
    }

    #[test]
    fn test_hologram_written_alongside() {
        let dir = tempfile::tempdir().unwrap();
        let input = white_square_png(dir.path());
        let output = dir.path().join("cross.png");
        let holo = dir.path().join("holo.png");
        let pipeline = Pipeline::new(Config::default()).unwrap();

        let outputs = pipeline
            .process(&input, &output, Some(holo.as_path()))
            .unwrap();
        assert_eq!(outputs.hologram, Some(holo.clone()));

        let cross = ::image::open(&output).unwrap().into_rgba8();
        let styled = ::image::open(&holo).unwrap().into_rgba8();
        assert_eq!(styled, pipeline.hologram(&cross));
    }

    #[test]
    fn test_output_is_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        let input = white_square_png(dir.path());
        let first = dir.path().join("a.png");
        let second = dir.path().join("b.png");
        let pipeline = Pipeline::new(Config::default()).unwrap();

        pipeline.process(&input, &first, None).unwrap();
        pipeline.process(&input, &second, None).unwrap();

        assert_eq!(
            std::fs::read(&first).unwrap(),
            std::fs::read(&second).unwrap()
        );
    }

    #[test]
    fn test_small_subject_is_not_upscaled() {
        let pipeline = Pipeline::new(Config {
            canvas_size: 400,
            blank_size: 100,
            subject_size: 300,
            inset: -5,
            ..Config::default()
        })
        .unwrap();
        let subject = RgbaImage::from_pixel(20, 10, Rgba([255, 255, 255, 255]));

        let cross = pipeline.compose(&subject);
        let white = cross.pixels().filter(|p| p[0] == 255).count();

        assert_eq!(white, 4 * 20 * 10);
    }

    #[test]
    fn test_missing_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("cross.png");
        let holo = dir.path().join("holo.png");
        let pipeline = Pipeline::new(Config::default()).unwrap();

        let err = pipeline
            .process(dir.path().join("missing.png"), &output, Some(holo.as_path()))
            .unwrap_err();

        assert!(matches!(err, Error::Decode { .. }));
        assert!(!output.exists());
        assert!(!holo.exists());
    }

    #[test]
    fn test_failed_cross_skips_hologram() {
        let dir = tempfile::tempdir().unwrap();
        let input = white_square_png(dir.path());
        let output = dir.path().join("missing-dir").join("cross.png");
        let holo = dir.path().join("holo.png");
        let pipeline = Pipeline::new(Config::default()).unwrap();

        let err = pipeline
            .process(&input, &output, Some(holo.as_path()))
            .unwrap_err();

        assert!(matches!(err, Error::Encode { .. }));
        assert!(!holo.exists());
    }
}
