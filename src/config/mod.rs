use crate::models::SiteSettings;
use anyhow::{Context, Result, bail};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;

/// File name of the settings file inside the configuration directory
pub const SETTINGS_FILE_NAME: &str = "Slidekit Config.yaml";

/// Prefix of environment variables that override file settings
pub const ENV_PREFIX: &str = "SLIDEKIT";

/// Configuration manager for loading and saving the YAML settings file.
///
/// Settings come from `Slidekit Config.yaml`, overridden by environment
/// variables such as `SLIDEKIT__CAROUSEL__AUTOPLAY_INTERVAL_MS=8000`.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_dir: Utf8PathBuf,
    settings_path: Utf8PathBuf,
}

impl ConfigManager {
    /// Create a new ConfigManager with the specified configuration directory.
    ///
    /// The directory is created if it does not exist.
    pub fn new<P: AsRef<Utf8Path>>(config_dir: P) -> Result<Self> {
        let config_dir = config_dir.as_ref().to_path_buf();

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)
                .with_context(|| format!("Failed to create config directory: {}", config_dir))?;
        }

        Ok(Self {
            settings_path: config_dir.join(SETTINGS_FILE_NAME),
            config_dir,
        })
    }

    /// Load settings from the file alone.
    ///
    /// # Returns
    /// The loaded SiteSettings, or defaults if the file doesn't exist
    pub fn load_file_settings(&self) -> Result<SiteSettings> {
        if !self.settings_path.exists() {
            tracing::warn!(
                "Settings file not found at {}, using defaults",
                self.settings_path
            );
            return Ok(SiteSettings::default());
        }

        let file_contents = fs::read_to_string(&self.settings_path)
            .with_context(|| format!("Failed to read settings: {}", self.settings_path))?;

        let settings: SiteSettings = serde_yaml_ng::from_str(&file_contents)
            .with_context(|| format!("Failed to parse settings: {}", self.settings_path))?;

        Self::validate(&settings)?;

        tracing::info!("Loaded settings from {}", self.settings_path);
        Ok(settings)
    }

    /// Load settings with environment overrides layered over the file.
    pub fn load_settings(&self) -> Result<SiteSettings> {
        self.load_settings_with_env(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
    }

    /// Load settings with an explicit environment source.
    ///
    /// Tests pass a source built from a fixed map instead of the process
    /// environment.
    pub fn load_settings_with_env(&self, environment: config::Environment) -> Result<SiteSettings> {
        let settings: SiteSettings = config::Config::builder()
            .add_source(
                config::File::from(self.settings_path.as_std_path())
                    .format(config::FileFormat::Yaml)
                    .required(false),
            )
            .add_source(environment.try_parsing(true))
            .build()
            .with_context(|| format!("Failed to load settings: {}", self.settings_path))?
            .try_deserialize()
            .context("Failed to deserialize layered settings")?;

        Self::validate(&settings)?;

        tracing::info!(
            "Loaded settings: autoplay={}, interval={}ms, swipe_threshold={}px",
            settings.carousel.autoplay,
            settings.carousel.autoplay_interval_ms,
            settings.carousel.swipe_threshold_px
        );
        Ok(settings)
    }

    /// Save the settings file.
    pub fn save_settings(&self, settings: &SiteSettings) -> Result<()> {
        let yaml_string =
            serde_yaml_ng::to_string(settings).context("Failed to serialize settings to YAML")?;

        fs::write(&self.settings_path, yaml_string)
            .with_context(|| format!("Failed to write settings: {}", self.settings_path))?;

        tracing::info!("Saved settings to {}", self.settings_path);
        Ok(())
    }

    fn validate(settings: &SiteSettings) -> Result<()> {
        if settings.carousel.autoplay_interval_ms == 0 {
            bail!("carousel.autoplay_interval_ms must be greater than zero");
        }
        if !settings.carousel.swipe_threshold_px.is_finite()
            || settings.carousel.swipe_threshold_px < 0.0
        {
            bail!(
                "carousel.swipe_threshold_px must be a non-negative number, got {}",
                settings.carousel.swipe_threshold_px
            );
        }
        Ok(())
    }

    /// Get the configuration directory path.
    pub fn config_dir(&self) -> &Utf8Path {
        &self.config_dir
    }

    pub fn settings_path(&self) -> &Utf8Path {
        &self.settings_path
    }
}
