//! Layered configuration.
//!
//! Sources, later ones winning:
//! 1. Bundled defaults (include_str! from delulu.toml)
//! 2. `~/.config/delulu/delulu.toml`
//! 3. `./delulu.toml`
//! 4. An explicit `--config` file, if given
//! 5. `DELULU__SECTION__KEY` environment variables
//! 6. The deployment's legacy variables (`GEMINI_MODEL`, `FREE_API_KEY`, ...)

use config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use delulu_error::{ConfigError, DeluluError, DeluluResult, GenerationError, GenerationErrorKind};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../../../delulu.toml");

/// Legacy variable names and the keys they override.
const LEGACY_ENV: &[(&str, &str)] = &[
    ("GEMINI_MODEL", "models.text_model"),
    ("IMAGEN_MODEL", "models.image_model"),
    ("FREE_MODE", "models.free_mode"),
    ("FREE_API_KEY", "models.free_api_key"),
    ("PAID_API_KEY", "models.paid_api_key"),
    ("GCS_BUCKET_NAME", "cache.bucket"),
    ("GCS_FOLDER_NAME", "cache.folder"),
    ("GCS_ACCESS_TOKEN", "cache.access_token"),
    ("PORT", "server.port"),
];

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Interface to bind
    pub host: String,
    /// Port to bind
    pub port: u16,
    /// Largest accepted request body, uploads included
    pub body_limit_bytes: usize,
}

/// Text and image model settings.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelSettings {
    /// Gemini model for story and character text
    pub text_model: String,
    /// Imagen model for scene images
    pub image_model: String,
    /// Use the free-tier key instead of the paid one
    pub free_mode: bool,
    /// Free-tier API key
    #[serde(default)]
    pub free_api_key: Option<String>,
    /// Paid API key
    #[serde(default)]
    pub paid_api_key: Option<String>,
    /// Generative Language API base URL
    pub api_base: String,
    /// Per-call timeout
    pub timeout_secs: u64,
    /// Aspect ratio of scene images
    pub aspect_ratio: String,
}

impl std::fmt::Debug for ModelSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelSettings")
            .field("text_model", &self.text_model)
            .field("image_model", &self.image_model)
            .field("free_mode", &self.free_mode)
            .field("free_api_key", &self.free_api_key.as_ref().map(|_| "<redacted>"))
            .field("paid_api_key", &self.paid_api_key.as_ref().map(|_| "<redacted>"))
            .field("api_base", &self.api_base)
            .field("timeout_secs", &self.timeout_secs)
            .field("aspect_ratio", &self.aspect_ratio)
            .finish()
    }
}

impl ModelSettings {
    /// Billing mode name, as used in logs and errors.
    pub fn mode(&self) -> &'static str {
        if self.free_mode { "free" } else { "paid" }
    }

    /// The API key for the selected billing mode.
    ///
    /// # Errors
    ///
    /// `MissingApiKey` when the selected key is absent or blank.
    ///
    /// # Examples
    ///
    /// ```
    /// use delulu_server::DeluluConfig;
    ///
    /// let mut config = DeluluConfig::bundled().unwrap();
    /// config.models.free_mode = true;
    /// config.models.free_api_key = Some("free-key".to_string());
    /// assert_eq!(config.models.selected_api_key().unwrap(), "free-key");
    ///
    /// config.models.free_mode = false;
    /// assert!(config.models.selected_api_key().is_err());
    /// ```
    pub fn selected_api_key(&self) -> Result<&str, GenerationError> {
        let key = if self.free_mode {
            self.free_api_key.as_deref()
        } else {
            self.paid_api_key.as_deref()
        };
        key.filter(|k| !k.trim().is_empty()).ok_or_else(|| {
            GenerationError::new(GenerationErrorKind::MissingApiKey(self.mode().to_string()))
        })
    }
}

/// Which image cache implementation to run.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CacheBackend {
    /// Google Cloud Storage bucket
    Gcs,
    /// Local directory served under `/cache`
    Filesystem,
    /// Process memory
    Memory,
}

/// Image cache settings.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheSettings {
    /// Backend to use
    pub backend: CacheBackend,
    /// Object name prefix
    pub folder: String,
    /// GCS bucket, required for the `gcs` backend
    #[serde(default)]
    pub bucket: Option<String>,
    /// GCS bearer token
    #[serde(default)]
    pub access_token: Option<String>,
    /// GCS JSON API base URL override
    #[serde(default)]
    pub api_base: Option<String>,
    /// Directory of the `filesystem` backend
    pub root: PathBuf,
    /// Public URL prefix of the `filesystem` backend; derived from the
    /// listener address when unset
    #[serde(default)]
    pub public_base_url: Option<String>,
    /// Per-call timeout
    pub timeout_secs: u64,
}

impl std::fmt::Debug for CacheSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CacheSettings")
            .field("backend", &self.backend)
            .field("folder", &self.folder)
            .field("bucket", &self.bucket)
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .field("api_base", &self.api_base)
            .field("root", &self.root)
            .field("public_base_url", &self.public_base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Top-level Delulu configuration.
///
/// # Example
///
/// ```no_run
/// use delulu_server::DeluluConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = DeluluConfig::load(None)?;
/// println!("Listening on port {}", config.server.port);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeluluConfig {
    /// HTTP listener
    pub server: ServerSettings,
    /// Model providers
    pub models: ModelSettings,
    /// Scene image cache
    pub cache: CacheSettings,
}

/// A configuration file layered over the defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    path: PathBuf,
    required: bool,
}

impl ConfigFile {
    /// A file that is skipped when absent.
    pub fn optional(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            required: false,
        }
    }

    /// A file that must exist.
    pub fn required(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            required: true,
        }
    }
}

fn config_error(context: &str, e: impl std::fmt::Display) -> DeluluError {
    DeluluError::from(ConfigError::new(format!("{}: {}", context, e)))
}

impl DeluluConfig {
    /// URL prefix the `filesystem` backend hands out for cached images.
    ///
    /// An explicit `cache.public_base_url` wins. Otherwise the URL points at
    /// this server's `/cache` mount, so it follows `server.port` overrides.
    /// Wildcard bind addresses are reported as `localhost`.
    ///
    /// # Examples
    ///
    /// ```
    /// use delulu_server::DeluluConfig;
    ///
    /// let mut config = DeluluConfig::bundled().unwrap();
    /// config.server.port = 8080;
    /// assert_eq!(config.cache_public_base_url(), "http://localhost:8080/cache");
    ///
    /// config.cache.public_base_url = Some("https://img.example.com/".to_string());
    /// assert_eq!(config.cache_public_base_url(), "https://img.example.com");
    /// ```
    pub fn cache_public_base_url(&self) -> String {
        if let Some(url) = self
            .cache
            .public_base_url
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
        {
            return url.trim_end_matches('/').to_string();
        }

        let host = match self.server.host.trim() {
            "" | "0.0.0.0" | "::" | "[::]" => "localhost".to_string(),
            h if h.contains(':') && !h.starts_with('[') => format!("[{}]", h),
            h => h.to_string(),
        };
        format!("http://{}:{}/cache", host, self.server.port)
    }

    /// The bundled defaults alone.
    pub fn bundled() -> DeluluResult<Self> {
        Self::finish(Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml)))
    }

    /// Load from every source, reading `.env` and the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be parsed, a required file is
    /// missing, or the merged result fails validation.
    #[instrument(skip(explicit), fields(explicit = ?explicit))]
    pub fn load(explicit: Option<&Path>) -> DeluluResult<Self> {
        match dotenvy::dotenv() {
            Ok(path) => debug!(path = %path.display(), "Loaded .env file"),
            Err(e) => debug!(error = %e, "No .env file loaded"),
        }

        let mut files = Vec::new();
        if let Some(home) = dirs::home_dir() {
            files.push(ConfigFile::optional(home.join(".config/delulu/delulu.toml")));
        }
        files.push(ConfigFile::optional("delulu.toml"));
        if let Some(path) = explicit {
            files.push(ConfigFile::required(path));
        }

        let env: HashMap<String, String> = std::env::vars().collect();
        Self::load_from(&files, &env)
    }

    /// Load from the given files and environment map, over the bundled defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use delulu_server::DeluluConfig;
    /// use std::collections::HashMap;
    ///
    /// let env = HashMap::from([
    ///     ("PORT".to_string(), "9000".to_string()),
    ///     ("DELULU__CACHE__FOLDER".to_string(), "tales".to_string()),
    /// ]);
    /// let config = DeluluConfig::load_from(&[], &env).unwrap();
    /// assert_eq!(config.server.port, 9000);
    /// assert_eq!(config.cache.folder, "tales");
    /// ```
    pub fn load_from(files: &[ConfigFile], env: &HashMap<String, String>) -> DeluluResult<Self> {
        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        for file in files {
            debug!(path = %file.path.display(), required = file.required, "Adding config file");
            builder = builder.add_source(File::from(file.path.as_path()).required(file.required));
        }

        builder = builder.add_source(
            Environment::with_prefix("DELULU")
                .separator("__")
                .try_parsing(true)
                .source(Some(env.clone().into_iter().collect())),
        );

        for (var, key) in LEGACY_ENV {
            if let Some(value) = env.get(*var).filter(|v| !v.is_empty()) {
                debug!(var, key, "Applying legacy environment override");
                builder = builder
                    .set_override(*key, value.as_str())
                    .map_err(|e| config_error(var, e))?;
            }
        }

        Self::finish(builder)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> DeluluResult<Self> {
        let config: Self = builder
            .build()
            .map_err(|e| config_error("Failed to build configuration", e))?
            .try_deserialize()
            .map_err(|e| config_error("Failed to parse configuration", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that deserialization cannot.
    ///
    /// API keys are checked later, when the clients are built.
    pub fn validate(&self) -> DeluluResult<()> {
        if self.server.body_limit_bytes == 0 {
            return Err(ConfigError::new("server.body_limit_bytes must be positive").into());
        }
        if self.models.timeout_secs == 0 || self.cache.timeout_secs == 0 {
            return Err(ConfigError::new("timeouts must be at least one second").into());
        }
        if self.cache.backend == CacheBackend::Gcs
            && self.cache.bucket.as_deref().is_none_or(|b| b.trim().is_empty())
        {
            return Err(ConfigError::new("cache.bucket is required for the gcs backend").into());
        }
        Ok(())
    }
}
