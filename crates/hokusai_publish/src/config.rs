//! Publisher configuration.

use hokusai_error::{HokusaiResult, PublishError, PublishErrorKind};

/// Default Feishu open-API host.
pub const DEFAULT_BASE_URL: &str = "https://open.feishu.cn";

fn require_env(name: &'static str) -> HokusaiResult<String> {
    std::env::var(name).map_err(|e| {
        PublishError::new(PublishErrorKind::InvalidConfiguration(format!(
            "{} not set: {}",
            name, e
        )))
        .into()
    })
}

/// Credentials and addressing for the bitable destination.
///
/// # Examples
///
/// ```
/// use hokusai_publish::FeishuConfigBuilder;
///
/// let config = FeishuConfigBuilder::default()
///     .app_id("cli_xxx")
///     .app_secret("secret")
///     .app_token("bascnXXX")
///     .table_id("tblXXX")
///     .build()
///     .unwrap();
/// assert_eq!(config.base_url(), "https://open.feishu.cn");
/// ```
#[derive(Debug, Clone, derive_getters::Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct FeishuConfig {
    /// Application id used for tenant authentication
    app_id: String,
    /// Application secret used for tenant authentication
    app_secret: String,
    /// Token of the bitable app holding the table
    app_token: String,
    /// Identifier of the destination table
    table_id: String,
    /// API host
    #[builder(default = "DEFAULT_BASE_URL.to_string()")]
    base_url: String,
}

impl FeishuConfig {
    /// Read the configuration from `FEISHU_APP_ID`, `FEISHU_APP_SECRET`,
    /// `FEISHU_APP_TOKEN`, and `FEISHU_TABLE_ID`.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first missing variable.
    pub fn from_env() -> HokusaiResult<Self> {
        Ok(Self {
            app_id: require_env("FEISHU_APP_ID")?,
            app_secret: require_env("FEISHU_APP_SECRET")?,
            app_token: require_env("FEISHU_APP_TOKEN")?,
            table_id: require_env("FEISHU_TABLE_ID")?,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }
}
