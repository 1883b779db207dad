use crate::backend::error::BackendResult;
use config::Config;
use doku::Document;
use serde::Deserialize;
use smart_default::SmartDefault;

#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Document, SmartDefault)]
#[serde(default)]
#[serde(deny_unknown_fields)]
pub struct BlogConfig {
    /// Where the articles served under /blog are loaded from
    pub content: BlogConfigContent,
}

impl BlogConfig {
    pub fn read() -> BackendResult<Self> {
        let config = Config::builder()
            .add_source(config::File::with_name("config.toml").required(false))
            // Cant use _ as separator due to https://github.com/mehcode/config-rs/issues/391
            .add_source(config::Environment::with_prefix("BLOGVIEW").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Document, SmartDefault)]
#[serde(default)]
#[serde(deny_unknown_fields)]
pub struct BlogConfigContent {
    /// JSON file containing an array of articles, each with id, title, summary and text.
    /// Articles are listed in file order.
    #[default("content/articles.json")]
    #[doku(example = "content/articles.json")]
    pub articles_file: String,
}
