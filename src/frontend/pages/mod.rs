pub mod article;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Home,
    Article(String),
}

impl Page {
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Article(id) => format!("/article/{id}"),
        }
    }
}
