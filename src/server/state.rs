use crate::config::ServeConfig;

pub struct AppState {
    pub max_batch: usize,
}

impl From<&ServeConfig> for AppState {
    fn from(cfg: &ServeConfig) -> Self {
        Self { max_batch: cfg.max_batch }
    }
}
