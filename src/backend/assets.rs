/// URLs of the CV documents served by the backend.
#[derive(Debug, Clone)]
pub struct CvAssets {
    base_url: String,
}

impl CvAssets {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Image of page `page` (1-based) of the CV.
    pub fn page_url(&self, page: u32) -> String {
        format!("{}/api/cv/page/{page}", self.base_url)
    }

    pub fn view_url(&self) -> String {
        format!("{}/api/cv/view", self.base_url)
    }

    pub fn download_url(&self) -> String {
        format!("{}/api/cv/download", self.base_url)
    }
}
