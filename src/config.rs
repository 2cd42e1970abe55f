use std::path::PathBuf;

/// Compiled-in window settings. Nothing here is read from disk.
#[derive(Debug, Clone)]
pub struct Settings {
    pub title: String,
    pub window_size: [f32; 2],
    pub resizable: bool,
    pub icon: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: "ZIP to UDF".to_string(),
            window_size: [360.0, 240.0],
            resizable: false,
            icon: PathBuf::from("assets").join("zip_to_udf.ico"),
        }
    }
}
