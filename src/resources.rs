use log::{debug, warn};
use std::env;
use std::path::{Path, PathBuf};

pub fn resource_path(relative: &Path) -> PathBuf {
    let base = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));
    base.join(relative)
}

/// Looks for an optional bundled file next to the executable, then relative
/// to the working directory. Missing resources are not an error.
pub fn find_resource(relative: &Path) -> Option<PathBuf> {
    locate(relative, &[resource_path(relative), relative.to_path_buf()])
}

fn locate(relative: &Path, candidates: &[PathBuf]) -> Option<PathBuf> {
    let found = candidates.iter().find(|p| p.is_file()).cloned();
    if found.is_none() {
        debug!("optional resource {} not found", relative.display());
    }
    found
}

/// Decodes an icon file into the RGBA form the window expects.
pub fn load_icon(path: &Path) -> Option<egui::IconData> {
    let image = match image::open(path) {
        Ok(image) => image.into_rgba8(),
        Err(err) => {
            warn!("could not load icon {}: {err}", path.display());
            return None;
        }
    };
    Some(egui::IconData {
        width: image.width(),
        height: image.height(),
        rgba: image.into_raw(),
    })
}

pub fn window_icon(relative: &Path) -> Option<egui::IconData> {
    find_resource(relative).and_then(|path| load_icon(&path))
}
