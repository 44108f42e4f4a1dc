use std::{
    env,
    path::{Path, PathBuf},
};

/// Base directory for assets. Resolution order is `LEAFY2D_ASSET_ROOT`,
/// `CARGO_MANIFEST_DIR`, the executable directory, then the working
/// directory.
pub(crate) fn get_base_path() -> PathBuf {
    if let Ok(dir) = env::var("LEAFY2D_ASSET_ROOT") {
        PathBuf::from(dir)
    } else if let Ok(dir) = env::var("CARGO_MANIFEST_DIR") {
        PathBuf::from(dir)
    } else {
        env::current_exe()
            .ok()
            .and_then(|path| path.parent().map(ToOwned::to_owned))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Loaded resource handle
pub trait Resource {
    /// False for the backend's "failed" handle
    fn is_loaded(&self) -> bool;
}

/// Resource loading supplied by the host backend.
/// Loaders return a failed handle instead of an error.
pub trait Loader {
    type Texture: Resource;
    type Font: Resource;
    type Sound: Resource;
    type Music: Resource;

    fn load_texture(&mut self, path: &Path) -> Self::Texture;
    fn load_font(&mut self, path: &Path) -> Self::Font;
    fn load_sound(&mut self, path: &Path) -> Self::Sound;
    fn load_music(&mut self, path: &Path) -> Self::Music;
}

/// Resolves asset paths and logs every load
pub struct AssetRoot {
    root_path: PathBuf,
}

impl Default for AssetRoot {
    fn default() -> Self {
        Self::new("")
    }
}

impl AssetRoot {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let root_path = get_base_path().join(path);
        Self { root_path }
    }

    /// Use `path` as is, without the base directory lookup
    pub fn with_root<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            root_path: path.into(),
        }
    }

    pub fn root_path(&self) -> &PathBuf {
        &self.root_path
    }

    pub fn get_full_path<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        self.root_path.join(path)
    }

    pub fn load_texture<L: Loader, P: AsRef<Path>>(&self, loader: &mut L, path: P) -> L::Texture {
        let path = self.get_full_path(path);
        report("texture", &path, loader.load_texture(&path))
    }

    pub fn load_font<L: Loader, P: AsRef<Path>>(&self, loader: &mut L, path: P) -> L::Font {
        let path = self.get_full_path(path);
        report("font", &path, loader.load_font(&path))
    }

    pub fn load_sound<L: Loader, P: AsRef<Path>>(&self, loader: &mut L, path: P) -> L::Sound {
        let path = self.get_full_path(path);
        report("sound", &path, loader.load_sound(&path))
    }

    pub fn load_music<L: Loader, P: AsRef<Path>>(&self, loader: &mut L, path: P) -> L::Music {
        let path = self.get_full_path(path);
        report("music", &path, loader.load_music(&path))
    }
}

fn report<R: Resource>(kind: &str, path: &Path, res: R) -> R {
    if res.is_loaded() {
        log::info!("Loaded {kind}: {}", path.display());
    } else {
        log::error!("Failed to load {kind}: {}", path.display());
    }
    res
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct FakeHandle(u32);

    impl Resource for FakeHandle {
        fn is_loaded(&self) -> bool {
            self.0 != 0
        }
    }

    /// Loads anything whose file name starts with "ok"
    #[derive(Default)]
    struct FakeLoader {
        requested: Vec<PathBuf>,
    }

    impl FakeLoader {
        fn load(&mut self, path: &Path) -> FakeHandle {
            self.requested.push(path.to_owned());
            let ok = path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with("ok"));
            FakeHandle(if ok { self.requested.len() as u32 } else { 0 })
        }
    }

    impl Loader for FakeLoader {
        type Texture = FakeHandle;
        type Font = FakeHandle;
        type Sound = FakeHandle;
        type Music = FakeHandle;

        fn load_texture(&mut self, path: &Path) -> FakeHandle {
            self.load(path)
        }
        fn load_font(&mut self, path: &Path) -> FakeHandle {
            self.load(path)
        }
        fn load_sound(&mut self, path: &Path) -> FakeHandle {
            self.load(path)
        }
        fn load_music(&mut self, path: &Path) -> FakeHandle {
            self.load(path)
        }
    }

    #[test]
    fn test_load_resolves_against_root() {
        let root = AssetRoot::with_root("assets");
        let mut loader = FakeLoader::default();
        let tex = root.load_texture(&mut loader, "ok_player.png");
        assert!(tex.is_loaded());
        assert_eq!(loader.requested, vec![PathBuf::from("assets/ok_player.png")]);
    }

    #[test]
    fn test_failed_load_returns_failed_handle() {
        let _ = env_logger::builder().is_test(true).try_init();
        let root = AssetRoot::with_root("assets");
        let mut loader = FakeLoader::default();
        assert_eq!(root.load_font(&mut loader, "missing.ttf"), FakeHandle(0));
        assert!(!root.load_sound(&mut loader, "missing.wav").is_loaded());
        assert!(root.load_music(&mut loader, "ok_theme.ogg").is_loaded());
        assert_eq!(loader.requested.len(), 3);
    }
}
