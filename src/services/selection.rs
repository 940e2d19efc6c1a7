use std::path::PathBuf;
use std::sync::Mutex;

/// The one piece of session state besides the model: the image the user
/// picked last. Overwritten on every pick, never persisted.
#[derive(Default)]
pub struct Selection {
    path: Mutex<Option<PathBuf>>,
}

impl Selection {
    pub fn set(&self, path: PathBuf) {
        *self.path.lock().unwrap() = Some(path);
    }

    pub fn get(&self) -> Option<PathBuf> {
        self.path.lock().unwrap().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty_and_keeps_the_latest_pick() {
        let selection = Selection::default();
        assert!(selection.get().is_none());

        selection.set(PathBuf::from("/pics/rex.jpg"));
        selection.set(PathBuf::from("/pics/whiskers.png"));
        assert_eq!(selection.get(), Some(PathBuf::from("/pics/whiskers.png")));
    }
}
