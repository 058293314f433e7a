#[cfg(test)]
pub mod test {
    use std::fs;
    use std::path::PathBuf;

    use tempfile::TempDir;

    /// A temp directory holding a family of `.env` files.
    pub struct EnvFiles {
        dir: TempDir,
    }

    impl EnvFiles {
        pub fn new() -> Self {
            Self {
                dir: TempDir::new().unwrap(),
            }
        }

        /// Path of the base `.env` file, whether or not it was written.
        pub fn base(&self) -> PathBuf {
            self.path(".env")
        }

        pub fn path(&self, name: &str) -> PathBuf {
            self.dir.path().join(name)
        }

        /// Write `content` to `name` inside the directory and return its path.
        pub fn write(&self, name: &str, content: &str) -> PathBuf {
            let path = self.path(name);
            fs::write(&path, content).unwrap();
            path
        }

        /// The three-file layering used across loader tests.
        pub fn with_dev_stack() -> Self {
            let files = Self::new();
            files.write(".env", "BASE_VAR=base_value\nSHARED=base\n");
            files.write(".env.dev", "DEV_VAR=dev_value\nSHARED=dev\n");
            files.write(".env.dev.local", "SHARED=devlocal\n");
            files
        }
    }

    #[test]
    fn dev_stack_writes_three_files() {
        let files = EnvFiles::with_dev_stack();
        assert!(files.base().exists());
        assert!(files.path(".env.dev").exists());
        assert!(files.path(".env.dev.local").exists());
        assert!(!files.path(".env.local").exists());
    }
}
