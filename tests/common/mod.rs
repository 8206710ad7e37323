#![allow(dead_code)]

pub mod bin;

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
    sync::Once,
};

use runtime::object::loader::ClassLoader;
use tempfile::TempDir;
use tracing::Level;
use tracing_subscriber::fmt;
use zip::{write::FileOptions, ZipWriter};

/// Just enough of a classfile for the loader to accept it (Java 8).
pub const CLASS_BYTES: [u8; 8] = [0xCA, 0xFE, 0xBA, 0xBE, 0x00, 0x00, 0x00, 0x34];

static LOGGING: Once = Once::new();

pub fn init_logging() {
    LOGGING.call_once(|| {
        let format = fmt::format()
            .with_ansi(false)
            .without_time()
            .with_level(true)
            .with_target(false)
            .compact();

        tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .event_format(format)
            .with_test_writer()
            .init();
    });
}

fn class_file_name(binary_name: &str) -> String {
    format!("{}.class", binary_name.replace('.', "/"))
}

/// `file:/...` form of a path, as the loader reports it.
pub fn file_url(path: &Path) -> String {
    runtime::classpath::file_url(path).expect("fixture paths to be absolute")
}

/// A temporary directory holding class path entries.
pub struct ClassPathFixture {
    dir: TempDir,
}

impl ClassPathFixture {
    pub fn new() -> Self {
        init_logging();

        Self {
            dir: tempfile::tempdir().expect("tempdir to be created"),
        }
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    /// Write classfiles for `binary_names` under the directory `dir`, returning its path.
    pub fn classes_in_dir(&self, dir: &str, binary_names: &[&str]) -> PathBuf {
        let root = self.path(dir);

        for name in binary_names {
            let path = root.join(class_file_name(name));
            fs::create_dir_all(path.parent().expect("class path to have a parent"))
                .expect("package directories to be created");
            fs::write(path, CLASS_BYTES).expect("classfile to be written");
        }

        root
    }

    /// Write a jar at `jar` holding classfiles for `binary_names`, returning its path.
    pub fn classes_in_jar(&self, jar: &str, binary_names: &[&str]) -> PathBuf {
        let path = self.path(jar);
        fs::create_dir_all(path.parent().expect("jar to have a parent"))
            .expect("jar directory to be created");

        let file = File::create(&path).expect("jar to be created");
        let mut writer = ZipWriter::new(file);

        writer
            .add_directory("META-INF/", FileOptions::default())
            .expect("META-INF to be added");
        writer
            .start_file("META-INF/MANIFEST.MF", FileOptions::default())
            .expect("manifest to be started");
        writer
            .write_all(b"Manifest-Version: 1.0\r\n\r\n")
            .expect("manifest to be written");

        for name in binary_names {
            writer
                .start_file(class_file_name(name), FileOptions::default())
                .expect("class entry to be started");
            writer
                .write_all(&CLASS_BYTES)
                .expect("class entry to be written");
        }

        writer.finish().expect("jar to be finished");

        path
    }

    pub fn loader(&self, entries: &[&Path]) -> ClassLoader {
        let mut class_loader = ClassLoader::new();

        for entry in entries {
            class_loader.add_path(*entry);
        }

        class_loader
    }
}
