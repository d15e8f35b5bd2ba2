//! Test doubles for command handlers.

use async_trait::async_trait;
use flate2::write::GzEncoder;
use flate2::Compression;
use nimbus_core::term::Palette;
use nimbus_core::GlobalConfig;
use nimbus_types::{Example, ExampleSource, ExampleVersion, NimbusError, Result};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use crate::client::Client;
use crate::ui::{Output, Prompt};

/// In-memory writer that can be read back after being handed out.
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// What an [`Output`] built by [`captured_output`] printed.
#[derive(Clone, Default)]
pub struct Captured {
    stdout: SharedBuffer,
    stderr: SharedBuffer,
}

impl Captured {
    pub fn stdout(&self) -> String {
        self.stdout.text()
    }

    pub fn stderr(&self) -> String {
        self.stderr.text()
    }
}

/// Plain-text output writing into memory.
pub fn captured_output(debug: bool) -> (Output, Captured) {
    let captured = Captured::default();
    let output = Output::with_writers(
        Palette::plain(),
        debug,
        Box::new(captured.stdout.clone()),
        Box::new(captured.stderr.clone()),
    );
    (output, captured)
}

/// Example source serving canned tarballs and recording downloads.
#[derive(Default)]
pub struct FakeSource {
    examples: Vec<Example>,
    archives: HashMap<String, Vec<u8>>,
    fail_list: bool,
    downloads: Mutex<Vec<(String, ExampleVersion)>>,
}

impl FakeSource {
    pub fn new(examples: Vec<Example>) -> Self {
        Self {
            examples,
            ..Default::default()
        }
    }

    /// A source whose list endpoint always fails.
    pub fn failing() -> Self {
        Self {
            fail_list: true,
            ..Default::default()
        }
    }

    pub fn with_archive(mut self, name: &str, bytes: Vec<u8>) -> Self {
        self.archives.insert(name.to_string(), bytes);
        self
    }

    pub fn downloads(&self) -> Vec<(String, ExampleVersion)> {
        self.downloads.lock().clone()
    }
}

#[async_trait]
impl ExampleSource for FakeSource {
    async fn list(&self) -> Result<Vec<Example>> {
        if self.fail_list {
            return Err(NimbusError::Example("Could not fetch example list.".to_string()));
        }
        Ok(self.examples.clone())
    }

    async fn download(&self, name: &str, version: ExampleVersion) -> Result<Vec<u8>> {
        self.downloads.lock().push((name.to_string(), version));
        self.archives
            .get(name)
            .cloned()
            .ok_or_else(|| NimbusError::Example(format!("Could not get {}.tar.gz", name)))
    }

    fn base_url(&self) -> &str {
        "memory://examples/"
    }
}

/// Prompt with fixed answers that records every question.
#[derive(Default)]
pub struct ScriptedPrompt {
    selection: Option<usize>,
    confirmation: bool,
    asked: Mutex<Vec<String>>,
}

impl ScriptedPrompt {
    pub fn selecting(selection: Option<usize>) -> Self {
        Self {
            selection,
            ..Default::default()
        }
    }

    pub fn confirming(confirmation: bool) -> Self {
        Self {
            confirmation,
            ..Default::default()
        }
    }

    pub fn asked(&self) -> Vec<String> {
        self.asked.lock().clone()
    }
}

impl Prompt for ScriptedPrompt {
    fn select(&self, message: &str, items: &[String]) -> anyhow::Result<Option<usize>> {
        self.asked.lock().push(format!("{} {}", message, items.join(", ")));
        Ok(self.selection)
    }

    fn confirm(&self, message: &str, _default: bool) -> anyhow::Result<bool> {
        self.asked.lock().push(message.to_string());
        Ok(self.confirmation)
    }
}

/// Gzipped tarball holding `files` (path, contents).
pub fn tarball(files: &[(&str, &str)]) -> Vec<u8> {
    let encoder = GzEncoder::new(Vec::new(), Compression::default());
    let mut builder = tar::Builder::new(encoder);
    for (path, contents) in files {
        let mut header = tar::Header::new_gnu();
        header.set_size(contents.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        builder.append_data(&mut header, path, contents.as_bytes()).unwrap();
    }
    builder.into_inner().unwrap().finish().unwrap()
}

/// Client running in `cwd` with in-memory output.
///
/// `tty` sets both stdin and stdout terminal detection.
pub fn test_client(
    argv: &[&str],
    cwd: &Path,
    examples: Arc<dyn ExampleSource>,
    prompt: Arc<dyn Prompt>,
    tty: bool,
) -> (Client, Captured) {
    let (output, captured) = captured_output(false);
    let client = Client {
        argv: argv.iter().map(|arg| arg.to_string()).collect(),
        cwd: cwd.to_path_buf(),
        output,
        config: GlobalConfig::default(),
        examples,
        prompt,
        stdin_is_tty: tty,
        stdout_is_tty: tty,
    };
    (client, captured)
}
