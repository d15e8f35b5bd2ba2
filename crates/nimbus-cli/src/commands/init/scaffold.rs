//! Project scaffolding from the example-files service.

use anyhow::{Context, Result};
use async_trait::async_trait;
use nimbus_core::term::Palette;
use nimbus_core::util::{did_you_mean, is_empty_dir, to_human_path};
use nimbus_core::APP_NAME;
use nimbus_services::archive;
use nimbus_types::{bail, exit, Example, ExampleVersion, NimbusError};
use std::fs;
use std::path::{Path, PathBuf};

use super::{InitArgv, Initializer};
use crate::client::Client;

/// Minimum similarity for suggesting an example on a typo.
const GUESS_THRESHOLD: f64 = 0.7;

/// Initializer that downloads an example and unpacks it into a folder.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExampleInitializer;

#[async_trait]
impl Initializer for ExampleInitializer {
    async fn init(&self, client: &Client, argv: &InitArgv, args: &[String]) -> Result<i32> {
        let name = args.first().map(String::as_str);
        let dir = args.get(1).map(String::as_str);
        let force = argv.force;

        let examples = fetch_example_list(client).await?;
        let choices: Vec<String> = examples
            .iter()
            .filter(|example| example.visible)
            .map(|example| example.name.clone())
            .collect();

        let Some(name) = name else {
            return match choose_example(client, &choices)? {
                Some(chosen) => {
                    extract_example(client, &chosen, dir, force, ExampleVersion::V2).await
                }
                None => {
                    client.output.log("Aborted");
                    Ok(exit::SUCCESS)
                }
            };
        };

        if choices.iter().any(|choice| choice == name) {
            return extract_example(client, name, dir, force, ExampleVersion::V2).await;
        }

        if is_hidden(&examples, name) {
            return extract_example(client, name, dir, force, ExampleVersion::V1).await;
        }

        match guess(client, &choices, name)? {
            Some(found) => extract_example(client, &found, dir, force, ExampleVersion::V2).await,
            None => {
                client.output.log("No changes made.");
                Ok(exit::SUCCESS)
            }
        }
    }
}

fn is_hidden(examples: &[Example], name: &str) -> bool {
    examples.iter().any(|example| !example.visible && example.name == name)
}

async fn fetch_example_list(client: &Client) -> Result<Vec<Example>> {
    client
        .output
        .debug(&format!("Fetching examples from {}", client.examples.base_url()));
    client.output.spinner("Fetching examples");
    let examples = client.examples.list().await;
    client.output.stop_spinner();
    Ok(examples?)
}

/// Let the user pick one of the visible examples.
fn choose_example(client: &Client, choices: &[String]) -> Result<Option<String>> {
    let palette = client.output.palette();

    if !client.stdin_is_tty {
        return Err(NimbusError::Usage(format!(
            "No example specified. Run {} to initialize a specific example.",
            palette.cmd(format!("{} init <example>", APP_NAME))
        ))
        .into());
    }

    if choices.is_empty() {
        return Err(NimbusError::Example("No examples are available.".to_string()).into());
    }

    let picked = client.prompt.select("Select example:", choices)?;
    Ok(picked.and_then(|index| choices.get(index).cloned()))
}

/// Suggest the closest example for a misspelled name.
///
/// `Ok(None)` means the user declined the suggestion.
fn guess(client: &Client, choices: &[String], name: &str) -> Result<Option<String>> {
    let palette = client.output.palette();
    let not_found = || {
        NimbusError::Example(format!(
            "No example found for {}, run {} to see the list of available examples.",
            palette.bold(name),
            palette.cmd(format!("{} init", APP_NAME))
        ))
    };

    if !client.stdout_is_tty {
        return Err(not_found().into());
    }

    let Some(found) = did_you_mean(name, choices, GUESS_THRESHOLD) else {
        return Err(not_found().into());
    };

    if client.prompt.confirm(&format!("Did you mean {}?", palette.bold(found)), true)? {
        Ok(Some(found.to_string()))
    } else {
        Ok(None)
    }
}

async fn extract_example(
    client: &Client,
    name: &str,
    dir: Option<&str>,
    force: bool,
    version: ExampleVersion,
) -> Result<i32> {
    let palette = client.output.palette();
    let folder = prepare_folder(&client.cwd, dir.unwrap_or(name), force, palette)?;

    client.output.spinner(&format!("Fetching {}", name));
    let bytes = client.examples.download(name, version).await;
    client.output.stop_spinner();
    let bytes = bytes?;

    archive::unpack(&bytes, &folder)
        .with_context(|| format!("Could not extract {} into {}", name, folder.display()))?;

    let relative = folder.strip_prefix(&client.cwd).unwrap_or(&folder);
    let hint = if relative.as_os_str().is_empty() {
        format!("To deploy, run {}.", palette.cmd(APP_NAME))
    } else {
        format!(
            "To deploy, {} and run {}.",
            palette.cmd(format!("cd {}", relative.display())),
            palette.cmd(APP_NAME)
        )
    };

    client.output.success(&format!(
        "Initialized \"{}\" example in {}.\n{} {}",
        palette.bold(name),
        palette.bold(to_human_path(&folder)),
        palette.gray("-"),
        hint
    ));

    Ok(exit::SUCCESS)
}

/// Make sure `folder` (relative to `cwd`) can receive an example.
///
/// An existing directory must be empty unless `force` is set; a missing
/// one is created. `.` stands for `cwd` itself.
pub fn prepare_folder(
    cwd: &Path,
    folder: &str,
    force: bool,
    palette: &Palette,
) -> nimbus_types::Result<PathBuf> {
    let dest: PathBuf = cwd.join(folder).components().collect();
    let shown = palette.bold(folder);

    match fs::symlink_metadata(&dest) {
        Ok(meta) => {
            if !meta.is_dir() {
                bail!(
                    Destination,
                    "Destination path \"{}\" already exists and is not a directory.",
                    shown
                );
            }
            if !force && !is_empty_dir(&dest)? {
                bail!(
                    Destination,
                    "Destination path \"{}\" already exists and is not an empty directory. \
                     You may use {} or {} to override it.",
                    shown,
                    palette.cmd("--force"),
                    palette.cmd("-f")
                );
            }
        }
        Err(_) if dest != cwd => {
            fs::create_dir(&dest).map_err(|e| {
                tracing::debug!("Creating {} failed: {}", dest.display(), e);
                NimbusError::Destination(format!("Could not create directory \"{}\".", shown))
            })?;
        }
        Err(_) => {}
    }

    Ok(dest)
}
