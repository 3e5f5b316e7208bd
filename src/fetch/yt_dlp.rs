use anyhow::Context;
use async_trait::async_trait;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::{debug, info, warn};
use which::which;

use super::{FetchError, SubtitleFetcher};
use crate::config::FetchConfig;
use crate::subtitle::SubtitleFormat;

const DEFAULT_COMMAND: &str = "yt-dlp";
/// File stem yt-dlp is told to write; it appends `.<lang>.<ext>`.
const OUTPUT_STEM: &str = "transcript";

/// Fetches subtitles by running yt-dlp with downloads of the media itself disabled.
pub struct YtDlpFetcher {
    command: PathBuf,
    language: String,
    download_format: String,
    format: SubtitleFormat,
    no_playlist: bool,
    timeout: Option<Duration>,
}

impl YtDlpFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        let command = resolve_command(config.command_path.as_deref())?;
        info!("Using yt-dlp at {:?}", command);

        let timeout =
            (config.timeout_seconds > 0).then(|| Duration::from_secs(config.timeout_seconds));

        Ok(Self {
            command,
            language: config.language.clone(),
            download_format: config.download_format.clone(),
            format: config.format,
            no_playlist: config.no_playlist,
            timeout,
        })
    }

    pub fn command(&self) -> &Path {
        &self.command
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Arguments for a subtitle-only download of `url` into `scratch`.
    pub fn build_args(&self, url: &str, scratch: &Path) -> Vec<OsString> {
        let template = scratch.join(format!("{}.%(ext)s", OUTPUT_STEM));

        let mut args: Vec<OsString> = [
            "--skip-download",
            "--write-subs",
            "--write-auto-subs",
            "--sub-lang",
            self.language.as_str(),
            "--sub-format",
            self.download_format.as_str(),
            "--convert-subs",
            self.format.extension(),
        ]
        .into_iter()
        .map(OsString::from)
        .collect();

        if self.no_playlist {
            args.push("--no-playlist".into());
        }
        args.push("--output".into());
        args.push(template.into_os_string());
        // Keeps a URL starting with '-' from being read as an option
        args.push("--".into());
        args.push(url.into());

        args
    }

    /// Report the downloader's version string.
    pub async fn version(&self) -> anyhow::Result<String> {
        let output = Command::new(&self.command)
            .arg("--version")
            .stdin(Stdio::null())
            .output()
            .await
            .with_context(|| format!("Failed to execute {:?}", self.command))?;

        if !output.status.success() {
            anyhow::bail!(
                "{:?} --version exited with {}",
                self.command,
                output.status
            );
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    async fn locate_output(&self, scratch: &Path) -> Option<PathBuf> {
        let ext = self.format.extension();
        let expected = scratch.join(format!("{}.{}.{}", OUTPUT_STEM, self.language, ext));
        if tokio::fs::try_exists(&expected).await.unwrap_or(false) {
            return Some(expected);
        }

        // Regional variants such as en-US end up under their own suffix
        let mut candidates = Vec::new();
        let mut entries = tokio::fs::read_dir(scratch).await.ok()?;
        while let Ok(Some(entry)) = entries.next_entry().await {
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if name.starts_with(&format!("{}.", OUTPUT_STEM)) && name.ends_with(&format!(".{}", ext))
            {
                candidates.push(entry.path());
            }
        }
        candidates.sort();

        if let Some(found) = candidates.first() {
            debug!("Expected {:?}, using {:?}", expected, found);
        }
        candidates.into_iter().next()
    }
}

fn resolve_command(command_path: Option<&str>) -> Result<PathBuf, FetchError> {
    match command_path {
        Some(path) if Path::new(path).is_file() => Ok(PathBuf::from(path)),
        Some(name) => which(name).map_err(|_| FetchError::ToolNotFound(name.to_string())),
        None => which(DEFAULT_COMMAND)
            .map_err(|_| FetchError::ToolNotFound(DEFAULT_COMMAND.to_string())),
    }
}

#[async_trait]
impl SubtitleFetcher for YtDlpFetcher {
    fn name(&self) -> &'static str {
        "yt-dlp"
    }

    async fn fetch(&self, url: &str, scratch: &Path) -> Result<PathBuf, FetchError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(FetchError::InvalidUrl("url is empty".to_string()));
        }

        info!("Fetching '{}' subtitles for {}", self.language, url);

        let mut command = Command::new(&self.command);
        command
            .args(self.build_args(url, scratch))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let run = command.output();
        let result = match self.timeout {
            // Dropping the future on timeout kills the child
            Some(limit) => tokio::time::timeout(limit, run).await.map_err(|_| {
                warn!("yt-dlp timed out after {}s for {}", limit.as_secs(), url);
                FetchError::TimedOut {
                    seconds: limit.as_secs(),
                }
            })?,
            None => run.await,
        };

        let output = result.map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => {
                FetchError::ToolNotFound(self.command.display().to_string())
            }
            _ => FetchError::Spawn {
                tool: self.command.display().to_string(),
                source: e,
            },
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            warn!("yt-dlp exited with {}: {}", output.status, stderr);
            let status = output.status.to_string();
            return Err(FetchError::Failed {
                stderr: if stderr.is_empty() {
                    status.clone()
                } else {
                    stderr
                },
                status,
            });
        }

        debug!(
            "yt-dlp stdout: {}",
            String::from_utf8_lossy(&output.stdout).trim()
        );

        // yt-dlp exits cleanly with only a warning when no track exists
        self.locate_output(scratch)
            .await
            .ok_or_else(|| FetchError::NoSubtitles {
                language: self.language.clone(),
            })
    }
}
