//! VADER lexicon loading and provisioning.
//!
//! The lexicon is a tab-separated text file, one entry per line:
//! `token<TAB>mean valence<TAB>standard deviation<TAB>raw ratings`.
//! Only the first two columns are used. When the file is missing it is
//! fetched once from the upstream VADER repository.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{debug, info};

use crate::error::{SentiError, SentiResult};

/// Upstream location of the VADER lexicon.
pub const DEFAULT_LEXICON_URL: &str =
    "https://raw.githubusercontent.com/cjhutto/vaderSentiment/master/vaderSentiment/vader_lexicon.txt";

/// File name used inside the cache directory.
pub const LEXICON_FILE_NAME: &str = "vader_lexicon.txt";

const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(60);

/// Token to mean-valence mapping. Tokens are stored lowercased.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: HashMap<String, f64>,
}

impl Lexicon {
    /// Parse lexicon text. Blank lines are skipped; any other line without a
    /// numeric second column is rejected.
    pub fn parse(text: &str) -> SentiResult<Self> {
        let mut entries = HashMap::new();

        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim_end_matches('\r');
            if line.trim().is_empty() {
                continue;
            }

            let mut fields = line.split('\t');
            let token = fields.next().unwrap_or_default();
            let measure = fields
                .next()
                .ok_or_else(|| SentiError::malformed(idx + 1, "missing valence column"))?;
            let valence: f64 = measure
                .trim()
                .parse()
                .map_err(|_| SentiError::malformed(idx + 1, format!("invalid valence '{}'", measure)))?;

            entries.insert(token.to_lowercase(), valence);
        }

        Ok(Self { entries })
    }

    /// Build a lexicon from literal entries.
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = (&'a str, f64)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(token, valence)| (token.to_lowercase(), valence))
                .collect(),
        }
    }

    /// Read and parse a lexicon file.
    pub async fn load(path: &Path) -> SentiResult<Self> {
        if !tokio::fs::try_exists(path).await? {
            return Err(SentiError::LexiconNotFound(path.display().to_string()));
        }
        let text = tokio::fs::read_to_string(path).await?;
        let lexicon = Self::parse(&text)?;
        if lexicon.is_empty() {
            return Err(SentiError::EmptyLexicon);
        }
        debug!(entries = lexicon.len(), path = %path.display(), "Loaded lexicon");
        Ok(lexicon)
    }

    /// Mean valence of a lowercased token.
    pub fn valence(&self, token: &str) -> Option<f64> {
        self.entries.get(token).copied()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.entries.contains_key(token)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Default on-disk location: `<cache dir>/senti/vader_lexicon.txt`.
pub fn default_lexicon_path() -> SentiResult<PathBuf> {
    let base = dirs::cache_dir()
        .ok_or_else(|| SentiError::config("could not determine a cache directory; pass a lexicon path"))?;
    Ok(base.join("senti").join(LEXICON_FILE_NAME))
}

/// Make sure a lexicon file exists at `path`, downloading it from `url` if it
/// does not. Returns `true` when a download happened.
pub async fn ensure_lexicon(path: &Path, url: &str) -> SentiResult<bool> {
    if tokio::fs::try_exists(path).await? {
        debug!(path = %path.display(), "Lexicon already present");
        return Ok(false);
    }
    download_lexicon(url, path).await?;
    Ok(true)
}

/// Download the lexicon from `url` into `path`, replacing any existing file.
///
/// The body is parsed before anything is written, and the file is written
/// to a sibling temp file first and then renamed into place.
pub async fn download_lexicon(url: &str, path: &Path) -> SentiResult<()> {
    info!(url, path = %path.display(), "Downloading VADER lexicon");

    let client = reqwest::Client::builder().timeout(DOWNLOAD_TIMEOUT).build()?;
    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        return Err(SentiError::Download(format!("{} returned {}", url, response.status())));
    }

    let body = response.text().await?;
    let lexicon = Lexicon::parse(&body)?;
    if lexicon.is_empty() {
        return Err(SentiError::Download(format!("{} returned an empty lexicon", url)));
    }

    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    let partial = path.with_extension("part");
    tokio::fs::write(&partial, body.as_bytes()).await?;
    tokio::fs::rename(&partial, path).await?;

    info!(entries = lexicon.len(), "Lexicon saved");
    Ok(())
}
