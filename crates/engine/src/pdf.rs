//! PDF page counting: structural parse, alternate library, byte-pattern estimate.
//!
//! Strategies are tried in order and the first one reporting a positive page
//! count wins. Resolution never fails; when everything else does, the entry
//! counts as a single page.

use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::RecvTimeoutError;
use file_indexer_shared_kernel::FileExtension;
use memchr::memmem;

use crate::config::PdfOptions;
use crate::error::{EngineError, Result};
use crate::mime::{self, read_head};

/// Leading bytes every PDF must start with.
pub const PDF_SIGNATURE: &[u8] = b"%PDF-";

/// Upper bound of bytes inspected by the heuristic estimate.
pub const HEURISTIC_SCAN_LIMIT: u64 = 1024 * 1024;

pub const MIN_ESTIMATE: usize = 1;
pub const MAX_ESTIMATE: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageCountMethod {
    Structural,
    Alternate,
    Heuristic,
    /// Not a PDF, or every strategy failed.
    Default,
}

impl fmt::Display for PageCountMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Structural => "structural",
            Self::Alternate => "alternate",
            Self::Heuristic => "heuristic",
            Self::Default => "default",
        };
        f.write_str(name)
    }
}

/// Which PDF libraries the resolver may use.
///
/// A capability whose cargo feature was compiled out stays off regardless of
/// what was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PdfCapabilities {
    structural: bool,
    alternate: bool,
}

impl PdfCapabilities {
    pub const fn available() -> Self {
        Self {
            structural: cfg!(feature = "structural"),
            alternate: cfg!(feature = "alternate"),
        }
    }

    pub const fn none() -> Self {
        Self {
            structural: false,
            alternate: false,
        }
    }

    #[must_use]
    pub const fn with_structural(mut self, enabled: bool) -> Self {
        self.structural = enabled && cfg!(feature = "structural");
        self
    }

    #[must_use]
    pub const fn with_alternate(mut self, enabled: bool) -> Self {
        self.alternate = enabled && cfg!(feature = "alternate");
        self
    }

    pub const fn structural(self) -> bool {
        self.structural
    }

    pub const fn alternate(self) -> bool {
        self.alternate
    }
}

impl Default for PdfCapabilities {
    fn default() -> Self {
        Self::available()
    }
}

/// One way of counting the pages of a file already known to look like a PDF.
pub trait PageCounter: Send + Sync {
    fn method(&self) -> PageCountMethod;

    /// # Errors
    /// Returns an error when the strategy cannot determine a page count.
    fn count_pages(&self, path: &Path) -> Result<usize>;
}

fn strategy_error(method: PageCountMethod, path: &Path, reason: impl fmt::Display) -> EngineError {
    EngineError::PageCount {
        method,
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}

/// Page tree parsed by `pdf_oxide`.
#[cfg(feature = "structural")]
#[derive(Debug, Default)]
pub struct StructuralCounter;

#[cfg(feature = "structural")]
impl PageCounter for StructuralCounter {
    fn method(&self) -> PageCountMethod {
        PageCountMethod::Structural
    }

    fn count_pages(&self, path: &Path) -> Result<usize> {
        let mut document = pdf_oxide::document::PdfDocument::open(path)
            .map_err(|e| strategy_error(self.method(), path, e))?;
        document.page_count().map_err(|e| strategy_error(self.method(), path, e))
    }
}

/// Page dictionary collected by `lopdf`.
#[cfg(feature = "alternate")]
#[derive(Debug, Default)]
pub struct AlternateCounter;

#[cfg(feature = "alternate")]
impl PageCounter for AlternateCounter {
    fn method(&self) -> PageCountMethod {
        PageCountMethod::Alternate
    }

    fn count_pages(&self, path: &Path) -> Result<usize> {
        let document = lopdf::Document::load(path).map_err(|e| strategy_error(self.method(), path, e))?;
        Ok(document.get_pages().len())
    }
}

/// Estimate from raw byte patterns in the first [`HEURISTIC_SCAN_LIMIT`] bytes.
#[derive(Debug, Default)]
pub struct HeuristicCounter;

impl PageCounter for HeuristicCounter {
    fn method(&self) -> PageCountMethod {
        PageCountMethod::Heuristic
    }

    fn count_pages(&self, path: &Path) -> Result<usize> {
        let bytes = read_head(path, HEURISTIC_SCAN_LIMIT).map_err(|source| EngineError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(estimate_page_count(&bytes))
    }
}

/// Occurrences of `needle` not immediately followed by `s` (which would be `/Pages`).
fn count_page_markers(haystack: &[u8], needle: &[u8]) -> usize {
    memmem::find_iter(haystack, needle)
        .filter(|&at| haystack.get(at + needle.len()) != Some(&b's'))
        .count()
}

/// Largest of the page-object counts and `endobj / 10`, clamped to
/// [`MIN_ESTIMATE`]..=[`MAX_ESTIMATE`].
#[must_use]
pub fn estimate_page_count(bytes: &[u8]) -> usize {
    let spaced = count_page_markers(bytes, b"/Type /Page");
    let compact = count_page_markers(bytes, b"/Type/Page");
    let objects = (memmem::find_iter(bytes, b"endobj").count() / 10).max(1);
    spaced.max(compact).max(objects).clamp(MIN_ESTIMATE, MAX_ESTIMATE)
}

/// `.pdf` extension, `%PDF-` signature and a PDF media type, all three.
#[must_use]
pub fn looks_like_pdf(path: &Path) -> bool {
    if !FileExtension::from_path(path).is("pdf") {
        return false;
    }
    let signed = read_head(path, PDF_SIGNATURE.len() as u64).is_ok_and(|head| head == PDF_SIGNATURE);
    signed && mime::guess_mime_type(path) == mime::PDF
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageResolution {
    pub pages: usize,
    pub method: PageCountMethod,
}

impl PageResolution {
    const fn single() -> Self {
        Self {
            pages: 1,
            method: PageCountMethod::Default,
        }
    }
}

/// Ordered try-list of [`PageCounter`]s with an optional time budget per attempt.
pub struct PdfPageResolver {
    strategies: Vec<Arc<dyn PageCounter>>,
    budget: Option<Duration>,
}

impl fmt::Debug for PdfPageResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let methods: Vec<_> = self.strategies.iter().map(|s| s.method()).collect();
        f.debug_struct("PdfPageResolver")
            .field("strategies", &methods)
            .field("budget", &self.budget)
            .finish()
    }
}

impl PdfPageResolver {
    pub fn new(strategies: Vec<Arc<dyn PageCounter>>, budget: Option<Duration>) -> Self {
        Self { strategies, budget }
    }

    /// Library strategies enabled by `options.capabilities`, then the heuristic.
    pub fn from_options(options: &PdfOptions) -> Self {
        let mut strategies: Vec<Arc<dyn PageCounter>> = Vec::with_capacity(3);
        #[cfg(feature = "structural")]
        if options.capabilities.structural() {
            strategies.push(Arc::new(StructuralCounter));
        }
        #[cfg(feature = "alternate")]
        if options.capabilities.alternate() {
            strategies.push(Arc::new(AlternateCounter));
        }
        strategies.push(Arc::new(HeuristicCounter));
        Self::new(strategies, options.timeout)
    }

    pub fn methods(&self) -> Vec<PageCountMethod> {
        self.strategies.iter().map(|s| s.method()).collect()
    }

    /// Page count of `path`; `1` for anything that does not look like a PDF.
    pub fn resolve(&self, path: &Path) -> PageResolution {
        if !looks_like_pdf(path) {
            return PageResolution::single();
        }

        for strategy in &self.strategies {
            match self.attempt(strategy, path) {
                Ok(pages) if pages > 0 => {
                    log::debug!("{}: {pages} pages ({})", path.display(), strategy.method());
                    return PageResolution {
                        pages,
                        method: strategy.method(),
                    };
                }
                Ok(_) => log::debug!("{} reported zero pages for {}", strategy.method(), path.display()),
                Err(err) => log::debug!("{err}"),
            }
        }

        log::warn!("could not count pages of {}; assuming 1", path.display());
        PageResolution::single()
    }

    fn attempt(&self, strategy: &Arc<dyn PageCounter>, path: &Path) -> Result<usize> {
        let Some(budget) = self.budget.filter(|_| strategy.method() != PageCountMethod::Heuristic) else {
            return invoke(strategy.as_ref(), path);
        };

        let (tx, rx) = crossbeam_channel::bounded(1);
        let worker = Arc::clone(strategy);
        let owned = path.to_path_buf();
        std::thread::Builder::new()
            .name("pdf-page-count".to_string())
            .spawn(move || {
                let _ = tx.send(invoke(worker.as_ref(), &owned));
            })
            .map_err(|e| strategy_error(strategy.method(), path, e))?;

        match rx.recv_timeout(budget) {
            Ok(result) => result,
            // The worker is left to finish on its own; its result is dropped.
            Err(RecvTimeoutError::Timeout) => Err(EngineError::PageCountTimeout {
                method: strategy.method(),
                path: path.to_path_buf(),
                budget,
            }),
            Err(RecvTimeoutError::Disconnected) => Err(strategy_error(strategy.method(), path, "worker exited")),
        }
    }
}

impl Default for PdfPageResolver {
    fn default() -> Self {
        Self::from_options(&PdfOptions::default())
    }
}

fn invoke(strategy: &dyn PageCounter, path: &Path) -> Result<usize> {
    catch_unwind(AssertUnwindSafe(|| strategy.count_pages(path)))
        .unwrap_or_else(|_| Err(strategy_error(strategy.method(), path, "parser panicked")))
}
