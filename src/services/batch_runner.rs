use crate::domain::{QueryIdentifier, QueryRange, ResultSet};

use super::{classify, extract, BatchError, Classification, FetchError, PageFetcher, Reject};

#[derive(Debug)]
pub enum DiagnosticKind {
    Rejected(Reject),
    ExtractionGap(String),
    FetchFailed(FetchError),
}

#[derive(Debug)]
pub struct Diagnostic {
    pub query: QueryIdentifier,
    pub kind: DiagnosticKind,
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub records: ResultSet,
    pub diagnostics: Vec<Diagnostic>,
    pub visited: u64,
}

impl BatchReport {
    /// Identifiers that contributed no record.
    pub fn skipped(&self) -> u64 {
        self.visited - self.records.len() as u64
    }
}

pub struct BatchRunner<'a> {
    fetcher: &'a dyn PageFetcher,
}

impl<'a> BatchRunner<'a> {
    pub fn new(fetcher: &'a dyn PageFetcher) -> Self {
        BatchRunner { fetcher }
    }

    /// Scrapes every identifier of `range` in ascending order, one at a time.
    ///
    /// Per-identifier failures are recorded as diagnostics and never stop the
    /// batch. The only error is a browser that cannot be started at all.
    pub async fn run(&self, range: QueryRange) -> Result<BatchReport, BatchError> {
        let mut report = BatchReport::default();
        if range.is_empty() {
            return Ok(report);
        }

        self.fetcher
            .ensure_ready()
            .await
            .map_err(BatchError::BrowserUnavailable)?;

        log::info!(
            "Starting batch over {}..={} ({} identifiers)",
            range.start,
            range.end,
            range.len()
        );

        for query in range.iter() {
            report.visited += 1;

            match self.scrape_query(query, &mut report.diagnostics).await {
                Ok(Classification::Accept(record)) => {
                    log::info!("Accepted {}", query);
                    report.records.push(record);
                }
                Ok(Classification::Reject(reject)) => {
                    log::info!("Skipping page {} as {}", query, reject);
                    report.diagnostics.push(Diagnostic {
                        query,
                        kind: DiagnosticKind::Rejected(reject),
                    });
                }
                Err(e) => {
                    log::error!("Skipping page {}: {}", query, e);
                    report.diagnostics.push(Diagnostic {
                        query,
                        kind: DiagnosticKind::FetchFailed(e),
                    });
                }
            }
        }

        log::info!(
            "Batch finished: {} accepted, {} skipped",
            report.records.len(),
            report.skipped()
        );

        Ok(report)
    }

    async fn scrape_query(
        &self,
        query: QueryIdentifier,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<Classification, FetchError> {
        let document = self.fetcher.fetch(query).await?;
        let extraction = extract(&document);

        for gap in extraction.gaps {
            log::warn!("Page {}: {}", query, gap);
            diagnostics.push(Diagnostic {
                query,
                kind: DiagnosticKind::ExtractionGap(gap),
            });
        }

        Ok(classify(extraction.fields))
    }
}
