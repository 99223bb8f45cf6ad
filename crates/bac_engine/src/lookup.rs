use std::sync::Arc;

use bac_core::{interpret, CandidateId};
use bac_logging::bac_info;

use crate::decode::decode_html_lossy;
use crate::extract::{PageExtractor, VisibleTextExtractor};
use crate::fetch::Fetcher;
use crate::{FailureKind, FetchError, LookupError, LookupOutput};

pub const ID_PLACEHOLDER: &str = "{id}";
pub const DEFAULT_URL_TEMPLATE: &str =
    "https://www.mauribac.com/fr/bac-2024-uKolupoGL/numero/{id}/";

/// Expands the template for one candidate and checks that the result is a URL.
pub fn url_for(template: &str, candidate_id: &CandidateId) -> Result<String, LookupError> {
    if !template.contains(ID_PLACEHOLDER) {
        return Err(LookupError::MissingPlaceholder(template.to_string()));
    }
    let expanded = template.replace(ID_PLACEHOLDER, candidate_id.as_str());
    url::Url::parse(&expanded)
        .map_err(|err| FetchError::new(FailureKind::InvalidUrl, format!("{expanded}: {err}")))?;
    Ok(expanded)
}

/// Fetch, decode, extract, interpret: one candidate at a time.
pub struct ResultLookup {
    fetcher: Arc<dyn Fetcher>,
    extractor: Box<dyn PageExtractor>,
    url_template: String,
}

impl ResultLookup {
    pub fn new(fetcher: Arc<dyn Fetcher>, url_template: impl Into<String>) -> Self {
        Self {
            fetcher,
            extractor: Box::new(VisibleTextExtractor),
            url_template: url_template.into(),
        }
    }

    pub fn with_extractor(mut self, extractor: Box<dyn PageExtractor>) -> Self {
        self.extractor = extractor;
        self
    }

    pub async fn lookup(&self, candidate_id: &CandidateId) -> Result<LookupOutput, LookupError> {
        let url = url_for(&self.url_template, candidate_id)?;
        bac_info!("Looking up candidate {} at {}", candidate_id, url);

        let fetched = self.fetcher.fetch(&url).await?;
        let decoded = decode_html_lossy(&fetched.bytes, fetched.metadata.content_type.as_deref());
        let page = self.extractor.extract(&decoded.html);
        let record = interpret(&page, candidate_id);
        bac_info!(
            "Candidate {}: {} ({} matches, encoding {})",
            candidate_id,
            record.status,
            record.raw_matches.len(),
            decoded.encoding_label
        );

        Ok(LookupOutput {
            url,
            encoding_label: decoded.encoding_label,
            page,
            record,
        })
    }
}
