//! List of HiPS survey records.

use std::borrow::Cow;

use tracing::debug;

use crate::config::DEFAULT_CATALOG_URL;
use crate::error::IoError;
use crate::io::{decode_text, FileSource, PropertiesSource};
use crate::properties::HipsSurveyProperties;

use super::table::SurveyTable;

/// Separator between records in a survey list.
pub const RECORD_SEPARATOR: &str = "\n\n";

/// HiPS survey properties list, as served by a MocServer `get=record` query.
///
/// # Example
///
/// ```
/// use hips_survey::HipsSurveyPropertiesList;
///
/// let surveys = HipsSurveyPropertiesList::parse(
///     "obs_title = 2MASS H\nhips_order = 9\n\nobs_title = DSS\nhips_frame = equatorial\n",
/// );
///
/// assert_eq!(surveys.len(), 2);
/// assert_eq!(surveys.get(0).unwrap().title().unwrap(), "2MASS H");
///
/// let table = surveys.as_table();
/// assert_eq!(table.columns(), &["hips_frame", "hips_order", "obs_title"]);
/// assert_eq!(table.cell(1, "hips_order"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HipsSurveyPropertiesList {
    data: Vec<HipsSurveyProperties>,
}

impl HipsSurveyPropertiesList {
    pub fn new(data: Vec<HipsSurveyProperties>) -> Self {
        Self { data }
    }

    /// Parse a survey list.
    ///
    /// Every block between blank-line separators becomes one record, in
    /// order. Blocks with no valid line still produce an empty record so
    /// that positions match the source. CRLF line endings are read as LF.
    pub fn parse(text: &str) -> Self {
        let text = normalize_line_endings(text);
        let data: Vec<HipsSurveyProperties> = text
            .split(RECORD_SEPARATOR)
            .map(HipsSurveyProperties::parse)
            .collect();

        debug!(
            records = data.len(),
            empty = data.iter().filter(|p| p.is_empty()).count(),
            "Parsed survey list"
        );

        Self { data }
    }

    /// Load and parse a survey list from any source.
    pub async fn load<S>(source: &S, location: &str) -> Result<Self, IoError>
    where
        S: PropertiesSource + ?Sized,
    {
        let bytes = source.fetch(location).await?;
        Ok(Self::parse(&decode_text(&bytes)))
    }

    /// Fetch a survey list, defaulting to the CDS MocServer query.
    pub async fn fetch<S>(source: &S, url: Option<&str>) -> Result<Self, IoError>
    where
        S: PropertiesSource + ?Sized,
    {
        Self::load(source, url.unwrap_or(DEFAULT_CATALOG_URL)).await
    }

    /// Read a survey list from the local filesystem.
    pub async fn read(path: &str) -> Result<Self, IoError> {
        Self::load(&FileSource::new(), path).await
    }

    /// Records in source order.
    pub fn records(&self) -> &[HipsSurveyProperties] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&HipsSurveyProperties> {
        self.data.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HipsSurveyProperties> {
        self.data.iter()
    }

    /// First record whose `obs_title` equals `title`.
    pub fn find_by_title(&self, title: &str) -> Option<&HipsSurveyProperties> {
        self.data.iter().find(|p| p.title().ok() == Some(title))
    }

    /// Table of all records; recomputed on every call.
    pub fn as_table(&self) -> SurveyTable {
        SurveyTable::from_records(&self.data)
    }
}

fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if text.contains("\r\n") {
        Cow::Owned(text.replace("\r\n", "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

impl<'a> IntoIterator for &'a HipsSurveyPropertiesList {
    type Item = &'a HipsSurveyProperties;
    type IntoIter = std::slice::Iter<'a, HipsSurveyProperties>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
