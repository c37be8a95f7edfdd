//! Test utilities for integration tests.
//!
//! Provides an in-memory source with request tracking, sample properties
//! text and a minimal HTTP server for exercising `HttpSource`.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use hips_survey::error::IoError;
use hips_survey::io::PropertiesSource;

// =============================================================================
// Mock Source
// =============================================================================

/// An in-memory source serving pre-configured documents.
pub struct MockSource {
    documents: HashMap<String, Bytes>,
    request_count: Arc<AtomicUsize>,
}

impl MockSource {
    pub fn new() -> Self {
        Self {
            documents: HashMap::new(),
            request_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_document(mut self, location: impl Into<String>, data: impl Into<Bytes>) -> Self {
        self.documents.insert(location.into(), data.into());
        self
    }

    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PropertiesSource for MockSource {
    async fn fetch(&self, location: &str) -> Result<Bytes, IoError> {
        self.request_count.fetch_add(1, Ordering::SeqCst);
        self.documents
            .get(location)
            .cloned()
            .ok_or_else(|| IoError::NotFound(location.to_string()))
    }

    fn name(&self) -> &str {
        "mock"
    }
}

// =============================================================================
// Sample Data
// =============================================================================

/// Properties of the CDS DSS colored survey, indented and commented as in
/// the published file.
pub const DSS_COLOR_PROPERTIES: &str = "
        creator_did          = ivo://CDS/P/DSS2/color
        obs_collection       = DSS colored
        obs_title            = DSS colored
        obs_copyright_url    = http://archive.stsci.edu/dss/acknowledging.html
        client_category      = Image/Optical/DSS
        hips_builder         = Aladin/HipsGen v9.039
        hips_release_date    = 2015-05-11T08:45Z
        # hips_release_date    = 2016-12-13T14:51Z
        hips_creator         = CDS (A.Oberto, P.Fernique)
        hips_version         = 1.31
        hips_order           = 9
        hips_frame           = equatorial
        hips_tile_width      = 512
        hips_tile_format     = jpeg
        dataproduct_type     = image
        moc_access_url       = http://alasky.u-strasbg.fr/DSS/DSSColor/Moc.fits
        hips_service_url     = http://alasky.u-strasbg.fr/DSS/DSSColor
        hips_status          = public master clonableOnce
        hips_rgb_red         = DSS2Merged [1488.0 8488.8125 14666.0 Linear]
        hips_pixel_scale     = 2.236E-4
        # Bandpass  422-967 THz
        em_min               = 7.104086682464e-7
        # hips_master_url     = ex: http://yourHipsServer/null
        # For compatibility
        label              = DSS colored
        coordsys           = C
        isColor            = true
        ~
        ";

/// Three-record survey list in MocServer `get=record` layout.
pub const SURVEY_LIST: &str = "ID = CDS/P/2MASS/H
obs_title = 2MASS H (1.66 microns)
hips_order = 9
hips_frame = equatorial
hips_tile_format = jpeg fits
moc_access_url = http://alasky.u-strasbg.fr/2MASS/H/Moc.fits

ID = CDS/P/Fermi/5
obs_title = Fermi LAT 5
hips_frame = galactic
hips_tile_width = 0

ID = CDS/P/DSS2/color
obs_title = DSS colored
hips_order = 9
hips_frame = equatorial
moc_access_url = http://alasky.u-strasbg.fr/DSS/DSSColor/Moc.fits
";

// =============================================================================
// Local HTTP Server
// =============================================================================

/// Serve canned responses on a random local port.
///
/// `routes` maps a request path to `(status, body)`; unknown paths get 404.
/// Returns the base URL, e.g. `http://127.0.0.1:54321`.
pub async fn spawn_http_server(routes: Vec<(&'static str, u16, Vec<u8>)>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let routes: Arc<HashMap<&'static str, (u16, Vec<u8>)>> = Arc::new(
        routes
            .into_iter()
            .map(|(path, status, body)| (path, (status, body)))
            .collect(),
    );

    tokio::spawn(async move {
        loop {
            let Ok((mut stream, _)) = listener.accept().await else {
                break;
            };
            let routes = Arc::clone(&routes);

            tokio::spawn(async move {
                let mut buf = vec![0u8; 4096];
                let n = stream.read(&mut buf).await.unwrap_or(0);
                let request = String::from_utf8_lossy(&buf[..n]);
                let path = request
                    .lines()
                    .next()
                    .and_then(|line| line.split_whitespace().nth(1))
                    .unwrap_or("/")
                    .to_string();

                let (status, body) = routes
                    .get(path.as_str())
                    .cloned()
                    .unwrap_or((404, b"not found".to_vec()));
                let reason = match status {
                    200 => "OK",
                    404 => "Not Found",
                    _ => "Error",
                };

                let head = format!(
                    "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                    status,
                    reason,
                    body.len()
                );
                let _ = stream.write_all(head.as_bytes()).await;
                let _ = stream.write_all(&body).await;
                let _ = stream.shutdown().await;
            });
        }
    });

    format!("http://{}", addr)
}
