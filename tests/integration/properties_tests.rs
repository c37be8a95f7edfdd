//! Integration tests for single properties records.
//!
//! These tests verify:
//! - Loading through a source and reading typed fields
//! - Comment, indentation and garbage line handling on a published file
//! - Tile URL construction from the loaded record
//! - Error reporting for missing and malformed fields

use hips_survey::error::{IoError, PropertyError};
use hips_survey::{HipsFrame, HipsSurveyProperties, TileFormat};

use super::test_utils::{MockSource, DSS_COLOR_PROPERTIES};

const DSS_URL: &str = "http://alasky.u-strasbg.fr/DSS/DSSColor/properties";

async fn load_dss() -> HipsSurveyProperties {
    let source = MockSource::new().with_document(DSS_URL, DSS_COLOR_PROPERTIES);
    HipsSurveyProperties::load(&source, DSS_URL).await.unwrap()
}

// =============================================================================
// Typed Accessors
// =============================================================================

#[tokio::test]
async fn test_dss_typed_fields() {
    let dss = load_dss().await;

    assert_eq!(dss.title(), Ok("DSS colored"));
    assert_eq!(dss.hips_version(), Ok("1.31"));
    assert_eq!(dss.hips_frame(), Ok("equatorial"));
    assert_eq!(dss.frame(), Ok(HipsFrame::Equatorial));
    assert_eq!(dss.astropy_frame(), Ok("icrs"));
    assert_eq!(dss.hips_order(), Ok(9));
    assert_eq!(dss.tile_format(), Ok("jpeg"));
    assert_eq!(dss.tile_formats(), Ok(vec![TileFormat::Jpeg]));
    assert_eq!(dss.tile_width(), Ok(512));
    assert_eq!(dss.base_url(), Ok("http://alasky.u-strasbg.fr/DSS/DSSColor"));
    assert_eq!(
        dss.hips_service_url(),
        Ok("http://alasky.u-strasbg.fr/DSS/DSSColor")
    );
}

#[tokio::test]
async fn test_hips_version_parsed_by_caller() {
    let dss = load_dss().await;
    let version: f64 = dss.hips_version().unwrap().parse().unwrap();
    assert!((version - 1.31).abs() < 1e-9);
}

#[tokio::test]
async fn test_dss_comments_and_garbage_skipped() {
    let dss = load_dss().await;

    // The commented-out release date must not override the real one.
    assert_eq!(dss.get("hips_release_date"), Some("2015-05-11T08:45Z"));
    assert!(dss.iter().all(|(key, _)| !key.starts_with('#')));
    assert!(!dss.contains_key("~"));

    // Values keep inner spaces and brackets.
    assert_eq!(
        dss.get("hips_rgb_red"),
        Some("DSS2Merged [1488.0 8488.8125 14666.0 Linear]")
    );
    assert_eq!(dss.get("isColor"), Some("true"));
}

#[tokio::test]
async fn test_dss_entries_in_source_order() {
    let dss = load_dss().await;
    let keys: Vec<&str> = dss.iter().map(|(key, _)| key).take(3).collect();
    assert_eq!(keys, vec!["creator_did", "obs_collection", "obs_title"]);
}

// =============================================================================
// Tile Addressing
// =============================================================================

#[tokio::test]
async fn test_dss_tile_urls() {
    let dss = load_dss().await;
    let order = dss.hips_order().unwrap();

    assert_eq!(
        dss.tile_access_url(order, 23456),
        Ok("http://alasky.u-strasbg.fr/DSS/DSSColor/Norder9/Dir20000/".to_string())
    );
    assert_eq!(
        dss.tile_access_url(3, 9999),
        Ok("http://alasky.u-strasbg.fr/DSS/DSSColor/Norder3/Dir0/".to_string())
    );
    assert_eq!(
        dss.tile_url(order, 10000, TileFormat::Jpeg),
        Ok("http://alasky.u-strasbg.fr/DSS/DSSColor/Norder9/Dir10000/Npix10000.jpg".to_string())
    );
}

#[test]
fn test_tile_access_url_from_moc_url() {
    let properties = HipsSurveyProperties::parse("moc_access_url = http://host/DSS/Moc.fits");
    assert_eq!(
        properties.tile_access_url(9, 23456),
        Ok("http://host/DSS/Norder9/Dir20000/".to_string())
    );
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_accessor_errors() {
    let properties = HipsSurveyProperties::parse(
        "hips_order = deep\nhips_frame = altaz\nhips_tile_format = jpeg webp\n",
    );

    assert_eq!(
        properties.title(),
        Err(PropertyError::MissingField("obs_title"))
    );
    assert!(matches!(
        properties.hips_order(),
        Err(PropertyError::InvalidFormat { key: "hips_order", .. })
    ));
    assert_eq!(
        properties.astropy_frame(),
        Err(PropertyError::UnknownFrame("altaz".to_string()))
    );
    assert_eq!(
        properties.tile_formats(),
        Err(PropertyError::UnknownTileFormat("webp".to_string()))
    );
    // The raw string is still available.
    assert_eq!(properties.tile_format(), Ok("jpeg webp"));
}

#[tokio::test]
async fn test_load_missing_document() {
    let source = MockSource::new();
    let result = HipsSurveyProperties::load(&source, "http://nowhere/properties").await;

    assert!(matches!(result, Err(IoError::NotFound(_))));
    assert_eq!(source.request_count(), 1);
}

#[tokio::test]
async fn test_load_invalid_utf8() {
    let source = MockSource::new().with_document(
        "latin1",
        b"obs_title = Observatoire de Haute-Provence \xe9\nhips_order = 4\n".to_vec(),
    );
    let properties = HipsSurveyProperties::load(&source, "latin1").await.unwrap();

    assert_eq!(properties.hips_order(), Ok(4));
    assert!(properties.title().unwrap().ends_with('\u{FFFD}'));
}
