use std::num::NonZeroU32;

use super::*;

#[test]
fn defaults_resolve_to_aviators_identity() {
    let settings = Settings::from_raw(RawSettings::default()).expect("valid settings");

    assert_eq!(settings.site, SiteSettings::default());
    assert_eq!(settings.logging.level, LevelFilter::INFO);
    assert!(matches!(settings.logging.format, LogFormat::Compact));
}

#[test]
fn cli_overrides_take_highest_precedence() {
    let mut raw = RawSettings::default();
    raw.site.site_name = Some("From File".to_string());
    raw.logging.level = Some("info".to_string());

    let overrides = SiteOverrides {
        site_name: Some("From CLI".to_string()),
        log_level: Some("debug".to_string()),
        ..Default::default()
    };

    raw.apply_overrides(&overrides);
    let settings = Settings::from_raw(raw).expect("valid settings");

    assert_eq!(settings.site.site_name, "From CLI");
    assert_eq!(settings.logging.level, LevelFilter::DEBUG);
}

#[test]
fn base_url_is_normalized_without_trailing_slash() {
    let mut raw = RawSettings::default();
    raw.site.base_url = Some(" https://staging.example.test/ ".to_string());

    let settings = Settings::from_raw(raw).expect("valid settings");
    assert_eq!(settings.site.base_url, "https://staging.example.test");
}

#[test]
fn base_url_must_be_absolute_http() {
    for candidate in ["not a url", "ftp://example.test", "https://example.test/?x=1"] {
        let mut raw = RawSettings::default();
        raw.site.base_url = Some(candidate.to_string());

        let err = Settings::from_raw(raw).expect_err("invalid base url");
        assert!(
            matches!(err, LoadError::Invalid { key: "site.base_url", .. }),
            "unexpected error for `{candidate}`: {err}"
        );
    }
}

#[test]
fn twitter_handle_gains_at_prefix() {
    let mut raw = RawSettings::default();
    raw.apply_overrides(&SiteOverrides {
        twitter_handle: Some("atc_pilots".to_string()),
        ..Default::default()
    });

    let settings = Settings::from_raw(raw).expect("valid settings");
    assert_eq!(settings.site.twitter_handle, "@atc_pilots");
}

#[test]
fn blank_site_name_is_rejected() {
    let mut raw = RawSettings::default();
    raw.site.site_name = Some("   ".to_string());

    let err = Settings::from_raw(raw).expect_err("blank site name");
    assert!(matches!(
        err,
        LoadError::Invalid {
            key: "site.site_name",
            ..
        }
    ));
}

#[test]
fn cli_json_logging_enforces_format() {
    let mut raw = RawSettings::default();
    let overrides = SiteOverrides {
        log_json: Some(true),
        ..Default::default()
    };

    raw.apply_overrides(&overrides);
    let settings = Settings::from_raw(raw).expect("valid settings");

    assert!(matches!(settings.logging.format, LogFormat::Json));
}

#[test]
fn invalid_log_level_is_rejected() {
    let mut raw = RawSettings::default();
    raw.logging.level = Some("chatty".to_string());

    let err = Settings::from_raw(raw).expect_err("invalid level");
    assert!(matches!(
        err,
        LoadError::Invalid {
            key: "logging.level",
            ..
        }
    ));
}

#[test]
fn parse_listing_arguments() {
    let args = CliArgs::parse_from([
        "aviators-seo",
        "listing",
        "--category",
        "DGCA Exams",
        "--page",
        "3",
        "--base-url",
        "https://example.test",
    ]);

    assert_eq!(
        args.overrides.base_url.as_deref(),
        Some("https://example.test")
    );
    match args.command {
        Command::Listing(listing) => {
            assert_eq!(listing.category.as_deref(), Some("DGCA Exams"));
            assert_eq!(listing.page, NonZeroU32::new(3));
        }
        _ => panic!("wrong command parsed"),
    }
}

#[test]
fn parse_sitemap_arguments() {
    let args = CliArgs::parse_from(["aviators-seo", "sitemap", "--xml", "/tmp/records.json"]);

    match args.command {
        Command::Sitemap(sitemap) => {
            assert!(sitemap.xml);
            assert_eq!(sitemap.file, std::path::Path::new("/tmp/records.json"));
        }
        _ => panic!("wrong command parsed"),
    }
}

#[test]
fn parse_populate_arguments_with_default_output() {
    let args = CliArgs::parse_from([
        "aviators-seo",
        "--log-json",
        "true",
        "populate",
        "/tmp/draft.json",
    ]);

    assert_eq!(args.overrides.log_json, Some(true));
    match args.command {
        Command::Populate(populate) => {
            assert_eq!(populate.file, std::path::Path::new("/tmp/draft.json"));
            assert_eq!(populate.output_dir, std::path::Path::new("content/blog"));
            assert!(!populate.print);
        }
        _ => panic!("wrong command parsed"),
    }
}

#[test]
fn page_zero_is_rejected_by_the_parser() {
    let result = CliArgs::try_parse_from(["aviators-seo", "listing", "--page", "0"]);
    assert!(result.is_err());
}
