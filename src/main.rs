use std::{
    io::{self, Write},
    process,
};

use aviators_seo::{
    application::{
        SiteProfile, error::AppError, generate_listing_metadata, generate_post_metadata,
        generate_sitemap_entries, populate_draft, render_front_matter, render_robots_txt,
        render_sitemap_xml, robots_directives, score,
    },
    config::{self, Command, ListingArgs, PopulateArgs, RecordArgs, SitemapArgs},
    infra::{error::InfraError, fs, telemetry},
};
use serde::Serialize;
use time::OffsetDateTime;
use tracing::{Dispatch, Level, dispatcher, error, info};
use tracing_subscriber::fmt as tracing_fmt;

fn main() {
    if let Err(error) = run() {
        report_application_error(&error);
        process::exit(i32::from(error.exit_code()));
    }
}

fn report_application_error(error: &AppError) {
    let report = error.report();
    let message = report.messages.join(": ");

    if dispatcher::has_been_set() {
        error!(error = %message, source = report.source, "application error");
        return;
    }

    let subscriber = tracing_fmt()
        .with_writer(io::stderr)
        .with_max_level(Level::ERROR)
        .finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, || {
        error!(error = %message, source = report.source, "application error");
    });
}

fn run() -> Result<(), AppError> {
    let (cli_args, settings) = config::load_with_cli()
        .map_err(|err| InfraError::configuration(format!("failed to load configuration: {err}")))?;

    telemetry::init(&settings.logging)?;
    let site = SiteProfile::new(&settings.site);

    match cli_args.command {
        Command::Metadata(args) => run_metadata(&site, &args),
        Command::Listing(args) => run_listing(&site, &args),
        Command::Report(args) => run_report(&site, &args),
        Command::Sitemap(args) => run_sitemap(&site, &args),
        Command::Robots => write_stdout(&render_robots_txt(&robots_directives(&site))),
        Command::Populate(args) => run_populate(&site, &args),
    }
}

fn run_metadata(site: &SiteProfile, args: &RecordArgs) -> Result<(), AppError> {
    let record = fs::read_record(&args.file)?;
    print_json(&generate_post_metadata(site, &record))
}

fn run_listing(site: &SiteProfile, args: &ListingArgs) -> Result<(), AppError> {
    let metadata = generate_listing_metadata(site, args.category.as_deref(), args.page);
    print_json(&metadata)
}

fn run_report(site: &SiteProfile, args: &RecordArgs) -> Result<(), AppError> {
    let record = fs::read_record(&args.file)?;
    let report = score(site, &record);
    info!(
        slug = %record.slug,
        score = report.score,
        issues = report.validation.issues.len(),
        "scored record"
    );
    print_json(&report)
}

fn run_sitemap(site: &SiteProfile, args: &SitemapArgs) -> Result<(), AppError> {
    let records = fs::read_records(&args.file)?;
    let entries = generate_sitemap_entries(site, &records);
    info!(count = entries.len(), "built sitemap entries");

    if args.xml {
        write_stdout(&render_sitemap_xml(&entries))
    } else {
        print_json(&entries)
    }
}

fn run_populate(site: &SiteProfile, args: &PopulateArgs) -> Result<(), AppError> {
    let draft = fs::read_draft(&args.file)?;
    let output_dir = args.output_dir.as_path();
    let print = args.print;

    let post = populate_draft(site, draft, OffsetDateTime::now_utc(), |slug| {
        print || fs::slug_available(output_dir, slug)
    })?;

    let report = score(site, &post.to_content_record());
    info!(
        slug = %post.slug,
        word_count = post.word_count,
        reading_time = post.reading_time,
        category = %post.category,
        tags = ?post.tags,
        focus_keyword = %post.focus_keyword,
        score = report.score,
        "populated draft"
    );

    if print {
        write_stdout(&render_front_matter(&post)?)
    } else {
        let path = fs::write_post(output_dir, &post)?;
        write_stdout(&format!("{}\n", path.display()))
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    let mut rendered = serde_json::to_string_pretty(value)
        .map_err(|err| AppError::unexpected(format!("failed to serialize output: {err}")))?;
    rendered.push('\n');
    write_stdout(&rendered)
}

fn write_stdout(text: &str) -> Result<(), AppError> {
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(text.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(|err| InfraError::io("<stdout>", err).into())
}
