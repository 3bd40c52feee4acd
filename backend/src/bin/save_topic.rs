//! Save one topic to Notion from the command line.
//!
//! Reads the same `NOTION_*` configuration as the HTTP service and performs a
//! single submission through the same classification path.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::ffi::OsString;
use std::io;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tokio::runtime::Builder;
use topic_gateway::config::NotionSettings;
use topic_gateway::domain::ports::TopicSubmission;
use topic_gateway::domain::{SubmissionResult, Topic, TopicSubmissionService};
use topic_gateway::outbound::notion::NotionHttpPublisher;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

/// `save-topic` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "save-topic",
    about = "Save a topic to the configured Notion database as a new page",
    version
)]
struct CliArgs {
    /// Page title.
    #[arg(value_name = "TOPIC_NAME")]
    name: String,
    /// Paragraph text of the page.
    #[arg(value_name = "TOPIC_CONTENT")]
    content: String,
}

/// Lines printed for one run and whether the command succeeded.
#[derive(Debug, PartialEq, Eq)]
struct Report {
    lines: Vec<String>,
    success: bool,
}

impl Report {
    fn exit_code(&self) -> ExitCode {
        if self.success {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

fn report(outcome: &io::Result<SubmissionResult>) -> Report {
    match outcome {
        Ok(result) if result.is_success() => {
            let mut lines = vec![format!("✅ {}", result.message())];
            if let Some(url) = result.url() {
                lines.push(format!("🔗 Page URL: {url}"));
            }
            Report {
                lines,
                success: true,
            }
        }
        Ok(result) => Report {
            lines: vec![format!("❌ {}", result.message())],
            success: false,
        },
        Err(error) => Report {
            lines: vec![format!("❌ {error}")],
            success: false,
        },
    }
}

fn main() -> ExitCode {
    let args = CliArgs::parse();
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let report = report(&run(args));
    for line in &report.lines {
        println!("{line}");
    }
    report.exit_code()
}

fn parse_topic(args: CliArgs) -> io::Result<Topic> {
    Topic::try_new(args.name, args.content)
        .map_err(|error| io::Error::new(io::ErrorKind::InvalidInput, error))
}

fn run(args: CliArgs) -> io::Result<SubmissionResult> {
    let topic = parse_topic(args)?;
    // Settings come from the environment and configuration files only.
    let config = NotionSettings::load_from_args([OsString::from("save-topic")])
        .and_then(|settings| settings.validate())
        .map_err(io::Error::other)?;
    let publisher = NotionHttpPublisher::new(&config).map_err(io::Error::other)?;
    let service = TopicSubmissionService::new(Arc::new(publisher));

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|error| io::Error::other(format!("create Tokio runtime: {error}")))?;
    Ok(runtime.block_on(service.submit(&topic)))
}

#[cfg(test)]
mod tests {
    //! Unit tests for argument handling and outcome rendering.

    use clap::Parser;
    use rstest::rstest;
    use topic_gateway::domain::{CreatedPage, SubmissionFailure};

    use super::*;

    fn args(name: &str, content: &str) -> CliArgs {
        CliArgs {
            name: name.to_owned(),
            content: content.to_owned(),
        }
    }

    #[rstest]
    fn positional_arguments_are_parsed() {
        let parsed = CliArgs::try_parse_from(["save-topic", "Python Basics", "Some text"])
            .expect("arguments should parse");
        assert_eq!(parsed.name, "Python Basics");
        assert_eq!(parsed.content, "Some text");
    }

    #[rstest]
    fn missing_content_is_a_usage_error() {
        assert!(CliArgs::try_parse_from(["save-topic", "Python Basics"]).is_err());
    }

    #[rstest]
    #[case(Some("https://notion.so/abc123"))]
    #[case(None)]
    fn created_page_prints_tick_and_optional_url(#[case] url: Option<&str>) {
        let outcome = Ok(SubmissionResult::Created(CreatedPage {
            status_code: 200,
            page_id: Some("abc123".to_owned()),
            url: url.map(str::to_owned),
        }));

        let rendered = report(&outcome);

        assert!(rendered.success);
        let mut expected = vec!["✅ Page created successfully!".to_owned()];
        if let Some(link) = url {
            expected.push(format!("🔗 Page URL: {link}"));
        }
        assert_eq!(rendered.lines, expected);
    }

    #[rstest]
    fn failed_submission_prints_cross_and_fails() {
        let outcome = Ok(SubmissionResult::Failed(SubmissionFailure::rejected(
            401,
            r#"{"message":"API token is invalid."}"#,
        )));

        let rendered = report(&outcome);

        assert!(!rendered.success);
        assert_eq!(
            rendered.lines,
            vec![r#"❌ Failed to create page: {"message":"API token is invalid."}"#.to_owned()]
        );
    }

    #[rstest]
    #[case("", "content")]
    #[case("name", "")]
    fn invalid_topic_fails_before_any_call(#[case] name: &str, #[case] content: &str) {
        let error = parse_topic(args(name, content)).expect_err("topic must be rejected");
        assert_eq!(error.kind(), io::ErrorKind::InvalidInput);

        let rendered = report(&Err(error));

        assert!(!rendered.success);
        assert_eq!(rendered.lines.len(), 1);
        assert!(rendered.lines[0].starts_with("❌ "));
    }
}
