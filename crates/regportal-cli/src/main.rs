use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use regportal_core::{
    Organisation, PortalConfig, RegistrationJourneyState, RegistrationSession, SessionId, UserData,
};
use regportal_journey::{
    ComplianceSchemeGuard, GuardOutcome, GuardPipeline, InMemorySessionManager, RequestContext,
    SessionManager, SubmissionIdGuard, SubmissionPeriodGuard, SUBMISSION_ID_PARAM,
};
use regportal_phone::PhoneNumberValidator;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use url::form_urlencoded;
use uuid::Uuid;

fn cli() -> Command {
    Command::new("regportal")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Registration portal phone validation and journey guard checks")
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("TOML configuration file"),
        )
        .arg(
            Arg::new("json-logs")
                .long("json-logs")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit logs as JSON lines"),
        )
        .subcommand_required(true)
        .subcommand(
            Command::new("phone")
                .about("Validate one or more telephone numbers")
                .arg(
                    Arg::new("numbers")
                        .required(true)
                        .num_args(1..)
                        .help("Numbers exactly as a user would type them"),
                ),
        )
        .subcommand(
            Command::new("guard")
                .about("Run the journey guards against a synthetic session and request")
                .arg(
                    Arg::new("role")
                        .long("role")
                        .default_value("Producer")
                        .help("Role of the user's primary organisation"),
                )
                .arg(
                    Arg::new("scheme-id")
                        .long("scheme-id")
                        .value_parser(value_parser!(Uuid))
                        .help("Selected compliance scheme"),
                )
                .arg(
                    Arg::new("period")
                        .long("period")
                        .help("Submission period held in session"),
                )
                .arg(
                    Arg::new("submission-id")
                        .long("submission-id")
                        .help("Raw submissionId query value"),
                )
                .arg(
                    Arg::new("fallback")
                        .long("fallback")
                        .default_value("/")
                        .help("Fallback path for the period and submission id guards"),
                ),
        )
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn load_config(matches: &ArgMatches) -> anyhow::Result<PortalConfig> {
    match matches.get_one::<PathBuf>("config") {
        Some(path) => PortalConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display())),
        None => Ok(PortalConfig::default()),
    }
}

/// Print one line per number; true if all were valid
fn run_phone(config: &PortalConfig, numbers: &[String]) -> bool {
    let validator = PhoneNumberValidator::from_config(&config.phone);
    let mut all_valid = true;

    for number in numbers {
        let valid = validator.is_valid(number);
        all_valid &= valid;
        println!("{}\t{number}", if valid { "valid" } else { "invalid" });
    }

    all_valid
}

/// Session and request described by the `guard` arguments
fn guard_fixture(args: &ArgMatches) -> (RegistrationSession, String) {
    let role = args
        .get_one::<String>("role")
        .map_or("Producer", String::as_str);

    let session = RegistrationSession::new()
        .with_user_data(UserData::new(vec![Organisation::new(role)]))
        .with_registration(RegistrationJourneyState {
            selected_compliance_scheme_id: args.get_one::<Uuid>("scheme-id").copied(),
            submission_period: args.get_one::<String>("period").cloned(),
            submission_id: None,
        });

    let uri = match args.get_one::<String>("submission-id") {
        Some(raw) => {
            let query = form_urlencoded::Serializer::new(String::new())
                .append_pair(SUBMISSION_ID_PARAM, raw)
                .finish();
            format!("/check?{query}")
        }
        None => "/check".to_string(),
    };

    (session, uri)
}

async fn run_guard(config: &PortalConfig, args: &ArgMatches) -> anyhow::Result<GuardOutcome> {
    let fallback = args
        .get_one::<String>("fallback")
        .map_or("/", String::as_str);
    let (session, uri) = guard_fixture(args);

    let sessions = Arc::new(InMemorySessionManager::new(&config.journey));
    let session_id = SessionId::generate();
    sessions.save_session(&session_id, session).await?;

    let pipeline = GuardPipeline::new()
        .guard(ComplianceSchemeGuard::from_config(
            sessions.clone(),
            &config.journey,
        ))
        .guard(SubmissionPeriodGuard::new(sessions, fallback))
        .guard(SubmissionIdGuard::new(fallback));

    let ctx = RequestContext::from_uri(session_id, &uri);
    Ok(pipeline.check(&ctx).await?)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let matches = cli().get_matches();
    init_tracing(matches.get_flag("json-logs"));
    let config = load_config(&matches)?;

    match matches.subcommand() {
        Some(("phone", args)) => {
            let numbers: Vec<String> = args
                .get_many::<String>("numbers")
                .map(|values| values.cloned().collect())
                .unwrap_or_default();

            if !run_phone(&config, &numbers) {
                std::process::exit(1);
            }
        }
        Some(("guard", args)) => match run_guard(&config, args).await? {
            GuardOutcome::Continue => println!("continue"),
            GuardOutcome::Redirect(redirect) => {
                println!("redirect\t{}\t({})", redirect.location, redirect.guard);
            }
        },
        _ => unreachable!("subcommand is required"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guard_args(args: &[&str]) -> ArgMatches {
        let mut argv = vec!["regportal", "guard"];
        argv.extend_from_slice(args);
        let matches = cli().try_get_matches_from(argv).unwrap();
        matches.subcommand_matches("guard").unwrap().clone()
    }

    #[test]
    fn cli_definition_is_consistent() {
        cli().debug_assert();
    }

    #[test]
    fn phone_reports_overall_validity() {
        let config = PortalConfig::default();
        assert!(run_phone(&config, &["07812121212".to_string()]));
        assert!(!run_phone(
            &config,
            &["07812121212".to_string(), "078 1212 121A".to_string()]
        ));
    }

    #[tokio::test]
    async fn guard_redirects_unselected_compliance_scheme() {
        let args = guard_args(&["--role", "Compliance Scheme", "--period", "2025"]);
        let outcome = run_guard(&PortalConfig::default(), &args).await.unwrap();

        assert_eq!(
            outcome.redirect().map(|r| r.location.as_str()),
            Some("/compliance-scheme-landing")
        );
    }

    #[tokio::test]
    async fn guard_continues_when_all_preconditions_hold() {
        let submission = Uuid::new_v4().to_string();
        let args = guard_args(&[
            "--period",
            "2025",
            "--submission-id",
            &submission,
            "--fallback",
            "/start",
        ]);
        let outcome = run_guard(&PortalConfig::default(), &args).await.unwrap();

        assert!(outcome.is_continue());
    }

    #[test]
    fn submission_id_is_encoded_into_the_query() {
        let args = guard_args(&["--submission-id", "a&b=c#d%"]);
        let (_, uri) = guard_fixture(&args);
        let ctx = RequestContext::from_uri(SessionId::new("s"), &uri);

        assert_eq!(ctx.query_param(SUBMISSION_ID_PARAM), Some("a&b=c#d%"));
        assert_eq!(ctx.query_param("b"), None);
    }

    #[tokio::test]
    async fn guard_uses_fallback_for_missing_period() {
        let args = guard_args(&["--fallback", "/start"]);
        let outcome = run_guard(&PortalConfig::default(), &args).await.unwrap();

        assert_eq!(outcome.redirect().unwrap().guard, "submission_period");
        assert_eq!(outcome.redirect().unwrap().location, "/start");
    }
}
