use keepcut::adapters::outbound::card_lookup::init_card_lookup;
use keepcut::adapters::outbound::rest::RestClient;
use keepcut::adapters::outbound::token_store::init_token_store;
use keepcut::config::Config;
use keepcut::domain::app::App;
use keepcut::domain::card::ImageSize;
use keepcut::domain::scenario::Scenario;
use keepcut::domain::session::Credentials;
use keepcut::domain::vote::{Decision, UnknownDecision, VoteOutcome};
use keepcut::ports::outbound::api::ApiError;
use keepcut::ports::outbound::card_lookup::CardLookup;
use keepcut::ports::outbound::token_store::TokenStore;
use std::env;
use std::process::ExitCode;

const USAGE: &str = "usage: keepcut <command>
  cards <name>...          print image URLs for cards
  scenarios [page]         list a page of scenarios
  scenario <id>            show a scenario and your vote on it
  vote <id> keep|cut       vote on a scenario
  login <email> <password> log in and remember the session
  logout                   forget the stored session";

#[derive(Debug, PartialEq)]
enum Command {
    Cards(Vec<String>),
    Scenarios(Option<u32>),
    Scenario(String),
    Vote(String, Decision),
    Login(String, String),
    Logout,
}

impl Command {
    fn parse(args: &[String]) -> Result<Self, String> {
        let args: Vec<&str> = args.iter().map(String::as_str).collect();

        match args.as_slice() {
            ["cards", names @ ..] if !names.is_empty() => Ok(Command::Cards(
                names.iter().map(|name| (*name).to_string()).collect(),
            )),
            ["scenarios"] => Ok(Command::Scenarios(None)),
            ["scenarios", page] => page
                .parse()
                .map(|page| Command::Scenarios(Some(page)))
                .map_err(|_| format!("'{page}' is not a page number")),
            ["scenario", id] => Ok(Command::Scenario((*id).to_string())),
            ["vote", id, decision] => decision
                .parse()
                .map(|decision| Command::Vote((*id).to_string(), decision))
                .map_err(|why: UnknownDecision| why.to_string()),
            ["login", email, password] => {
                Ok(Command::Login((*email).to_string(), (*password).to_string()))
            }
            ["logout"] => Ok(Command::Logout),
            _ => Err(USAGE.to_string()),
        }
    }
}

fn print_scenario(scenario: &Scenario) {
    let play = if scenario.on_play { "play" } else { "draw" };
    println!(
        "{} | game {} vs {} on the {play} | keep {} / cut {}",
        scenario.id,
        scenario.game_number,
        scenario.opponent_archetype,
        scenario.keep_votes,
        scenario.cut_votes,
    );
    println!("  {}", scenario.hand.join(", "));
}

async fn run<L, TS>(app: &App<L, TS, RestClient>, command: Command) -> Result<(), ApiError>
where
    L: CardLookup + Send + Sync,
    TS: TokenStore + Send + Sync,
{
    match command {
        Command::Cards(names) => {
            for (name, url) in app.card_images(names.as_slice(), ImageSize::Normal).await {
                match url {
                    Some(url) => println!("{name}: {url}"),
                    None => println!("{name}: no image"),
                }
            }
        }
        Command::Scenarios(page) => {
            app.scenarios.fetch_all(page, None).await?;
            let window = app.scenarios.window();
            for scenario in app.scenarios.scenarios() {
                print_scenario(&scenario);
            }
            println!(
                "page {} of {} ({} scenarios)",
                window.page,
                window.page_count(),
                window.total
            );
        }
        Command::Scenario(id) => {
            app.scenarios.fetch_by_id(&id).await?;
            if let Some(scenario) = app.scenarios.current() {
                print_scenario(&scenario);
            }
            if app.session.is_authenticated() {
                match app.votes.get_user_vote(&id).await? {
                    Some(vote) => println!("your vote: {}", vote.decision),
                    None => println!("you have not voted"),
                }
            }
        }
        Command::Vote(id, decision) => {
            app.scenarios.fetch_by_id(&id).await?;
            if app.votes.submit(&id, decision).await? == VoteOutcome::Refreshed {
                if let Some(scenario) = app.scenarios.current() {
                    print_scenario(&scenario);
                }
            }
        }
        Command::Login(email, password) => {
            let response = app.session.login(&email, &password).await?;
            println!("logged in as {}", response.user.username);
        }
        Command::Logout => app.session.logout(),
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::from_env().expect("Invalid configuration");
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().skip(1).collect();
    let command = match Command::parse(&args) {
        Ok(command) => command,
        Err(why) => {
            eprintln!("{why}");
            return ExitCode::FAILURE;
        }
    };

    let credentials = Credentials::default();
    let api = RestClient::create(&config, credentials.clone()).expect("Error creating api client");
    let lookup = init_card_lookup(&config).expect("Error creating card lookup");
    let app = App::new(
        lookup,
        init_token_store(&config),
        api,
        credentials,
        config.page_size,
    );

    if let Err(why) = run(&app, command).await {
        log::error!("{why}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
