use chrono::{Local, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use career_guide::config::{self, Config};
use career_guide::directory::{
    self, apply, CollegeFilter, CourseFilter, EventType, InstitutionType, ScholarshipFilter,
    ScholarshipType, Threshold, TimelineFilter,
};
use career_guide::interactive::Console;
use career_guide::output;
use career_guide::payment::{PaymentError, PaymentForm, PaymentGateway, Plan};
use career_guide::quiz::{
    basic_questions, evaluate, max_attainable, premium_questions, recommend_stream,
    score_answers, Category, OverallScoreMode, Question, ScoreMap, Stream,
};
use career_guide::store::{default_store_path, JsonFileStore, PremiumQuizData, PremiumStore};

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_PAYMENT: i32 = 2;
const EXIT_STORE: i32 = 3;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Take the 5-question stream quiz
    Quiz {
        /// Answers as 1-based option numbers, e.g. 1,3,2,4,1 (asked interactively if omitted)
        #[arg(long, value_delimiter = ',')]
        answers: Option<Vec<usize>>,
    },
    /// Take the 8-question premium assessment (requires a subscription)
    Premium {
        /// Answers as 1-based option numbers (asked interactively if omitted)
        #[arg(long, value_delimiter = ',')]
        answers: Option<Vec<usize>>,

        /// Score against the maximum attainable total instead of the raw total
        #[arg(long)]
        normalized: bool,
    },
    /// Show the saved premium assessment and analytics
    Report,
    /// Search colleges
    Colleges {
        /// Match name, location or course
        #[arg(short, long, default_value = "")]
        search: String,
        #[arg(long = "type", value_enum)]
        kind: Option<InstitutionType>,
        /// Distance in km, e.g. "<=10"
        #[arg(long)]
        distance: Option<Threshold>,
        /// Rating, e.g. ">=4.5"
        #[arg(long)]
        rating: Option<Threshold>,
        /// Lowest annual fee, e.g. "10000-20000"
        #[arg(long)]
        fees: Option<Threshold>,
    },
    /// Search courses
    Courses {
        #[arg(short, long, default_value = "")]
        search: String,
        #[arg(long, value_enum)]
        stream: Option<Stream>,
    },
    /// Search scholarships
    Scholarships {
        #[arg(short, long, default_value = "")]
        search: String,
        #[arg(long = "type", value_enum)]
        kind: Option<ScholarshipType>,
        /// Amount, e.g. ">=25000"
        #[arg(long)]
        amount: Option<Threshold>,
        /// Only deadlines on or before this date (YYYY-MM-DD)
        #[arg(long)]
        deadline_by: Option<NaiveDate>,
        /// Count days from this date instead of today
        #[arg(long)]
        today: Option<NaiveDate>,
    },
    /// Show upcoming admission, exam and scholarship dates
    Timeline {
        #[arg(short, long, default_value = "")]
        search: String,
        #[arg(long = "type", value_enum)]
        kind: Option<EventType>,
        /// Count days from this date instead of today
        #[arg(long)]
        today: Option<NaiveDate>,
    },
    /// List subscription plans
    Plans,
    /// Subscribe to premium (simulated payment)
    Subscribe {
        #[arg(long, value_enum, default_value_t = Plan::Annual)]
        plan: Plan,
        #[arg(long)]
        card_number: Option<String>,
        /// MM/YY
        #[arg(long)]
        expiry: Option<String>,
        #[arg(long)]
        cvv: Option<String>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        city: Option<String>,
        #[arg(long)]
        zip: Option<String>,
        #[arg(long)]
        country: Option<String>,
    },
    /// Clear all saved premium data
    Reset,
}

#[derive(Parser, Debug)]
#[command(name = "career-guide")]
#[command(about = "Stream quiz, premium assessment and college directory", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/career-guide/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("career_guide={}", default_level))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config_path = cli.config.map(PathBuf::from);
    let config = match config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if let Err(errors) = config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let use_colors = output::should_use_colors();
    let code = match cli.command {
        Commands::Quiz { answers } => run_quiz(&config, answers, use_colors),
        Commands::Premium {
            answers,
            normalized,
        } => run_premium(&config, answers, normalized, use_colors),
        Commands::Report => run_report(&config, use_colors),
        Commands::Colleges {
            search,
            kind,
            distance,
            rating,
            fees,
        } => {
            let colleges = directory::data::colleges();
            let filter = CollegeFilter {
                query: search,
                kind,
                distance_km: distance,
                rating,
                fees,
            };
            println!(
                "{}",
                output::format_college_list(&apply(&colleges, &filter), use_colors)
            );
            EXIT_SUCCESS
        }
        Commands::Courses { search, stream } => {
            let courses = directory::data::courses();
            let filter = CourseFilter {
                query: search,
                stream,
            };
            println!(
                "{}",
                output::format_course_list(&apply(&courses, &filter), use_colors)
            );
            EXIT_SUCCESS
        }
        Commands::Scholarships {
            search,
            kind,
            amount,
            deadline_by,
            today,
        } => {
            let scholarships = directory::data::scholarships();
            let filter = ScholarshipFilter {
                query: search,
                kind,
                amount,
                deadline_by,
            };
            let today = today.unwrap_or_else(|| Local::now().date_naive());
            println!(
                "{}",
                output::format_scholarship_list(&apply(&scholarships, &filter), today, use_colors)
            );
            EXIT_SUCCESS
        }
        Commands::Timeline {
            search,
            kind,
            today,
        } => {
            let events = directory::data::timeline_events();
            let filter = TimelineFilter {
                query: search,
                kind,
            };
            let today = today.unwrap_or_else(|| Local::now().date_naive());
            println!(
                "{}",
                output::format_timeline(&apply(&events, &filter), today, use_colors)
            );
            EXIT_SUCCESS
        }
        Commands::Plans => {
            println!("{}", output::format_plans(use_colors));
            EXIT_SUCCESS
        }
        Commands::Subscribe {
            plan,
            card_number,
            expiry,
            cvv,
            name,
            email,
            address,
            city,
            zip,
            country,
        } => {
            let defaults = PaymentForm::default();
            let form = PaymentForm {
                card_number: card_number.unwrap_or_default(),
                expiry_date: expiry.unwrap_or_default(),
                cvv: cvv.unwrap_or_default(),
                cardholder_name: name.unwrap_or_default(),
                email: email.unwrap_or_default(),
                billing_address: address.unwrap_or_default(),
                city: city.unwrap_or_default(),
                zip_code: zip.unwrap_or_default(),
                country: country.unwrap_or(defaults.country),
            };
            run_subscribe(&config, plan, form, use_colors)
        }
        Commands::Reset => match open_store(&config) {
            Ok(mut store) => match store.reset() {
                Ok(()) => {
                    println!("Premium data cleared.");
                    EXIT_SUCCESS
                }
                Err(e) => {
                    eprintln!("Store error: {:#}", e);
                    EXIT_STORE
                }
            },
            Err(code) => code,
        },
    };

    std::process::exit(code);
}

/// Open the premium store at the configured or default location
fn open_store(config: &Config) -> Result<PremiumStore<JsonFileStore>, i32> {
    let path = match config.store.path.clone() {
        Some(p) => p,
        None => match default_store_path() {
            Ok(p) => p,
            Err(e) => {
                eprintln!("Store error: {:#}", e);
                return Err(EXIT_STORE);
            }
        },
    };

    PremiumStore::open(JsonFileStore::new(path)).map_err(|e| {
        eprintln!("Store error: {:#}", e);
        EXIT_STORE
    })
}

/// Score either the given 1-based answers or an interactive run
fn collect_scores<C: Category>(
    questions: &[Question<C>],
    answers: Option<Vec<usize>>,
) -> Result<ScoreMap<C>, i32> {
    match answers {
        Some(given) => {
            let mut zero_based = Vec::with_capacity(given.len());
            for n in given {
                match n.checked_sub(1) {
                    Some(i) => zero_based.push(i),
                    None => {
                        eprintln!("Invalid answer 0: options are numbered from 1");
                        return Err(EXIT_INPUT);
                    }
                }
            }
            score_answers(questions, &zero_based).map_err(|e| {
                eprintln!("Invalid answers: {}", e);
                EXIT_INPUT
            })
        }
        None => Console::stdio().run_quiz(questions).map_err(|e| {
            eprintln!("Quiz aborted: {:#}", e);
            EXIT_INPUT
        }),
    }
}

fn run_quiz(config: &Config, answers: Option<Vec<usize>>, use_colors: bool) -> i32 {
    let mut store = match open_store(config) {
        Ok(s) => s,
        Err(code) => return code,
    };

    let questions = basic_questions();
    let attainable = max_attainable(&questions);
    if config.quiz.confidence_max != attainable {
        tracing::warn!(
            configured = config.quiz.confidence_max,
            attainable,
            "quiz.confidence_max differs from the highest attainable score"
        );
    }
    let start_time = Instant::now();
    let scores = match collect_scores(&questions, answers) {
        Ok(s) => s,
        Err(code) => return code,
    };
    let elapsed = start_time.elapsed();

    let recommendation = recommend_stream(&scores, config.quiz.confidence_max);
    println!();
    println!("{}", output::format_stream_result(&recommendation, use_colors));
    println!();
    println!("Completed in {}", output::format_elapsed(elapsed));

    if let Err(e) = store.set_has_completed_basic_quiz(true) {
        eprintln!("Store error: {:#}", e);
        return EXIT_STORE;
    }

    if store.state().should_show_premium_preview() {
        println!();
        println!("Unlock the premium assessment to:");
        for benefit in store.state().upgrade_benefits() {
            println!("  - {}", benefit);
        }
        println!("Run `career-guide plans` to see pricing.");
        store.set_show_premium_preview(true);
    }

    EXIT_SUCCESS
}

fn run_premium(
    config: &Config,
    answers: Option<Vec<usize>>,
    normalized: bool,
    use_colors: bool,
) -> i32 {
    let mut store = match open_store(config) {
        Ok(s) => s,
        Err(code) => return code,
    };

    if !store.state().is_premium_user {
        eprintln!("The premium assessment needs a subscription.");
        eprintln!("Premium includes:");
        for feature in store.state().premium_features() {
            eprintln!("  - {}", feature);
        }
        eprintln!("Run `career-guide subscribe` to upgrade.");
        return EXIT_INPUT;
    }

    let mode = if normalized {
        OverallScoreMode::Normalized
    } else {
        config.premium.overall_score
    };

    let questions = premium_questions();
    let start_time = Instant::now();
    let scores = match collect_scores(&questions, answers) {
        Ok(s) => s,
        Err(code) => return code,
    };
    let elapsed = start_time.elapsed();

    let result = evaluate(&scores, questions.len(), mode);
    println!();
    println!("{}", output::format_extended_result(&result, use_colors));
    println!();
    println!("Completed in {}", output::format_elapsed(elapsed));

    let data = PremiumQuizData {
        result,
        completed_at: Utc::now(),
    };
    if let Err(e) = store.update_premium_quiz_data(Some(data)) {
        eprintln!("Store error: {:#}", e);
        return EXIT_STORE;
    }

    EXIT_SUCCESS
}

fn run_report(config: &Config, use_colors: bool) -> i32 {
    let store = match open_store(config) {
        Ok(s) => s,
        Err(code) => return code,
    };
    let state = store.state();

    if !state.is_premium_user {
        println!("Not subscribed. Run `career-guide plans` to see what premium includes.");
    }

    match &state.premium_quiz_data {
        Some(data) => {
            println!(
                "Premium assessment completed {}",
                data.completed_at.format("%Y-%m-%d %H:%M UTC")
            );
            println!("{}", output::format_extended_result(&data.result, use_colors));
        }
        None if state.is_premium_user => {
            println!("No premium assessment yet. Run `career-guide premium`.");
        }
        None => {}
    }

    if let Some(analytics) = &state.analytics_data {
        println!();
        println!("{}", output::format_analytics(analytics, use_colors));
    }

    EXIT_SUCCESS
}

fn run_subscribe(config: &Config, plan: Plan, form: PaymentForm, use_colors: bool) -> i32 {
    let mut store = match open_store(config) {
        Ok(s) => s,
        Err(code) => return code,
    };

    if store.state().is_premium_user {
        println!("Already subscribed to premium.");
        return EXIT_SUCCESS;
    }

    println!(
        "{} - {} {}",
        plan.name(),
        plan.price(),
        plan.period()
    );

    let mut console = Console::stdio();
    let mut gateway =
        PaymentGateway::random(config.payment.delay(), config.payment.success_rate);
    let mut form = form;

    loop {
        form = match console.fill_payment_form(form) {
            Ok(f) => f,
            Err(e) => {
                eprintln!("Payment cancelled: {:#}", e);
                return EXIT_INPUT;
            }
        };

        println!("Processing payment...");
        match gateway.process(&form, plan) {
            Ok(receipt) => {
                println!("{}", output::format_receipt(&receipt, use_colors));
                if let Err(e) = store.set_premium_status(true, Utc::now()) {
                    eprintln!("Store error: {:#}", e);
                    return EXIT_STORE;
                }
                return EXIT_SUCCESS;
            }
            Err(PaymentError::Invalid(errors)) => {
                eprintln!("Please fix the following:");
                if let Err(e) = console.report_field_errors(&mut form, &errors) {
                    eprintln!("{:#}", e);
                    return EXIT_INPUT;
                }
            }
            Err(PaymentError::Declined) => {
                eprintln!("{}", PaymentError::Declined);
                match console.prompt_yes_no("Try again?", true) {
                    Ok(true) => gateway.reset(),
                    _ => return EXIT_PAYMENT,
                }
            }
        }
    }
}
