//! Counsel operator CLI — one request-scoped legal-aid interaction.
//!
//! Plays the role the chat UI plays in a full deployment: it hands the
//! core a problem description, prints the structured analysis, and writes
//! the optional voice and letter artifacts next to the working directory.
//!
//! ```text
//! counsel "My landlord lock my shop" lagos
//! counsel --test-voice
//! ```

mod config;
mod credentials;

use counsel_analyzer::CaseAnalyzer;
use counsel_letter::{build_letter, LETTER_FILENAME};
use counsel_types::{CaseQuery, Jurisdiction};
use counsel_voice::{VoiceConfig, VoiceResult, VoiceSynthesizer};
use tracing_subscriber::EnvFilter;

struct Args {
    test_voice: bool,
    text: Option<String>,
    jurisdiction: Option<Jurisdiction>,
}

fn parse_args() -> Args {
    let mut test_voice = false;
    let mut positional = Vec::new();

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--test-voice" => test_voice = true,
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            _ => positional.push(arg),
        }
    }

    let text = positional.first().cloned();
    let jurisdiction = positional.get(1).and_then(|s| Jurisdiction::parse_label(s));

    Args {
        test_voice,
        text,
        jurisdiction,
    }
}

fn print_usage() {
    eprintln!("usage: counsel [--test-voice] \"<problem text>\" [jurisdiction]");
    eprintln!();
    eprintln!("jurisdictions:");
    for j in Jurisdiction::all() {
        eprintln!("  {}", j.label());
    }
}

fn resolve_config_path() -> Option<String> {
    if let Ok(path) = std::env::var("COUNSEL_CONFIG_PATH") {
        if !path.trim().is_empty() {
            return Some(path);
        }
    }
    Some("counsel.toml".to_string())
}

fn init_tracing(logging: &config::LoggingConfig) {
    let filter = EnvFilter::try_new(&logging.level).unwrap_or_else(|_| EnvFilter::new("info"));

    if logging.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() {
    let args = parse_args();

    let config = match config::load_config(resolve_config_path().as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    init_tracing(&config.logging);

    let creds = match credentials::resolve() {
        Ok(creds) => creds,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let synthesizer = match VoiceSynthesizer::new(VoiceConfig {
        yarngpt_api_key: creds.yarngpt_api_key.clone(),
        voice: config.voice.voice.clone(),
    }) {
        Ok(synthesizer) => synthesizer,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    if args.test_voice {
        let (ok, message) = synthesizer.test_primary_connection().await;
        if ok {
            println!("primary voice provider online: {}", message);
        } else {
            println!("primary voice provider offline: {}", message);
            std::process::exit(1);
        }
        return;
    }

    let text = match args.text {
        Some(text) => text,
        None => {
            print_usage();
            std::process::exit(2);
        }
    };

    let analyzer = match CaseAnalyzer::with_model(&creds.gemini_api_key, &config.analyzer.model) {
        Ok(analyzer) => analyzer,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let mut query = CaseQuery::new(text);
    if let Some(jurisdiction) = args.jurisdiction {
        query = query.with_jurisdiction(jurisdiction);
    }

    let analysis = match analyzer.analyze(&query).await {
        Ok(analysis) => analysis,
        Err(e) => {
            eprintln!("analysis failed: {}", e);
            std::process::exit(1);
        }
    };

    println!("Issue:    {}", analysis.legal_issue);
    println!("Citation: {}", analysis.citation());
    println!("Counsel:  {}", analysis.advice_pidgin);

    // Voice and letter are independent, optional post-analysis steps;
    // either failing leaves the textual advice intact.
    match synthesizer.synthesize(&analysis.advice_pidgin).await {
        VoiceResult::Audio(audio) => match audio.persist() {
            Ok(path) => println!("Audio:    {} (via {})", path.display(), audio.source()),
            Err(e) => eprintln!("could not write audio artifact: {}", e),
        },
        VoiceResult::Unavailable => println!("Audio:    unavailable"),
    }

    if let Some(letter_data) = &analysis.letter_data {
        match build_letter("Concerned Citizen", letter_data) {
            Ok(bytes) => match std::fs::write(LETTER_FILENAME, &bytes) {
                Ok(()) => println!("Letter:   {}", LETTER_FILENAME),
                Err(e) => eprintln!("could not write {}: {}", LETTER_FILENAME, e),
            },
            Err(e) => eprintln!("letter rendering failed: {}", e),
        }
    }
}
