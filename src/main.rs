use clap::Parser;
use university_records::app::lifecycle::run_lifecycle;
use university_records::core::ConfigProvider;
use university_records::utils::error::ErrorCategory;
use university_records::utils::{logger, validation::Validate};
use university_records::{CliConfig, DataStore, LocalStorage, TomlConfig, UniversityError};

fn exit_code(e: &UniversityError) -> i32 {
    match e.category() {
        ErrorCategory::Configuration => 1,
        ErrorCategory::FileNotFound | ErrorCategory::Serialization => 2,
        ErrorCategory::NotFound | ErrorCategory::DuplicateId | ErrorCategory::InvalidData => 3,
    }
}

fn fail(e: &UniversityError) -> ! {
    tracing::error!("❌ {} (Category: {:?})", e, e.category());
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(exit_code(e));
}

fn run<C: ConfigProvider + Validate>(config: &C) {
    // Validate configuration
    if let Err(e) = config.validate() {
        fail(&e);
    }

    tracing::info!("📁 Data directory: {}", config.data_dir());
    let store = DataStore::new(LocalStorage::new(config.data_dir()));

    match run_lifecycle(&store, config) {
        Ok(report) => {
            tracing::info!(
                "Handled {} expected failures",
                report.expected_failures.len()
            );
            println!("✅ Seeded: {}", report.seeded);
            println!("✅ Reloaded from JSON: {}", report.reloaded_from_json);
            println!("✅ Students after create: {}", report.students_after_create);
            println!("✅ Final JSON: {}", report.final_json);
            println!("✅ Final XML: {}", report.final_xml);
            for failure in &report.expected_failures {
                println!("⚠️  {}", failure.user_friendly_message());
            }
        }
        Err(e) => fail(&e),
    }
}

fn main() {
    let cli = CliConfig::parse();

    // Load the TOML config when one is given
    let toml = match cli.config.as_deref().map(TomlConfig::from_file).transpose() {
        Ok(toml) => toml,
        Err(e) => {
            eprintln!("❌ Failed to load config file: {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(exit_code(&e));
        }
    };

    // Initialize logging
    let json_logs = cli.json_logs || toml.as_ref().map(TomlConfig::json_logs).unwrap_or(false);
    let level = match toml.as_ref().and_then(TomlConfig::log_level) {
        Some(level) if !cli.verbose => level.to_string(),
        _ if cli.verbose => "debug".to_string(),
        _ => "info".to_string(),
    };
    logger::init_logger(&level, json_logs);

    tracing::info!("Starting university records demo");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    match &toml {
        Some(toml) => run(toml),
        None => run(&cli),
    }
}
