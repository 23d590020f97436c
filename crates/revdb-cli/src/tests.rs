use clap::Parser;

use super::*;

#[test]
fn parses_db_ping_command() {
    let cli = Cli::try_parse_from(["revdb-cli", "db", "ping"]).expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Db {
            command: DbCommands::Ping
        })
    ));
}

#[test]
fn parses_db_migrate_command() {
    let cli =
        Cli::try_parse_from(["revdb-cli", "db", "migrate"]).expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Db {
            command: DbCommands::Migrate
        })
    ));
}

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["revdb-cli"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn seed_defaults_to_config_path() {
    let cli = Cli::try_parse_from(["revdb-cli", "seed"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Seed { ref path, dry_run: false })
            if path == &PathBuf::from("./config/businesses.yaml")
    ));
}

#[test]
fn seed_dry_run_with_path() {
    let cli = Cli::try_parse_from(["revdb-cli", "seed", "--path", "other.yaml", "--dry-run"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Seed { ref path, dry_run: true }) if path == &PathBuf::from("other.yaml")
    ));
}

#[test]
fn browse_accepts_negative_longitude() {
    let cli = Cli::try_parse_from([
        "revdb-cli",
        "browse",
        "--lat",
        "51.5072",
        "--lng",
        "-0.1276",
        "--radius-km",
        "10",
        "--verified",
    ])
    .expect("expected valid cli args");

    let Some(Commands::Browse(args)) = cli.command else {
        panic!("expected browse command");
    };
    assert_eq!(args.lng.as_deref(), Some("-0.1276"));
    assert_eq!(args.radius_km.as_deref(), Some("10"));
    assert!(args.verified);
}

#[test]
fn suggest_takes_positional_query() {
    let cli = Cli::try_parse_from(["revdb-cli", "suggest", "acme", "--country", "UK"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Suggest { ref query, country: Some(ref c) }) if query == "acme" && c == "UK"
    ));
}

#[test]
fn parses_countries_and_categories() {
    let cli = Cli::try_parse_from(["revdb-cli", "countries"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Some(Commands::Countries)));

    let cli = Cli::try_parse_from(["revdb-cli", "categories", "--country", "USA"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Categories { country: Some(ref c) }) if c == "USA"
    ));
}

#[test]
fn bundled_seed_file_is_valid() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config/businesses.yaml");
    let seed = revdb_core::load_seed_file(&path).expect("bundled seed file should validate");
    assert!(!seed.businesses.is_empty());
}
