use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut cmd = clap::Command::new("cluecards")
        .version("1.0.0")
        .author("Cluecards Contributors")
        .about("Scrape trivia-show archives into study-card CSVs")
        .arg(clap::arg!(-v --verbose "Enable verbose progress output").global(true))
        .subcommand(
            clap::Command::new("download")
                .about("Download season pages into the local archive")
                .arg(clap::arg!(-s --seasons <NUMS> "Seasons to download, comma-separated"))
                .arg(
                    clap::arg!(--archive_dir <DIR> "Directory for downloaded pages")
                        .default_value("season-archive")
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                )
                .arg(clap::arg!(--timeout <SECS> "HTTP timeout in seconds").default_value("30"))
                .arg(clap::arg!(--user_agent <UA> "Custom User-Agent for HTTP requests")),
        )
        .subcommand(
            clap::Command::new("parse")
                .about("Parse downloaded season pages into one CSV per season")
                .arg(
                    clap::arg!(--archive_dir <DIR> "Directory of downloaded pages")
                        .default_value("season-archive")
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                )
                .arg(
                    clap::arg!(--out_dir <DIR> "Output directory for season CSVs")
                        .default_value("parsed-csv")
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                )
                .arg(clap::arg!(--season <NUM> "Parse a single season instead of every season found")),
        );

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "cluecards", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "cluecards", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "cluecards", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "cluecards", &completions_dir).unwrap();

    println!(
        "cargo:warning=Shell completions generated in: {}",
        completions_dir.display()
    );
}
