use cli::file_utils::get_files;
use cli::model::cli_configuration::{CliConfiguration, OutputFormat};
use cli::report::{generate_json_report, generate_text_report, FileReport};
use kernel::analysis::analyze::{process_file, AnalyzeError};
use kernel::constants::CARGO_VERSION;

use anyhow::{Context, Result};
use getopts::Options;
use itertools::Itertools;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::process::exit;
use std::{env, fs};

fn print_usage(program: &str, opts: Options) {
    let brief = format!("Usage: {} [FILE...] [options]", program);
    print!("{}", opts.usage(&brief));
}

fn print_configuration(configuration: &CliConfiguration) {
    println!("Configuration");
    println!("=============");
    println!("version             : {}", CARGO_VERSION);
    println!("cores available     : {}", num_cpus::get());
    println!("cores used          : {}", configuration.num_cpus);
    println!(
        "source directory    : {}",
        configuration
            .source_directory
            .as_deref()
            .unwrap_or("none")
    );
    println!("#files passed       : {}", configuration.source_files.len());
    println!("output format       : {}", configuration.output_format);
    println!(
        "output file         : {}",
        configuration.output_file.as_deref().unwrap_or("stdout")
    );
    println!("use debug           : {}", configuration.use_debug);
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let program = args[0].clone();
    let mut opts = Options::new();

    opts.optopt(
        "i",
        "directory",
        "directory to analyze recursively",
        "/path/to/code",
    );
    opts.optopt("f", "format", "format of the output", "json/text");
    opts.optopt("o", "output", "output file name", "output.json");
    opts.optopt("c", "cpus", "number of cores to use", "--cpus 5");
    opts.optopt("d", "debug", "use debug mode", "yes/no");
    opts.optflag("h", "help", "print this help");
    opts.optflag("v", "version", "shows the tool version");

    let matches = match opts.parse(&args[1..]) {
        Ok(m) => m,
        Err(f) => {
            panic!("error when parsing arguments: {}", f)
        }
    };

    if matches.opt_present("v") {
        println!("Version: {}", CARGO_VERSION);
        exit(0);
    }

    if matches.opt_present("h") {
        print_usage(&program, opts);
        exit(0);
    }

    let output_format = match matches.opt_str("f") {
        Some(f) => match f.as_str() {
            "text" => OutputFormat::Text,
            _ => OutputFormat::Json,
        },
        None => OutputFormat::Json,
    };

    let use_debug = *matches
        .opt_str("d")
        .map(|value| value == "yes" || value == "true")
        .get_or_insert(env::var_os("MARKER_ANALYZER_DEBUG").is_some());

    let directory_to_analyze = matches.opt_str("i");
    let files_from_arguments = matches.free.clone();

    if directory_to_analyze.is_none() && files_from_arguments.is_empty() {
        eprintln!("no files to analyze, pass files or a directory with option -i");
        print_usage(&program, opts);
        exit(1)
    }

    let num_cores_requested = matches
        .opt_str("c")
        .map(|val| {
            val.parse::<usize>()
                .context("unable to parse `cpus` flag as integer")
        })
        .transpose()?;
    // Select the number of cores to use based on the user's CLI arg (or
    // fall back to using all).
    let num_cpus = choose_cpu_count(num_cores_requested);

    let configuration = CliConfiguration {
        use_debug,
        source_directory: directory_to_analyze,
        source_files: files_from_arguments,
        output_format,
        output_file: matches.opt_str("o"),
        num_cpus,
    };

    if configuration.use_debug {
        print_configuration(&configuration);
    }

    // explicitly-passed files must exist; a walked directory only yields
    // files that do
    let mut files_to_analyze: Vec<PathBuf> = configuration
        .source_files
        .iter()
        .map(PathBuf::from)
        .collect();
    if let Some(directory) = &configuration.source_directory {
        files_to_analyze.extend(
            get_files(directory)
                .with_context(|| format!("cannot read directory {}", directory))?,
        );
    }
    let files_to_analyze: Vec<PathBuf> = files_to_analyze.into_iter().unique().collect();

    rayon::ThreadPoolBuilder::new()
        .num_threads(configuration.num_cpus)
        .build_global()
        .context("unable to initialize the execution pool")?;

    if configuration.use_debug {
        eprintln!("analyzing {} files", files_to_analyze.len());
    }

    let results = files_to_analyze
        .par_iter()
        .map(|path: &PathBuf| {
            if configuration.use_debug {
                eprintln!("analyzing {}", path.display());
            }
            let pairs = process_file(path)?;
            Ok(FileReport {
                path: path.display().to_string(),
                pairs,
            })
        })
        .collect::<Result<Vec<_>, AnalyzeError>>();

    let reports: Vec<FileReport> = match results {
        Ok(reports) => reports,
        Err(error) => {
            eprintln!("{}", error);
            exit(1);
        }
    };

    let rendered = match configuration.output_format {
        OutputFormat::Json => generate_json_report(&reports)?,
        OutputFormat::Text => generate_text_report(&reports),
    };

    match &configuration.output_file {
        Some(output_file) => {
            fs::write(Path::new(output_file), rendered)
                .with_context(|| format!("cannot write output file {}", output_file))?;
        }
        None => {
            print!("{}", rendered);
        }
    }

    Ok(())
}

fn choose_cpu_count(requested: Option<usize>) -> usize {
    let available = num_cpus::get();
    match requested {
        Some(requested) if requested > available => {
            eprintln!(
                "warning: {} cores requested, only {} available",
                requested, available
            );
            available
        }
        Some(requested) => requested,
        None => available,
    }
}
