use std::{io::BufReader, path::PathBuf, str::FromStr};

use stoat_prep::{config::Config, formula::Formula};

use parse_args::parse_args;

mod parse_args;

fn main() {
    let mut config = Config::default();

    let args: Vec<String> = std::env::args().collect();

    parse_args(&mut config, &args);

    let path = match args.last().filter(|_| args.len() > 1) {
        Some(arg) => match PathBuf::from_str(arg) {
            Ok(path) => path,
            Err(_) => {
                println!("c Path to CNF required");
                std::process::exit(1);
            }
        },
        None => {
            println!("c Path to CNF required");
            std::process::exit(1);
        }
    };

    println!("c Reading DIMACS file from {path:?}");

    let file = match std::fs::File::open(&path) {
        Ok(file) => file,
        Err(_) => {
            println!("c Failed to open CNF file");
            std::process::exit(1);
        }
    };

    let parse_result = match &path.extension() {
        #[cfg(feature = "xz")]
        Some(extension) if *extension == "xz" => {
            Formula::read_dimacs(BufReader::new(xz2::read::XzDecoder::new(&file)))
        }

        _ => Formula::read_dimacs(BufReader::new(&file)),
    };

    let mut formula = match parse_result {
        Ok(formula) => formula,
        Err(e) => {
            println!("c Failed to parse CNF file: {e:?}");
            std::process::exit(1);
        }
    };

    formula.config = config;

    println!("c Preprocessing {} clauses", formula.clause_count());

    formula.preprocess();

    println!(
        "c Done: {} clauses, {} units, status {}",
        formula.clause_count(),
        formula.units().count(),
        formula.status()
    );

    print!("{}", formula.as_dimacs());
}
